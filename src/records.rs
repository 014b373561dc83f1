//! Flat, ephemeral scan and communication records.
//!
//! Every record is constructed at scan time, serialized immediately and then
//! discarded; nothing is ever read back or mutated.  Field casing on the wire
//! is fixed by the output format, hence the serde renames.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// UTC timestamp in RFC 3339, shared by all records and file names.
pub fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// One Wi-Fi access point observed during a scan pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WifiRecord {
    #[serde(rename = "SSID")]
    pub ssid: String,
    #[serde(rename = "BSSID")]
    pub bssid: String,
    #[serde(rename = "Signal")]
    pub signal: i32,
    #[serde(rename = "Frequency")]
    pub frequency: u32,
    #[serde(rename = "Timestamp")]
    pub timestamp: String,
}

/// One classic (BR/EDR) Bluetooth device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BtClassicRecord {
    #[serde(rename = "Address")]
    pub address: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Type")]
    pub device_type: String,
    #[serde(rename = "Timestamp")]
    pub timestamp: String,
}

/// One BLE device.  `rssi` is absent when the adapter did not report one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BleRecord {
    #[serde(rename = "Address")]
    pub address: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "RSSI")]
    pub rssi: Option<i16>,
    #[serde(rename = "Type")]
    pub device_type: String,
    #[serde(rename = "Timestamp")]
    pub timestamp: String,
}

/// Placeholder name used when a BLE device advertises none.
pub const UNKNOWN_NAME: &str = "Unknown";

/// Result of a one-shot RFCOMM greeting exchange.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BtCommRecord {
    #[serde(rename = "to")]
    pub target: String,
    pub sent: String,
    pub received: String,
    pub time: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Reachability {
    Reachable,
    Unreachable,
}

/// Result of an ICMP reachability probe against one Wi-Fi target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WifiCommRecord {
    pub target: String,
    pub status: Reachability,
    pub stdout: String,
    pub stderr: String,
    pub time: String,
}

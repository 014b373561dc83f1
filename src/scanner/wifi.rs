// src/scanner/wifi.rs

//! Wi-Fi access point discovery through nmcli.
//!
//! Mirrors the trigger-then-read shape of the underlying driver: request a
//! rescan, give the radio a fixed settle window, then read the station list
//! in terse mode.  Terse output is colon-separated with backslash escapes,
//! so the BSSID field itself contains escaped colons.

use crate::config::ScanConfig;
use crate::records::{WifiRecord, timestamp};
use crate::scout_log;
use super::ScanError;
use log::Level;
use tokio::process::Command;

const COMPONENT: &str = "scanner::wifi";
const NMCLI: &str = "nmcli";

/// Scan for access points.  Any failure is logged and yields an empty set.
pub async fn scan(cfg: &ScanConfig) -> Vec<WifiRecord> {
    scan_with_backend(cfg, NMCLI).await
}

/// Backend name is a parameter so the failure arm can be exercised without
/// a real radio.
async fn scan_with_backend(cfg: &ScanConfig, backend: &str) -> Vec<WifiRecord> {
    match scan_inner(cfg, backend).await {
        Ok(records) => {
            scout_log!(Level::Info, COMPONENT, "Wi-Fi scan found {} access point(s)", records.len());
            records
        }
        Err(e) => {
            scout_log!(Level::Error, COMPONENT, "Wi-Fi scan error: {}", e);
            Vec::new()
        }
    }
}

async fn scan_inner(cfg: &ScanConfig, backend: &str) -> Result<Vec<WifiRecord>, ScanError> {
    let mut rescan = Command::new(backend);
    rescan.args(["dev", "wifi", "rescan"]);
    if let Some(iface) = &cfg.wifi_interface {
        rescan.args(["ifname", iface]);
    }
    // A rescan request can be refused while the radio is busy; the list
    // below still returns the most recent results, so only log it.
    let triggered = rescan.output().await?;
    if !triggered.status.success() {
        scout_log!(
            Level::Debug,
            COMPONENT,
            "nmcli rescan refused ({}); reading cached results",
            triggered.status
        );
    }

    tokio::time::sleep(cfg.wifi_settle).await;

    let mut list = Command::new(backend);
    list.args(["-t", "-f", "SSID,BSSID,SIGNAL,FREQ", "dev", "wifi", "list", "--rescan", "no"]);
    if let Some(iface) = &cfg.wifi_interface {
        list.args(["ifname", iface]);
    }
    let out = list.output().await?;
    if !out.status.success() {
        return Err(ScanError::Backend {
            status: out.status,
            stderr: String::from_utf8_lossy(&out.stderr).trim().to_string(),
        });
    }

    Ok(parse_station_list(&String::from_utf8_lossy(&out.stdout)))
}

/// Parse the full terse station list; malformed lines are skipped.
fn parse_station_list(text: &str) -> Vec<WifiRecord> {
    text.lines().filter_map(parse_station_line).collect()
}

/// One terse line: `SSID:BSSID:SIGNAL:FREQ`, e.g.
/// `CoffeeShop:AA\:BB\:CC\:DD\:EE\:FF:72:2412 MHz`.
fn parse_station_line(line: &str) -> Option<WifiRecord> {
    let fields = split_terse(line);
    if fields.len() < 4 {
        return None;
    }
    let signal: i32 = fields[2].trim().parse().ok()?;
    let frequency: u32 = fields[3].split_whitespace().next()?.parse().ok()?;
    Some(WifiRecord {
        ssid: fields[0].clone(),
        bssid: fields[1].clone(),
        signal,
        frequency,
        timestamp: timestamp(),
    })
}

/// Split a terse nmcli line on unescaped colons, unescaping `\:` and `\\`.
fn split_terse(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut chars = line.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                if let Some(escaped) = chars.next() {
                    current.push(escaped);
                }
            }
            ':' => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    fields.push(current);
    fields
}

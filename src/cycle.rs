// src/cycle.rs

//! One full scan-and-communicate pass.
//!
//! Strictly sequential: Wi-Fi → classic Bluetooth → BLE → communication
//! sweep.  Each scan persists its own file; a failed scan contributes an
//! empty set and the cycle continues.

use crate::comms;
use crate::config::Config;
use crate::records::{BleRecord, BtClassicRecord, WifiRecord};
use crate::scanner;
use crate::scout_log;
use crate::store::Store;
use log::Level;

/// Everything one cycle discovered, kept for the manual prompt.
#[derive(Debug, Default)]
pub struct ScanSummary {
    pub wifi: Vec<WifiRecord>,
    pub classic: Vec<BtClassicRecord>,
    pub ble: Vec<BleRecord>,
}

pub async fn scan_and_communicate(cfg: &Config, store: &Store) -> ScanSummary {
    scout_log!(Level::Info, "cycle", "Starting full scan & communication cycle");

    let wifi = scanner::wifi::scan(&cfg.scan).await;
    store.persist(&wifi, "wifi_scans", "wifi");

    let classic = scanner::bluetooth::scan(&cfg.scan).await;
    store.persist(&classic, "bt_scans", "classic");

    let ble = scanner::ble::scan(&cfg.scan).await;
    store.persist(&ble, "bt_scans", "ble");

    comms::auto_communicate(&cfg.comm, store, &classic, &wifi).await;

    scout_log!(
        Level::Info,
        "cycle",
        "Cycle complete: {} AP(s), {} classic, {} BLE",
        wifi.len(),
        classic.len(),
        ble.len()
    );
    ScanSummary { wifi, classic, ble }
}

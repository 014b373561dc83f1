// src/scanner/ble.rs

//! Bluetooth Low Energy discovery, bounded by an explicit timeout.

use crate::config::ScanConfig;
use crate::records::{BleRecord, UNKNOWN_NAME, timestamp};
use crate::scout_log;
use super::{ScanError, collect_discovered};
use bluer::{DiscoveryFilter, DiscoveryTransport};
use log::Level;

const COMPONENT: &str = "scanner::ble";

/// Discover BLE devices.  Any failure is logged and yields an empty set.
pub async fn scan(cfg: &ScanConfig) -> Vec<BleRecord> {
    match scan_inner(cfg).await {
        Ok(records) => {
            scout_log!(Level::Info, COMPONENT, "BLE scan found {} device(s)", records.len());
            records
        }
        Err(e) => {
            scout_log!(Level::Error, COMPONENT, "BLE scan error: {}", e);
            Vec::new()
        }
    }
}

async fn scan_inner(cfg: &ScanConfig) -> Result<Vec<BleRecord>, ScanError> {
    let session = bluer::Session::new().await?;
    let adapter = session.default_adapter().await?;
    adapter.set_powered(true).await?;
    adapter
        .set_discovery_filter(DiscoveryFilter {
            transport: DiscoveryTransport::Le,
            ..Default::default()
        })
        .await?;

    scout_log!(
        Level::Debug,
        COMPONENT,
        "Discovering on {} for {:?}",
        adapter.name(),
        cfg.ble_timeout
    );
    let addresses = collect_discovered(&adapter, cfg.ble_timeout).await?;

    let mut records = Vec::with_capacity(addresses.len());
    for addr in addresses {
        let (name, rssi) = match adapter.device(addr) {
            Ok(device) => (
                device.name().await.ok().flatten(),
                device.rssi().await.ok().flatten(),
            ),
            Err(_) => (None, None),
        };
        records.push(BleRecord {
            address: addr.to_string(),
            name: name.unwrap_or_else(|| UNKNOWN_NAME.into()),
            rssi,
            device_type: "BLE".into(),
            timestamp: timestamp(),
        });
    }
    Ok(records)
}

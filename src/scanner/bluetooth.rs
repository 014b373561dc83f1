// src/scanner/bluetooth.rs

//! Classic (BR/EDR) Bluetooth discovery with name resolution.

use crate::config::ScanConfig;
use crate::records::{BtClassicRecord, timestamp};
use crate::scout_log;
use super::{ScanError, collect_discovered};
use bluer::{DiscoveryFilter, DiscoveryTransport};
use log::Level;

const COMPONENT: &str = "scanner::bluetooth";

/// Discover classic devices.  Any failure is logged and yields an empty set.
pub async fn scan(cfg: &ScanConfig) -> Vec<BtClassicRecord> {
    match scan_inner(cfg).await {
        Ok(records) => {
            scout_log!(Level::Info, COMPONENT, "Classic scan found {} device(s)", records.len());
            records
        }
        Err(e) => {
            scout_log!(Level::Error, COMPONENT, "Bluetooth Classic scan error: {}", e);
            Vec::new()
        }
    }
}

async fn scan_inner(cfg: &ScanConfig) -> Result<Vec<BtClassicRecord>, ScanError> {
    let session = bluer::Session::new().await?;
    let adapter = session.default_adapter().await?;
    adapter.set_powered(true).await?;
    adapter
        .set_discovery_filter(DiscoveryFilter {
            transport: DiscoveryTransport::BrEdr,
            ..Default::default()
        })
        .await?;

    scout_log!(
        Level::Debug,
        COMPONENT,
        "Discovering on {} for {:?}",
        adapter.name(),
        cfg.bt_duration
    );
    let addresses = collect_discovered(&adapter, cfg.bt_duration).await?;

    let mut records = Vec::with_capacity(addresses.len());
    for addr in addresses {
        // Name resolution is best-effort; a device may vanish mid-pass.
        let name = match adapter.device(addr) {
            Ok(device) => device.name().await.ok().flatten().unwrap_or_default(),
            Err(_) => String::new(),
        };
        records.push(BtClassicRecord {
            address: addr.to_string(),
            name,
            device_type: "Classic".into(),
            timestamp: timestamp(),
        });
    }
    Ok(records)
}

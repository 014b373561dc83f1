//! Best-effort peer communication: one-shot RFCOMM exchanges and ICMP
//! reachability probes.  Single attempt per target, OS-default timeouts,
//! no backoff.

pub mod bluetooth;
pub mod manual;
pub mod wifi;

use crate::config::CommConfig;
use crate::records::{BtClassicRecord, WifiRecord};
use crate::store::Store;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CommError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("'{0}' is not a valid Bluetooth address")]
    BadAddress(String),

    #[error("selection '{0}' is not a number")]
    BadSelection(String),

    #[error("selection {0} is out of range (1..={1})")]
    SelectionRange(usize, usize),

    #[error("no {0} targets discovered")]
    NoTargets(&'static str),
}

/// Try to talk to every discovered peer and persist both result sets.
/// Per-target failures yield no record; an empty file is still written.
pub async fn auto_communicate(
    cfg: &CommConfig,
    store: &Store,
    classic: &[BtClassicRecord],
    wifi: &[WifiRecord],
) {
    let mut bt_results = Vec::new();
    for device in classic {
        if let Some(result) = bluetooth::exchange(cfg, &device.address).await {
            bt_results.push(result);
        }
    }
    store.persist(&bt_results, "comm_logs", "bt_comm");

    let mut wifi_results = Vec::new();
    for ap in wifi {
        if ap.bssid.is_empty() {
            continue;
        }
        if let Some(result) = wifi::probe(cfg, &ap.bssid).await {
            wifi_results.push(result);
        }
    }
    store.persist(&wifi_results, "comm_logs", "wifi_comm");
}

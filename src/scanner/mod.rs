//! Radio scan driver: Wi-Fi via nmcli, classic Bluetooth and BLE via BlueZ.
//!
//! Each scan type fails independently; the public `scan` functions catch
//! their own errors and return an empty record set so one dead radio never
//! blocks the rest of the cycle.  No retries anywhere.

pub mod ble;
pub mod bluetooth;
pub mod wifi;

use bluer::{Adapter, AdapterEvent, Address};
use futures::{StreamExt, pin_mut};
use std::process::ExitStatus;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("scan process I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("nmcli exited with {status}: {stderr}")]
    Backend { status: ExitStatus, stderr: String },

    #[error("Bluetooth error: {0}")]
    Bluetooth(#[from] bluer::Error),
}

/// Collect device-added events from an already-filtered adapter for a fixed
/// window.  Discovery stops when the event stream is dropped.
pub(crate) async fn collect_discovered(
    adapter: &Adapter,
    window: Duration,
) -> Result<Vec<Address>, bluer::Error> {
    let events = adapter.discover_devices().await?;
    pin_mut!(events);

    let deadline = tokio::time::sleep(window);
    tokio::pin!(deadline);

    let mut found = Vec::new();
    loop {
        tokio::select! {
            _ = &mut deadline => break,
            ev = events.next() => match ev {
                Some(AdapterEvent::DeviceAdded(addr)) => {
                    if !found.contains(&addr) {
                        found.push(addr);
                    }
                }
                Some(_) => {}
                None => break,
            },
        }
    }
    Ok(found)
}

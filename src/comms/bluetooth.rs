// src/comms/bluetooth.rs

//! One-shot RFCOMM greeting exchange.

use crate::config::CommConfig;
use crate::records::{BtCommRecord, timestamp};
use crate::scout_log;
use super::CommError;
use bluer::Address;
use bluer::rfcomm::{SocketAddr, Stream};
use log::Level;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

const COMPONENT: &str = "comms::bluetooth";

/// Connect, send the greeting, read one bounded response, disconnect.
/// Failures are logged and yield `None`.
pub async fn exchange(cfg: &CommConfig, address: &str) -> Option<BtCommRecord> {
    match exchange_inner(cfg, address).await {
        Ok(record) => {
            scout_log!(Level::Info, COMPONENT, "Received from {}: {}", address, record.received);
            Some(record)
        }
        Err(e) => {
            scout_log!(Level::Error, COMPONENT, "Bluetooth comm error ({}): {}", address, e);
            None
        }
    }
}

async fn exchange_inner(cfg: &CommConfig, address: &str) -> Result<BtCommRecord, CommError> {
    let target: Address = address
        .parse()
        .map_err(|_| CommError::BadAddress(address.to_string()))?;

    scout_log!(
        Level::Info,
        COMPONENT,
        "Connecting to {} via RFCOMM channel {}",
        address,
        cfg.rfcomm_channel
    );
    let mut stream = Stream::connect(SocketAddr::new(target, cfg.rfcomm_channel)).await?;

    stream.write_all(cfg.greeting.as_bytes()).await?;
    stream.write_all(b"\n").await?;
    scout_log!(Level::Debug, COMPONENT, "Sent: {}", cfg.greeting);

    let mut buf = vec![0u8; cfg.read_limit];
    let n = stream.read(&mut buf).await?;
    let received = String::from_utf8_lossy(&buf[..n]).trim().to_string();

    Ok(BtCommRecord {
        target: address.to_string(),
        sent: cfg.greeting.clone(),
        received,
        time: timestamp(),
    })
}

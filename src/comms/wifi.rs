// src/comms/wifi.rs

//! ICMP reachability probe via the system ping binary.

use crate::config::CommConfig;
use crate::records::{Reachability, WifiCommRecord, timestamp};
use crate::scout_log;
use super::CommError;
use log::Level;
use tokio::process::Command;

const COMPONENT: &str = "comms::wifi";

/// Ping one target.  Spawn failures are logged and yield `None`; a target
/// that does not answer still yields a record with status "unreachable".
pub async fn probe(cfg: &CommConfig, target: &str) -> Option<WifiCommRecord> {
    match probe_inner(cfg, target).await {
        Ok(record) => {
            scout_log!(Level::Info, COMPONENT, "{} is {:?}", target, record.status);
            Some(record)
        }
        Err(e) => {
            scout_log!(Level::Error, COMPONENT, "Wi-Fi ping error ({}): {}", target, e);
            None
        }
    }
}

async fn probe_inner(cfg: &CommConfig, target: &str) -> Result<WifiCommRecord, CommError> {
    scout_log!(Level::Debug, COMPONENT, "Pinging {} ({} echo requests)", target, cfg.ping_count);
    let output = Command::new("ping")
        .arg("-c")
        .arg(cfg.ping_count.to_string())
        .arg(target)
        .output()
        .await?;

    Ok(WifiCommRecord {
        target: target.to_string(),
        status: classify(output.status.success()),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        time: timestamp(),
    })
}

/// Reachability is decided solely by the child exit status.
fn classify(exit_ok: bool) -> Reachability {
    if exit_ok {
        Reachability::Reachable
    } else {
        Reachability::Unreachable
    }
}

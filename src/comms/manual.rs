// src/comms/manual.rs

//! Interactive single-target selection.
//!
//! Presents the devices found by the preceding scan cycle and hands the
//! chosen one to the matching communication helper.  Malformed or
//! out-of-range input fails loudly with a typed error; nothing written by
//! the scan cycle is touched on that path.

use crate::config::CommConfig;
use crate::records::{BtClassicRecord, WifiRecord};
use super::{CommError, bluetooth, wifi};
use std::io::{self, Write};

/// Run the manual-control menu once.
pub async fn interactive(
    cfg: &CommConfig,
    classic: &[BtClassicRecord],
    wifi_list: &[WifiRecord],
) -> Result<(), CommError> {
    println!("\n[MANUAL CONTROL]");
    println!("1. Talk to Bluetooth device");
    println!("2. Ping Wi-Fi BSSID/IP");
    println!("3. Exit");
    let choice = read_line(">> Choose: ")?;

    match choice.trim() {
        "1" => {
            if classic.is_empty() {
                return Err(CommError::NoTargets("Bluetooth"));
            }
            for (i, dev) in classic.iter().enumerate() {
                println!("{}. {} - {}", i + 1, dev.name, dev.address);
            }
            let idx = parse_selection(&read_line("Select device #: ")?, classic.len())?;
            let _ = bluetooth::exchange(cfg, &classic[idx].address).await;
            Ok(())
        }
        "2" => {
            if wifi_list.is_empty() {
                return Err(CommError::NoTargets("Wi-Fi"));
            }
            for (i, net) in wifi_list.iter().enumerate() {
                println!("{}. {} - {}", i + 1, net.ssid, net.bssid);
            }
            let idx = parse_selection(&read_line("Select Wi-Fi #: ")?, wifi_list.len())?;
            let _ = wifi::probe(cfg, &wifi_list[idx].bssid).await;
            Ok(())
        }
        _ => {
            println!("Exiting manual mode.");
            Ok(())
        }
    }
}

/// Parse a 1-based menu selection into a 0-based index, range-checked.
fn parse_selection(input: &str, len: usize) -> Result<usize, CommError> {
    let trimmed = input.trim();
    let n: usize = trimmed
        .parse()
        .map_err(|_| CommError::BadSelection(trimmed.to_string()))?;
    if n == 0 || n > len {
        return Err(CommError::SelectionRange(n, len));
    }
    Ok(n - 1)
}

fn read_line(prompt: &str) -> io::Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line)
}

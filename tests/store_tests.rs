//! Integration tests for the JSON persistence helper.
//!
//! Verifies the timestamped file naming scheme and that written files
//! round-trip back into the record sets that produced them.

use devscout::records::{WifiRecord, timestamp};
use devscout::store::Store;
use std::fs;

fn sample_records() -> Vec<WifiRecord> {
    vec![
        WifiRecord {
            ssid: "CoffeeShop".into(),
            bssid: "AA:BB:CC:DD:EE:FF".into(),
            signal: 72,
            frequency: 2412,
            timestamp: timestamp(),
        },
        WifiRecord {
            ssid: "".into(),
            bssid: "12:34:56:78:9A:BC".into(),
            signal: 40,
            frequency: 5180,
            timestamp: timestamp(),
        },
    ]
}

#[test]
fn file_name_embeds_colon_free_timestamp() {
    let dir = tempfile::tempdir().unwrap();
    let store = Store::new(dir.path());

    let path = store.write(&sample_records(), "wifi_scans", "wifi").unwrap();
    let name = path.file_name().unwrap().to_str().unwrap();

    assert!(name.starts_with("wifi_"), "unexpected prefix: {}", name);
    assert!(name.ends_with(".json"), "unexpected suffix: {}", name);
    assert!(!name.contains(':'), "colon leaked into file name: {}", name);
    assert_eq!(path.parent().unwrap(), dir.path().join("wifi_scans"));
}

#[test]
fn written_file_round_trips_to_the_record_set() {
    let dir = tempfile::tempdir().unwrap();
    let store = Store::new(dir.path());
    let records = sample_records();

    let path = store.write(&records, "wifi_scans", "wifi").unwrap();
    let body = fs::read_to_string(&path).unwrap();
    let back: Vec<WifiRecord> = serde_json::from_str(&body).unwrap();

    assert_eq!(back, records);
    // Pretty-printed, i.e. indented structured text.
    assert!(body.contains("\n  "), "expected indented output: {}", body);
}

#[test]
fn empty_record_set_still_writes_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let store = Store::new(dir.path());

    let path = store.write(&Vec::<WifiRecord>::new(), "bt_scans", "classic").unwrap();
    let body = fs::read_to_string(&path).unwrap();
    let back: Vec<WifiRecord> = serde_json::from_str(&body).unwrap();
    assert!(back.is_empty());
}

#[test]
fn subdirectories_are_created_on_demand() {
    let dir = tempfile::tempdir().unwrap();
    let store = Store::new(dir.path().join("nested").join("base"));

    store.write(&sample_records(), "comm_logs", "wifi_comm").unwrap();
    assert!(store.base().join("comm_logs").is_dir());
}

#[test]
fn persist_swallows_write_failures() {
    // Base dir is a file, so create_dir_all must fail; persist only logs.
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("base");
    fs::write(&blocker, b"not a directory").unwrap();

    let store = Store::new(&blocker);
    store.persist(&sample_records(), "wifi_scans", "wifi");
}

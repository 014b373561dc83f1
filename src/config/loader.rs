// src/config/loader.rs

//! # Configuration Loader
//!
//! Reads `default.toml`, deserializes into `RawConfig`, and converts the
//! humantime duration strings into typed `Duration`s.  A missing file yields
//! the built-in defaults; a malformed file is fatal.

use crate::config::model::{
    Config, ConfigError, RawConfig, ScanConfig, ScanStub, ScheduleConfig, ScheduleStub,
};
use std::{fs, path::Path, time::Duration};

/// Load the configuration from `path`, falling back to defaults when the
/// file does not exist.
pub fn load(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let txt = fs::read_to_string(path)?;
    let raw: RawConfig = toml::from_str(&txt)?;
    convert(raw)
}

/// Turn the raw TOML shape into the runtime `Config`.
fn convert(raw: RawConfig) -> Result<Config, ConfigError> {
    Ok(Config {
        logging:  raw.logging.unwrap_or_default(),
        output:   raw.output.unwrap_or_default(),
        scan:     convert_scan(raw.scan.unwrap_or_default())?,
        comm:     raw.comm.unwrap_or_default(),
        schedule: convert_schedule(raw.schedule.unwrap_or_default())?,
    })
}

fn convert_scan(stub: ScanStub) -> Result<ScanConfig, ConfigError> {
    let defaults = ScanConfig::default();
    Ok(ScanConfig {
        wifi_settle: parse_or(stub.wifi_settle, defaults.wifi_settle)?,
        bt_duration: parse_or(stub.bt_duration, defaults.bt_duration)?,
        ble_timeout: parse_or(stub.ble_timeout, defaults.ble_timeout)?,
        wifi_interface: stub.wifi_interface,
    })
}

fn convert_schedule(stub: ScheduleStub) -> Result<ScheduleConfig, ConfigError> {
    let defaults = ScheduleConfig::default();
    Ok(ScheduleConfig {
        interval: parse_or(stub.interval, defaults.interval)?,
        poll:     parse_or(stub.poll, defaults.poll)?,
    })
}

/// Parse an optional humantime string, keeping the default when absent.
fn parse_or(text: Option<String>, default: Duration) -> Result<Duration, ConfigError> {
    match text {
        Some(s) => {
            humantime::parse_duration(&s).map_err(|e| ConfigError::InvalidDuration(s, e))
        }
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn empty_toml_yields_defaults() {
        let cfg = convert(toml::from_str("").unwrap()).unwrap();
        assert!(cfg.logging.enable);
        assert_eq!(cfg.logging.level, "DEBUG");
        assert_eq!(cfg.output.base_dir, PathBuf::from("scanner_logs"));
        assert_eq!(cfg.scan.wifi_settle, Duration::from_secs(5));
        assert_eq!(cfg.scan.bt_duration, Duration::from_secs(8));
        assert_eq!(cfg.comm.rfcomm_channel, 1);
        assert_eq!(cfg.comm.ping_count, 2);
        assert_eq!(cfg.schedule.interval, Duration::from_secs(3600));
        assert_eq!(cfg.schedule.poll, Duration::from_secs(1));
    }

    #[test]
    fn tables_override_defaults() {
        let raw: RawConfig = toml::from_str(
            r#"
            [logging]
            level = "INFO"
            file = "scout.log"

            [output]
            base_dir = "/var/lib/devscout"

            [scan]
            wifi_settle = "2s"
            ble_timeout = "30s"
            wifi_interface = "wlan0"

            [comm]
            greeting = "ping"
            rfcomm_channel = 3

            [schedule]
            interval = "15m"
            "#,
        )
        .unwrap();
        let cfg = convert(raw).unwrap();
        assert_eq!(cfg.logging.level, "INFO");
        assert_eq!(cfg.logging.file.as_deref(), Some("scout.log"));
        assert_eq!(cfg.output.base_dir, PathBuf::from("/var/lib/devscout"));
        assert_eq!(cfg.scan.wifi_settle, Duration::from_secs(2));
        assert_eq!(cfg.scan.ble_timeout, Duration::from_secs(30));
        assert_eq!(cfg.scan.bt_duration, Duration::from_secs(8));
        assert_eq!(cfg.scan.wifi_interface.as_deref(), Some("wlan0"));
        assert_eq!(cfg.comm.greeting, "ping");
        assert_eq!(cfg.comm.rfcomm_channel, 3);
        assert_eq!(cfg.schedule.interval, Duration::from_secs(900));
        assert_eq!(cfg.schedule.poll, Duration::from_secs(1));
    }

    #[test]
    fn bad_duration_is_reported_with_source_text() {
        let raw: RawConfig = toml::from_str("[scan]\nwifi_settle = \"soon\"\n").unwrap();
        match convert(raw) {
            Err(ConfigError::InvalidDuration(text, _)) => assert_eq!(text, "soon"),
            other => panic!("expected InvalidDuration, got {:?}", other),
        }
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let cfg = load(Path::new("/definitely/not/here/default.toml")).unwrap();
        assert_eq!(cfg.schedule.interval, Duration::from_secs(3600));
    }
}

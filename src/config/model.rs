// src/config/model.rs

//! Configuration data structures.
//!
//! Distinguishes between the raw TOML format (duration fields are humantime
//! strings, every table optional) and the fully-typed runtime `Config` handed
//! to each component.  The scanner, the store and the scheduler never touch
//! global state; everything they need arrives through these structs.

use serde::Deserialize;
use std::{path::PathBuf, time::Duration};
use thiserror::Error;

/// Top-level runtime config
#[derive(Debug, Clone)]
pub struct Config {
    pub logging:  LoggingConfig,
    pub output:   OutputConfig,
    pub scan:     ScanConfig,
    pub comm:     CommConfig,
    pub schedule: ScheduleConfig,
}

/// Mirror of the `[logging]` table
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_true")]  pub enable: bool,
    #[serde(default)]                   pub file:   Option<String>,
    #[serde(default = "default_level")] pub level:  String,
}
fn default_true() -> bool { true }
fn default_level() -> String { "DEBUG".into() }

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig { enable: true, file: None, level: default_level() }
    }
}

/// Mirror of the `[output]` table
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_base_dir")] pub base_dir: PathBuf,
}
fn default_base_dir() -> PathBuf { PathBuf::from("scanner_logs") }

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig { base_dir: default_base_dir() }
    }
}

/// Raw `[scan]` table; durations are humantime strings ("5s", "1h 30m")
#[derive(Debug, Default, Deserialize)]
pub struct ScanStub {
    #[serde(default)] pub wifi_settle:    Option<String>,
    #[serde(default)] pub bt_duration:    Option<String>,
    #[serde(default)] pub ble_timeout:    Option<String>,
    #[serde(default)] pub wifi_interface: Option<String>,
}

/// Fully-typed scan driver settings
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Delay between triggering a Wi-Fi rescan and reading results.
    pub wifi_settle: Duration,
    /// Classic Bluetooth discovery window.
    pub bt_duration: Duration,
    /// BLE discovery window.
    pub ble_timeout: Duration,
    /// Restrict nmcli to a specific interface; all interfaces when unset.
    pub wifi_interface: Option<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        ScanConfig {
            wifi_settle: Duration::from_secs(5),
            bt_duration: Duration::from_secs(8),
            ble_timeout: Duration::from_secs(8),
            wifi_interface: None,
        }
    }
}

/// Mirror of the `[comm]` table
#[derive(Debug, Clone, Deserialize)]
pub struct CommConfig {
    #[serde(default = "default_greeting")]   pub greeting:       String,
    #[serde(default = "default_channel")]    pub rfcomm_channel: u8,
    #[serde(default = "default_read_limit")] pub read_limit:     usize,
    #[serde(default = "default_ping_count")] pub ping_count:     u32,
}
fn default_greeting() -> String { "Hello Bluetooth Device!".into() }
fn default_channel() -> u8 { 1 }
fn default_read_limit() -> usize { 1024 }
fn default_ping_count() -> u32 { 2 }

impl Default for CommConfig {
    fn default() -> Self {
        CommConfig {
            greeting: default_greeting(),
            rfcomm_channel: default_channel(),
            read_limit: default_read_limit(),
            ping_count: default_ping_count(),
        }
    }
}

/// Raw `[schedule]` table
#[derive(Debug, Default, Deserialize)]
pub struct ScheduleStub {
    #[serde(default)] pub interval: Option<String>,
    #[serde(default)] pub poll:     Option<String>,
}

/// Fully-typed scheduler settings
#[derive(Debug, Clone)]
pub struct ScheduleConfig {
    pub interval: Duration,
    pub poll:     Duration,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        ScheduleConfig {
            interval: Duration::from_secs(3600),
            poll:     Duration::from_secs(1),
        }
    }
}

/// Whole config file as deserialized from TOML; every table may be absent
#[derive(Debug, Default, Deserialize)]
pub struct RawConfig {
    #[serde(default)] pub logging:  Option<LoggingConfig>,
    #[serde(default)] pub output:   Option<OutputConfig>,
    #[serde(default)] pub scan:     Option<ScanStub>,
    #[serde(default)] pub comm:     Option<CommConfig>,
    #[serde(default)] pub schedule: Option<ScheduleStub>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            logging:  LoggingConfig::default(),
            output:   OutputConfig::default(),
            scan:     ScanConfig::default(),
            comm:     CommConfig::default(),
            schedule: ScheduleConfig::default(),
        }
    }
}

/// All the ways config loading can go wrong
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid duration '{0}': {1}")]
    InvalidDuration(String, #[source] humantime::DurationError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

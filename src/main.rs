// src/main.rs

//! devscout entry point.
//!
//! 1. Load `default.toml` next to the executable (built-in defaults when absent)
//! 2. Set up structured logging (stdout + flat debug log file)
//! 3. Build the tokio runtime
//! 4. Dispatch on the CLI flag: --once / --manual / --hourly / usage
//!
// ───── std / 3rd-party imports ──────────────────────────────────────────────
use chrono::Local;
use fern::Dispatch;
use log::{Level, LevelFilter};
use std::{
    env,
    path::{Path, PathBuf},
    process, thread,
};
use tokio::runtime::Runtime;

// ───── local imports ────────────────────────────────────────────────────────
use devscout::config::{self, Config};
use devscout::store::Store;
use devscout::{comms, cycle, interrupt, scheduler, scout_log};

// ───── helpers ──────────────────────────────────────────────────────────────

/// Print an error with context and terminate the process.
macro_rules! fatal {
    ($ctx:expr, $($arg:tt)+) => {{
        eprintln!(
            "[{}][ERROR][{}] {}",
            chrono::Local::now().to_rfc3339(),
            $ctx,
            format!($($arg)+)
        );
        std::process::exit(1);
    }};
}

/// Directory that contains the running executable.
fn exe_dir() -> PathBuf {
    std::env::current_exe()
        .expect("Cannot determine exe path")
        .parent()
        .expect("Executable must live in some directory")
        .to_path_buf()
}

/// Configure global logging as requested in `config.logging`.
fn setup_logging(exe_dir: &Path, cfg: &Config) -> Result<(), fern::InitError> {
    let level = match cfg.logging.level.to_uppercase().as_str() {
        "ERROR" => LevelFilter::Error,
        "WARN" => LevelFilter::Warn,
        "INFO" => LevelFilter::Info,
        "TRACE" => LevelFilter::Trace,
        _ => LevelFilter::Debug,
    };

    let log_path = cfg
        .logging
        .enable
        .then(|| exe_dir.join(cfg.logging.file.as_deref().unwrap_or("debug.log")));

    let mut dispatch = Dispatch::new()
        .format(|out, msg, record| {
            out.finish(format_args!(
                "[{}][{:5}][{}][pid={}][tid={:?}] {}",
                Local::now().to_rfc3339(),
                record.level(),
                record.target(),
                process::id(),
                thread::current().id(),
                msg
            ))
        })
        .level(level)
        .chain(std::io::stdout());

    if let Some(path) = log_path {
        dispatch = dispatch.chain(fern::log_file(path)?);
    }

    dispatch.apply()?;
    Ok(())
}

/// CLI mode.  Flags are accepted anywhere in argv; when several are given
/// the precedence is once, manual, hourly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Once,
    Manual,
    Hourly,
    Usage,
}

fn parse_mode(args: &[String]) -> Mode {
    let has = |flag: &str| args.iter().any(|a| a == flag);
    if has("--once") {
        Mode::Once
    } else if has("--manual") {
        Mode::Manual
    } else if has("--hourly") {
        Mode::Hourly
    } else {
        Mode::Usage
    }
}

fn usage() {
    println!(
        r#"
devscout — nearby wireless device scanner
Usage:
  devscout --once      # Run one scan and try to communicate
  devscout --manual    # Run + manual target selection
  devscout --hourly    # Continuous scanning on the configured interval
  Output: <base_dir>/{{wifi_scans,bt_scans,comm_logs}} + debug.log
"#
    );
}

// ───── entry point ──────────────────────────────────────────────────────────

fn main() {
    let exe_dir = exe_dir();
    let cfg = config::load(&exe_dir.join("default.toml"))
        .unwrap_or_else(|e| fatal!("config", "{}", e));

    setup_logging(&exe_dir, &cfg).expect("Logging setup failed");
    let store = Store::new(cfg.output.base_dir.clone());

    let rt = Runtime::new().expect("Tokio runtime creation failed");

    let args: Vec<String> = env::args().skip(1).collect();
    match parse_mode(&args) {
        Mode::Once => {
            let _ = rt.block_on(interrupt::until_interrupted(cycle::scan_and_communicate(
                &cfg, &store,
            )));
        }
        Mode::Manual => {
            rt.block_on(async {
                let outcome = interrupt::until_interrupted(async {
                    let summary = cycle::scan_and_communicate(&cfg, &store).await;
                    comms::manual::interactive(&cfg.comm, &summary.classic, &summary.wifi).await
                })
                .await;
                if let Some(Err(e)) = outcome {
                    scout_log!(Level::Error, "manual", "Fatal: {}", e);
                    fatal!("manual", "{}", e);
                }
            });
        }
        Mode::Hourly => {
            let _ = rt.block_on(interrupt::until_interrupted(scheduler::run(
                cfg.schedule.interval,
                cfg.schedule.poll,
                || async {
                    cycle::scan_and_communicate(&cfg, &store).await;
                },
            )));
        }
        Mode::Usage => usage(),
    }
}

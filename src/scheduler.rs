// src/scheduler.rs

//! Polling scheduler.
//!
//! Runs the cycle once immediately, then on a fixed interval, checking the
//! pending deadline every poll step.  No drift correction and no catch-up
//! on missed intervals: the next deadline is measured from the end of the
//! previous cycle.

use crate::scout_log;
use log::Level;
use std::future::Future;
use std::time::Duration;
use tokio::time::Instant;

/// Run `cycle` forever.  Generic over the cycle future so tests can inject
/// a counter; never returns, cancel it from the caller (Ctrl-C select).
pub async fn run<F, Fut>(interval: Duration, poll: Duration, mut cycle: F)
where
    F: FnMut() -> Fut,
    Fut: Future<Output = ()>,
{
    scout_log!(
        Level::Info,
        "scheduler",
        "Auto-scan running every {}; Ctrl+C to stop",
        humantime::format_duration(interval)
    );

    let mut next_run = Instant::now();
    loop {
        if Instant::now() >= next_run {
            cycle().await;
            next_run = Instant::now() + interval;
            scout_log!(
                Level::Debug,
                "scheduler",
                "Next cycle in {}",
                humantime::format_duration(interval)
            );
        }
        tokio::time::sleep(poll).await;
    }
}

// src/interrupt.rs

//! Top-level interrupt observation.
//!
//! Ctrl-C is handled only at the process entry point: every CLI mode runs
//! its work future under this guard, which logs a message and abandons the
//! work when the signal arrives.  No cleanup beyond that.

use crate::scout_log;
use log::Level;
use std::future::Future;

/// Drive `work` until it completes or Ctrl-C arrives.
/// Returns `None` on interrupt.
pub async fn until_interrupted<F, T>(work: F) -> Option<T>
where
    F: Future<Output = T>,
{
    tokio::select! {
        value = work => Some(value),
        _ = tokio::signal::ctrl_c() => {
            scout_log!(Level::Warn, "interrupt", "Interrupted");
            println!("Interrupted.");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn completed_work_passes_its_value_through() {
        assert_eq!(until_interrupted(async { 7 }).await, Some(7));
    }
}

// src/lib.rs
// ────────────────────────────────────────────────────────────────────────────
// Public library entry point.  Re-export everything for both `main.rs` and
// integration tests.

pub mod comms;
pub mod config;
pub mod cycle;
pub mod interrupt;
pub mod records;
pub mod scanner;
pub mod scheduler;
pub mod store;

mod macros;

use std::sync::LazyLock;
use std::time::Instant;

pub mod chart;
pub mod config;
pub mod generator;
pub mod harness;
pub mod io;

/// Reference point for the timestamps in the log output
pub static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);

//! Logging setup and helpers
//!
//! The library logs through the `log` facade; binaries install
//! `env_logger` via [`init_logging`] so `RUST_LOG` controls verbosity.

use std::time::Duration;

/// Install the env_logger backend, defaulting to `info`
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

/// Log a completed pipeline stage with its row count and elapsed time
pub fn log_stage(stage: &str, rows: usize, elapsed: Duration) {
    log::info!("{stage}: {rows} rows in {elapsed:?}");
}

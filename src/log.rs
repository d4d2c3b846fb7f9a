// src/log.rs
// Diagnostics go through `tracing`; this only installs the subscriber.
// Timestamps are time since start, like a run log.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt::time::Uptime};

pub type InitError = Box<dyn std::error::Error + Send + Sync>;

/// `-v` count to a filter for this crate; dependencies stay at `warn`.
pub fn filter_for(verbosity: u8) -> String {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    format!("warn,bgg_scrape={level}")
}

/// Install the global subscriber. `RUST_LOG` wins over `verbosity` when set.
/// With `log_file`, lines are appended there instead of stderr.
pub fn init(verbosity: u8, log_file: Option<&Path>) -> Result<(), InitError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_for(verbosity)));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(Uptime::default())
        .with_target(false);

    match log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).try_init()
        }
        None => builder.with_writer(std::io::stderr).try_init(),
    }
}

// src/log.rs
use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::{
    EnvFilter,
    fmt::{self, time::Uptime},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

pub struct LogOptions {
    pub verbose: bool,
    /// Append a copy of every event here (created along with its parent dir).
    pub file: Option<PathBuf>,
}

/// Install the global subscriber: stderr always, a log file when asked.
/// `RUST_LOG` wins over `verbose` when set.
pub fn init(opts: &LogOptions) -> io::Result<()> {
    let default_level = if opts.verbose { "herald_scrape=debug" } else { "herald_scrape=info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let file_layer = match &opts.file {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            Some(
                fmt::layer()
                    .with_timer(Uptime::default())
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_timer(Uptime::default()).with_writer(io::stderr))
        .with(file_layer)
        .try_init()
        .map_err(|e| io::Error::other(e.to_string()))
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::tracing::debug!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::tracing::error!($($arg)*)
    };
}

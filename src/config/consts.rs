// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://herald.playphoenix.online";
// Unknown subjects land here instead of a 404.
pub const NOT_FOUND_REDIRECT: &str = "https://herald.playphoenix.online/";
pub const USER_AGENT: &str = concat!("herald_scrape/", env!("CARGO_PKG_VERSION"));

// Env overrides (read by the CLI)
pub const ENV_BASE_URL: &str = "HERALD_BASE_URL";
pub const ENV_NOT_FOUND_URL: &str = "HERALD_NOT_FOUND_URL";

// Logging
pub const DEFAULT_LOG_FILE: &str = "log/herald.log";

// Batch queries
pub const WORKERS: usize = 4;
pub const REQUEST_PAUSE_MS: u64 = 75; // be polite
pub const JITTER_MS: u64 = 50; // extra 0..50 ms

//! Log output setup.
//!
//! Library code logs through `tracing`; with no tracing subscriber installed
//! those events are forwarded to the `log` facade and printed by env_logger.
//! Logging is off unless `SEGSHUF_LOG` (or `RUST_LOG`) sets a filter, since
//! stderr shares the terminal with the panel.

use env_logger::Env;

/// Environment variable holding the log filter, e.g. `SEGSHUF_LOG=debug`.
pub const LOG_ENV: &str = "SEGSHUF_LOG";

/// Install the global logger. Calling it twice is harmless.
pub fn init() {
    let fallback = std::env::var("RUST_LOG").unwrap_or_else(|_| "off".to_string());
    let env = Env::new()
        .filter_or(LOG_ENV, fallback)
        .write_style("SEGSHUF_LOG_STYLE");

    // Err only means a logger is already set
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp_millis()
        .try_init();
}

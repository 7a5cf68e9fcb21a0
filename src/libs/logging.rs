//! Tracing subscriber setup.
//!
//! Logging is only installed in debug mode (see
//! [`is_debug_mode`](crate::libs::messages::macros::is_debug_mode)); in normal
//! runs the message macros print directly and no subscriber is needed.

use crate::libs::messages::macros::is_debug_mode;
use crate::libs::messages::Message;
use crate::msg_debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_LEVEL_ENV: &str = "TIMELINE_LOG_LEVEL";

/// Installs a stderr `fmt` subscriber when debug mode is on.
///
/// `RUST_LOG` takes precedence; otherwise the level comes from
/// `TIMELINE_LOG_LEVEL`, defaulting to `debug`.
pub fn init_logging() {
    if !is_debug_mode() {
        return;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| build_log_filter());
    let description = filter.to_string();

    let layer = fmt::layer().with_writer(std::io::stderr).with_target(true);

    // A subscriber may already be installed, e.g. by a test harness.
    if tracing_subscriber::registry().with(filter).with(layer).try_init().is_ok() {
        msg_debug!(Message::LoggingInitialized(description));
    }
}

fn build_log_filter() -> EnvFilter {
    let level = std::env::var(LOG_LEVEL_ENV)
        .ok()
        .and_then(|raw| normalize_log_level(&raw))
        .unwrap_or("debug");
    EnvFilter::new(format!("warn,timeline={level}"))
}

/// Maps user spellings of a level onto the names `EnvFilter` accepts.
pub fn normalize_log_level(raw: &str) -> Option<&'static str> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "trace" => Some("trace"),
        "debug" => Some("debug"),
        "info" => Some("info"),
        "warn" | "warning" => Some("warn"),
        "error" => Some("error"),
        _ => None,
    }
}

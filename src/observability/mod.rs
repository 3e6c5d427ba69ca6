//! Structured logging setup.
//!
//! The MCP transport owns stdout, so every log line goes to stderr.

use tracing_subscriber::EnvFilter;

/// Initialize structured logging with `RUST_LOG` environment variable support.
///
/// `default_filter` (normally [`crate::config::schema::LoggingConfig::filter`])
/// applies when `RUST_LOG` is not set or does not parse. Call once at program
/// startup; subsequent calls are silently ignored by `tracing_subscriber`.
pub fn init_logging(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("tca_mcp=info"));

    // try_init so double-init in tests doesn't panic
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init();
}

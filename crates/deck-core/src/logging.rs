//! Tracing setup for the deck binaries.
//!
//! stdout belongs to the JSON response, so the console layer writes to
//! stderr. A plain-text copy can also go to a daily-rotated file named after
//! the module. `RUST_LOG` wins over the configured level when it is set.

use anyhow::Context;
use tracing::level_filters::LevelFilter;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Level used when the configured one does not parse.
pub const FALLBACK_LEVEL: LevelFilter = LevelFilter::INFO;

/// Parse a bare level name (`"debug"`, `"WARN"`, `"off"`).
pub fn default_level(log_level: &str) -> Option<LevelFilter> {
    log_level.trim().parse().ok()
}

/// Install the global subscriber. Call once, before the first request.
///
/// `log_dir` adds a file layer whose files are prefixed with `module_name`.
pub fn init_logging(log_level: &str, log_dir: Option<&str>, module_name: &str) -> anyhow::Result<()> {
    let level = default_level(log_level);
    let filter = EnvFilter::builder()
        .with_default_directive(level.unwrap_or(FALLBACK_LEVEL).into())
        .from_env_lossy();

    let stderr_layer = fmt::layer().with_writer(std::io::stderr).with_target(true);
    let file_layer = log_dir.map(|dir| {
        fmt::layer()
            .with_writer(tracing_appender::rolling::daily(dir, module_name))
            .with_ansi(false)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("a tracing subscriber is already installed")?;

    if level.is_none() {
        warn!(log_level, fallback = %FALLBACK_LEVEL, "unrecognised log level");
    }
    Ok(())
}

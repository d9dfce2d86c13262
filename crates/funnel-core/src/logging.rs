use crate::{AppConfig, FunnelError, FunnelResult};
use tracing_subscriber::EnvFilter;

/// Environment variable naming a file that receives full debug output.
pub const DEBUG_LOG_ENV: &str = "FUNNEL_DEBUG_LOG";

/// Install the global `tracing` subscriber.
///
/// With `FUNNEL_DEBUG_LOG` set, everything down to DEBUG is appended to that
/// file. Otherwise events go to stderr filtered by `RUST_LOG`, or by the
/// configured level when `RUST_LOG` is unset. Stdout stays free for command
/// output.
pub fn init(config: &AppConfig) -> FunnelResult<()> {
    let result = if let Ok(log_path) = std::env::var(DEBUG_LOG_ENV) {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .try_init()
    } else {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.effective_log_level()));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
    };

    result.map_err(|e| FunnelError::Internal(format!("Failed to install logger: {}", e)))
}

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::utils::{GameError, GameResult};

/// Builds the filter directive for the configured level. Our own crate logs at
/// `level`, everything else stays at `warn`.
pub fn filter_directive(level: &str) -> String {
    format!("memory_match={},warn", level)
}

/// Installs the global tracing subscriber.
///
/// Logs go to stderr by default so they don't tear the board drawn on stdout.
/// When `log_file` is set they are appended there without ANSI colours.
pub fn init_logging(config: &LoggingConfig) -> GameResult<()> {
    let filter = EnvFilter::try_new(filter_directive(&config.level))
        .map_err(|e| GameError::configuration(format!("Invalid log filter: {}", e)))?;

    match &config.log_file {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .map_err(|e| GameError::configuration(format!("Failed to install logger: {}", e)))?;
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init()
                .map_err(|e| GameError::configuration(format!("Failed to install logger: {}", e)))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_directive() {
        assert_eq!(filter_directive("debug"), "memory_match=debug,warn");
        assert!(EnvFilter::try_new(filter_directive("info")).is_ok());
    }
}

//! Diagnostic logging.
//!
//! Logs always go to stderr: stdout carries the message bytes.

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Pick the log level from the command-line flags and the config file.
pub fn effective_level<'a>(quiet: bool, verbose: bool, configured: &'a str) -> &'a str {
    if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        configured
    }
}

/// Install the global subscriber. `RUST_LOG` directives are applied on top of
/// `level`.
pub fn init(level: &str) -> anyhow::Result<()> {
    let level: LevelFilter = level
        .parse()
        .map_err(|_| anyhow::anyhow!("Invalid log level '{}'", level))?;
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_level() {
        assert_eq!(effective_level(true, false, "info"), "error");
        assert_eq!(effective_level(false, true, "info"), "debug");
        assert_eq!(effective_level(false, false, "info"), "info");
    }

    #[test]
    fn test_invalid_level_rejected() {
        let result = init("chatty");
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Invalid log level"));
    }
}

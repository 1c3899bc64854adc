//! Application context for the pgpseal CLI.
//!
//! Combines the global CLI flags with the loaded configuration so handlers
//! take one parameter instead of several.

use pgpseal_core::OutputFormat;

use crate::cli::Cli;
use crate::config::{load_config, PgpsealConfig};

/// Application context shared by command handlers.
pub struct AppContext {
    config: PgpsealConfig,
    quiet: bool,
    verbose: bool,
}

impl AppContext {
    /// Load the configuration named by the CLI (or the default one).
    pub fn load(cli: &Cli) -> anyhow::Result<Self> {
        let config = load_config(cli.config.as_deref())?;
        Ok(Self {
            config,
            quiet: cli.quiet,
            verbose: cli.verbose,
        })
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.quiet
    }

    /// Log level after applying `--quiet` / `--verbose` over the config.
    pub fn log_level(&self) -> &str {
        crate::logging::effective_level(self.quiet, self.verbose, &self.config.log.level)
    }

    /// Output format: `--armor` wins, then `output.armor` from the config.
    pub fn output_format(&self, armor_flag: bool) -> OutputFormat {
        if armor_flag || self.config.output.armor {
            OutputFormat::Armored
        } else {
            OutputFormat::Binary
        }
    }
}

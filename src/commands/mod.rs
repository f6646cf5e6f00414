//! Command implementations for mutdiff.
//!
//! This module provides the dispatcher that resolves the configuration and
//! routes CLI commands to their implementations.

mod classify;
mod compare;
mod entropy;

use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::error::{MutdiffError, Result};

/// Dispatch a command to its implementation.
///
/// Loads the config (explicit `--config`, else `.mutdiff.yaml` in the
/// working directory, else defaults) and applies global overrides first.
pub fn dispatch(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir().map_err(|e| {
        MutdiffError::UserError(format!("failed to determine working directory: {}", e))
    })?;
    let mut config = Config::resolve(cli.global.config.as_deref(), &cwd)?;
    if cli.global.no_color {
        config.color = false;
    }

    match cli.command {
        Command::Classify(args) => classify::cmd_classify(args, &config),
        Command::Entropy(args) => entropy::cmd_entropy(args, &config),
        Command::Compare(args) => compare::cmd_compare(args, &config),
    }
}

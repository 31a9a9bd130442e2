//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::io::Write;

use crate::cli::args::{Cli, Commands};
use crate::config::TaggerConfig;
use crate::error::Result;

use super::derive::DeriveCommand;
use super::failure::FailureCommand;
use super::init::InitCommand;
use super::loading::LoadingCommand;
use super::response::ResponseCommand;
use super::success::SuccessCommand;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `out` - Destination for the command's JSON or text output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    config: TaggerConfig,
}

impl CommandDispatcher {
    /// Create a new dispatcher using `config` for response tagging.
    pub fn new(config: TaggerConfig) -> Self {
        Self { config }
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, out: &mut dyn Write) -> Result<CommandResult> {
        match &cli.command {
            Commands::Init(args) => InitCommand::new(args.clone()).execute(out),
            Commands::Loading(args) => LoadingCommand::new(args.clone()).execute(out),
            Commands::Success(args) => SuccessCommand::new(args.clone()).execute(out),
            Commands::Failure(args) => FailureCommand::new(args.clone()).execute(out),
            Commands::Response(args) => {
                ResponseCommand::new(args.clone(), self.config.clone()).execute(out)
            }
            Commands::Derive(args) => DeriveCommand::new(args.clone()).execute(out),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(2);
        assert!(!result.success);
        assert_eq!(result.exit_code, 2);
    }

    #[test]
    fn dispatch_routes_to_subcommand() {
        let temp = TempDir::new().unwrap();
        let bag = temp.path().join("bag.json");
        fs::write(&bag, r#"{"nodes": {"data": null, "promiseState": "INIT", "error": null}}"#)
            .unwrap();

        let cli = Cli::parse_from([
            "promise-state",
            "loading",
            "--bag",
            bag.to_str().unwrap(),
            "--key",
            "nodes",
        ]);
        let dispatcher = CommandDispatcher::new(TaggerConfig::default());
        let mut out = Vec::new();

        let result = dispatcher.dispatch(&cli, &mut out).unwrap();

        assert!(result.success);
        let written: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(written["nodes"]["promiseState"], "LOADING");
    }
}

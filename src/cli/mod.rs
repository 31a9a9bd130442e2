//! Command-line interface for promise-state.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and command implementations.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{
    Cli, Commands, DeriveArgs, FailureArgs, InitArgs, LoadingArgs, ResponseArgs, SuccessArgs,
};
pub use commands::{Command, CommandDispatcher, CommandResult};

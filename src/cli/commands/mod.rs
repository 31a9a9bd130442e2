//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! Commands read a bag, apply one tagging operation and write the new bag
//! as JSON. [`CommandDispatcher`] routes CLI subcommands to them.

pub mod derive;
pub mod dispatcher;
pub mod failure;
pub mod init;
pub mod io;
pub mod loading;
pub mod response;
pub mod success;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};

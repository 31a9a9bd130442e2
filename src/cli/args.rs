//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.
//!
//! Bags are read as JSON objects from a file, or from stdin when the path
//! is `-`. Data and error values are given inline as JSON.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tag data-fetching lifecycle state onto keyed state bags.
#[derive(Debug, Parser)]
#[command(name = "promise-state")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to tagger config file
    #[arg(short, long, global = true, env = "PROMISE_STATE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Seed an entry with its initial value
    Init(InitArgs),

    /// Mark an entry as loading
    Loading(LoadingArgs),

    /// Mark an entry as succeeded with data
    Success(SuccessArgs),

    /// Mark an entry as failed with an error
    Failure(FailureArgs),

    /// Fold a raw response into an entry
    Response(ResponseArgs),

    /// Print the effective state of an entry
    Derive(DeriveArgs),
}

/// Arguments for the `init` command.
#[derive(Debug, Clone, clap::Args)]
pub struct InitArgs {
    /// Bag to add the entry to (starts from an empty bag when omitted)
    #[arg(short, long)]
    pub bag: Option<PathBuf>,

    /// Entry name
    #[arg(short, long)]
    pub key: String,

    /// Initial value as JSON
    #[arg(short, long, default_value = "null")]
    pub data: String,
}

/// Arguments for the `loading` command.
#[derive(Debug, Clone, clap::Args)]
pub struct LoadingArgs {
    /// Bag file (`-` for stdin)
    #[arg(short, long)]
    pub bag: PathBuf,

    /// Entry name
    #[arg(short, long)]
    pub key: String,

    /// Data to keep visible while loading, as JSON
    #[arg(short, long)]
    pub data: Option<String>,
}

/// Arguments for the `success` command.
#[derive(Debug, Clone, clap::Args)]
pub struct SuccessArgs {
    /// Bag file (`-` for stdin)
    #[arg(short, long)]
    pub bag: PathBuf,

    /// Entry name
    #[arg(short, long)]
    pub key: String,

    /// Resolved data as JSON
    #[arg(short, long)]
    pub data: String,
}

/// Arguments for the `failure` command.
#[derive(Debug, Clone, clap::Args)]
pub struct FailureArgs {
    /// Bag file (`-` for stdin)
    #[arg(short, long)]
    pub bag: PathBuf,

    /// Entry name
    #[arg(short, long)]
    pub key: String,

    /// Error value as JSON
    #[arg(short, long)]
    pub error: String,

    /// Data to keep alongside the error, as JSON
    #[arg(short, long)]
    pub data: Option<String>,
}

/// Arguments for the `response` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ResponseArgs {
    /// Bag file (`-` for stdin)
    #[arg(short, long)]
    pub bag: PathBuf,

    /// Entry name
    #[arg(short, long)]
    pub key: String,

    /// Raw response file (`-` for stdin)
    #[arg(short, long)]
    pub response: PathBuf,
}

/// Arguments for the `derive` command.
#[derive(Debug, Clone, clap::Args)]
pub struct DeriveArgs {
    /// Bag file (`-` for stdin)
    #[arg(short, long)]
    pub bag: PathBuf,

    /// Entry name
    #[arg(short, long)]
    pub key: String,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

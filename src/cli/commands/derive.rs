//! Derive command implementation.
//!
//! The `promise-state derive` command prints the effective state of an
//! entry, which reads `EMPTY` for a successful entry without content.

use std::io::Write;

use serde_json::json;

use crate::cli::args::DeriveArgs;
use crate::error::Result;
use crate::state::get_promise_state;

use super::dispatcher::{Command, CommandResult};
use super::io::{read_bag, write_json};

/// The derive command implementation.
pub struct DeriveCommand {
    args: DeriveArgs,
}

impl DeriveCommand {
    /// Create a new derive command.
    pub fn new(args: DeriveArgs) -> Self {
        Self { args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &DeriveArgs {
        &self.args
    }
}

impl Command for DeriveCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let bag = read_bag(&self.args.bag)?;

        let Some(envelope) = bag.get(&self.args.key) else {
            tracing::error!("No entry named '{}' in bag", self.args.key);
            return Ok(CommandResult::failure(2));
        };

        let derived = get_promise_state(envelope);
        if self.args.json {
            write_json(
                out,
                &json!({
                    "key": self.args.key,
                    "stored": envelope.promise_state,
                    "derived": derived,
                }),
            )?;
        } else {
            writeln!(out, "{}", derived)?;
        }

        Ok(CommandResult::success())
    }
}

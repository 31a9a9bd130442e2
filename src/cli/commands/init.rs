//! Init command implementation.
//!
//! The `promise-state init` command seeds an entry with its initial value.

use std::io::Write;

use crate::cli::args::InitArgs;
use crate::error::Result;
use crate::state::set_initial_state;

use super::dispatcher::{Command, CommandResult};
use super::io::{parse_json_arg, read_bag_or_empty, write_json};

/// The init command implementation.
pub struct InitCommand {
    args: InitArgs,
}

impl InitCommand {
    /// Create a new init command.
    pub fn new(args: InitArgs) -> Self {
        Self { args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &InitArgs {
        &self.args
    }
}

impl Command for InitCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let bag = read_bag_or_empty(self.args.bag.as_deref())?;
        let data = parse_json_arg(&self.args.data)?;

        tracing::debug!(key = %self.args.key, "Seeding entry");
        let bag = bag.with_entry(self.args.key.clone(), set_initial_state(data));

        write_json(out, &bag)?;
        Ok(CommandResult::success())
    }
}

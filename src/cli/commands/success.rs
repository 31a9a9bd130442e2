//! Success command implementation.
//!
//! The `promise-state success` command stores resolved data for an entry.

use std::io::Write;

use crate::cli::args::SuccessArgs;
use crate::error::Result;
use crate::state::set_success_state;

use super::dispatcher::{Command, CommandResult};
use super::io::{parse_json_arg, read_bag, write_json};

/// The success command implementation.
pub struct SuccessCommand {
    args: SuccessArgs,
}

impl SuccessCommand {
    /// Create a new success command.
    pub fn new(args: SuccessArgs) -> Self {
        Self { args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &SuccessArgs {
        &self.args
    }
}

impl Command for SuccessCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let bag = read_bag(&self.args.bag)?;
        let data = parse_json_arg(&self.args.data)?;

        let bag = set_success_state(&bag, &self.args.key, data);

        write_json(out, &bag)?;
        Ok(CommandResult::success())
    }
}

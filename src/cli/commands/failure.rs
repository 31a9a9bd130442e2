//! Failure command implementation.
//!
//! The `promise-state failure` command records an error for an entry.

use std::io::Write;

use crate::cli::args::FailureArgs;
use crate::error::Result;
use crate::state::set_failure_state;

use super::dispatcher::{Command, CommandResult};
use super::io::{parse_json_arg, read_bag, write_json};

/// The failure command implementation.
pub struct FailureCommand {
    args: FailureArgs,
}

impl FailureCommand {
    /// Create a new failure command.
    pub fn new(args: FailureArgs) -> Self {
        Self { args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &FailureArgs {
        &self.args
    }
}

impl Command for FailureCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let bag = read_bag(&self.args.bag)?;
        let error = parse_json_arg(&self.args.error)?;
        let data = self.args.data.as_deref().map(parse_json_arg).transpose()?;

        let bag = set_failure_state(&bag, &self.args.key, error, data);

        write_json(out, &bag)?;
        Ok(CommandResult::success())
    }
}

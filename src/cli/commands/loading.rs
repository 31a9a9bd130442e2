//! Loading command implementation.
//!
//! The `promise-state loading` command marks an entry as in flight.

use std::io::Write;

use crate::cli::args::LoadingArgs;
use crate::error::Result;
use crate::state::set_loading_state;

use super::dispatcher::{Command, CommandResult};
use super::io::{parse_json_arg, read_bag, write_json};

/// The loading command implementation.
pub struct LoadingCommand {
    args: LoadingArgs,
}

impl LoadingCommand {
    /// Create a new loading command.
    pub fn new(args: LoadingArgs) -> Self {
        Self { args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &LoadingArgs {
        &self.args
    }
}

impl Command for LoadingCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let bag = read_bag(&self.args.bag)?;
        let data = self.args.data.as_deref().map(parse_json_arg).transpose()?;

        let bag = set_loading_state(&bag, &self.args.key, data);

        write_json(out, &bag)?;
        Ok(CommandResult::success())
    }
}

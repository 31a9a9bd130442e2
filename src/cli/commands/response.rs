//! Response command implementation.
//!
//! The `promise-state response` command folds a raw response document into
//! an entry, keeping the response's extra top-level fields.

use std::io::Write;

use crate::cli::args::ResponseArgs;
use crate::config::TaggerConfig;
use crate::error::Result;
use crate::state::set_promise_response_with;

use super::dispatcher::{Command, CommandResult};
use super::io::{ensure_single_stdin, read_bag, read_json, write_json};

/// The response command implementation.
pub struct ResponseCommand {
    args: ResponseArgs,
    config: TaggerConfig,
}

impl ResponseCommand {
    /// Create a new response command.
    pub fn new(args: ResponseArgs, config: TaggerConfig) -> Self {
        Self { args, config }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ResponseArgs {
        &self.args
    }
}

impl Command for ResponseCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        ensure_single_stdin(&[self.args.bag.as_path(), self.args.response.as_path()])?;
        let bag = read_bag(&self.args.bag)?;
        let response = read_json(&self.args.response)?;

        let bag = set_promise_response_with(&bag, &self.args.key, &response, &self.config)?;

        write_json(out, &bag)?;
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_inputs(temp: &TempDir, response: &str) -> (PathBuf, PathBuf) {
        let bag = temp.path().join("bag.json");
        let resp = temp.path().join("response.json");
        fs::write(&bag, "{}").unwrap();
        fs::write(&resp, response).unwrap();
        (bag, resp)
    }

    #[test]
    fn response_uses_configured_mode() {
        let temp = TempDir::new().unwrap();
        let (bag, response) =
            write_inputs(&temp, r#"{"type": "FETCH", "payload": {"data": [1], "status": 200}}"#);
        let config = TaggerConfig {
            legacy_status_field: false,
            ..TaggerConfig::default()
        };
        let cmd = ResponseCommand::new(
            ResponseArgs {
                bag,
                key: "tables".to_string(),
                response,
            },
            config,
        );
        let mut out = Vec::new();

        cmd.execute(&mut out).unwrap();

        let written: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(written["tables"]["promiseState"], "SUCCESS");
        assert!(written["tables"].get("status").is_none());
        assert!(written["tables"].get("type").is_none());
    }

    #[test]
    fn bag_and_response_cannot_both_come_from_stdin() {
        let cmd = ResponseCommand::new(
            ResponseArgs {
                bag: PathBuf::from("-"),
                key: "tables".to_string(),
                response: PathBuf::from("-"),
            },
            TaggerConfig::default(),
        );
        let mut out = Vec::new();

        let err = cmd.execute(&mut out).unwrap_err();

        assert!(err.to_string().contains("Only one input can be read from stdin"));
        assert!(out.is_empty());
    }

    #[test]
    fn malformed_response_is_an_error() {
        let temp = TempDir::new().unwrap();
        let (bag, response) = write_inputs(&temp, r#"{"status": 200}"#);
        let cmd = ResponseCommand::new(
            ResponseArgs {
                bag,
                key: "tables".to_string(),
                response,
            },
            TaggerConfig::default(),
        );
        let mut out = Vec::new();

        let err = cmd.execute(&mut out).unwrap_err();

        assert!(err.to_string().contains("Malformed response"));
    }
}

//! JSON input and output shared by the commands.

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{anyhow, Context};
use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::state::StateBag;

fn is_stdin(path: &Path) -> bool {
    path == Path::new("-")
}

fn read_source(path: &Path) -> Result<String> {
    let content = if is_stdin(path) {
        let mut content = String::new();
        io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read stdin")?;
        content
    } else {
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?
    };
    Ok(content)
}

/// Reject more than one input reading from stdin (`-`).
pub fn ensure_single_stdin(paths: &[&Path]) -> Result<()> {
    if paths.iter().filter(|path| is_stdin(path)).count() > 1 {
        return Err(anyhow!("Only one input can be read from stdin ('-')").into());
    }
    Ok(())
}

/// Read a bag from `path`. A blank file is an empty bag.
pub fn read_bag(path: &Path) -> Result<StateBag> {
    let content = read_source(path)?;
    if content.trim().is_empty() {
        return Ok(StateBag::new());
    }
    let bag = serde_json::from_str(&content)
        .with_context(|| format!("Invalid bag JSON in {}", path.display()))?;
    Ok(bag)
}

/// Read a bag, or start from an empty one when no path is given.
pub fn read_bag_or_empty(path: Option<&Path>) -> Result<StateBag> {
    match path {
        Some(path) => read_bag(path),
        None => Ok(StateBag::new()),
    }
}

/// Read any JSON document from `path`.
pub fn read_json(path: &Path) -> Result<Value> {
    let content = read_source(path)?;
    let value = serde_json::from_str(&content)
        .with_context(|| format!("Invalid JSON in {}", path.display()))?;
    Ok(value)
}

/// Parse an inline JSON argument.
pub fn parse_json_arg(raw: &str) -> Result<Value> {
    Ok(serde_json::from_str(raw)?)
}

/// Write `value` as pretty JSON followed by a newline.
pub fn write_json<T: Serialize + ?Sized>(out: &mut dyn Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

//! JSON argument parsing.
//!
//! Every JSON argument accepts three forms:
//! - inline JSON: `'{"a": 1}'`
//! - a file reference: `@path/to/tree.json`
//! - stdin: `-`

use crate::error::{Error, Result};
use crate::utils::io;
use serde_json::Value;
use std::io::Read;
use std::path::Path;

/// Read JSON spec from string, file (@path), or stdin (-).
pub fn read_json_spec_to_string(spec: &str) -> Result<String> {
    use std::io::IsTerminal;

    if spec.trim() == "-" {
        let mut buf = String::new();
        let mut stdin = std::io::stdin();
        if stdin.is_terminal() {
            return Err(Error::validation_invalid_argument(
                "json",
                "Cannot read JSON from stdin when stdin is a TTY",
                None,
                None,
            ));
        }
        stdin
            .read_to_string(&mut buf)
            .map_err(|e| Error::internal_io(e.to_string(), Some("read stdin".to_string())))?;
        return Ok(buf);
    }

    if let Some(path) = spec.strip_prefix('@') {
        if path.trim().is_empty() {
            return Err(Error::validation_invalid_argument(
                "json",
                "Invalid JSON spec '@' (missing file path)",
                None,
                None,
            ));
        }

        return io::read_file(Path::new(path), &format!("read json file spec '{}'", path));
    }

    Ok(spec.to_string())
}

/// Resolve a JSON spec and parse it into a `Value`.
///
/// `field` names the argument in the error context.
pub fn parse_json_spec(spec: &str, field: &str) -> Result<Value> {
    let raw = read_json_spec_to_string(spec)?;
    serde_json::from_str(&raw)
        .map_err(|e| Error::validation_invalid_json(e, Some(format!("parse {}", field))))
}

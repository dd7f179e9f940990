use clap::Args;
use serde::Serialize;
use serde_json::Value;
use std::path::Path;

use treekit::json::parse_json_spec;
use treekit::{io, log_status, path, Error};

use super::{CmdResult, GlobalArgs};

#[derive(Args)]
pub struct SetArgs {
    /// JSON document (inline, @file, or - for stdin)
    pub json: String,

    /// Delimited path, e.g. `a.b.0.c`
    pub path: String,

    /// JSON value to write
    pub value: String,

    /// Path delimiter (defaults to the configured delimiter)
    #[arg(long, short = 'd')]
    pub delimiter: Option<String>,

    /// Write the result back to the @file it was read from
    #[arg(long)]
    pub in_place: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetOutput {
    command: String,
    path: String,
    result: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    written_to: Option<String>,
}

pub fn run(args: SetArgs, global: &GlobalArgs) -> CmdResult<SetOutput> {
    let target_file = if args.in_place {
        let Some(file) = args.json.strip_prefix('@') else {
            return Err(Error::validation_invalid_argument(
                "in-place",
                "--in-place requires the document to be given as @file",
                Some(args.json.clone()),
                None,
            ));
        };
        Some(file.to_string())
    } else {
        None
    };

    let mut root = parse_json_spec(&args.json, "json")?;
    let value = parse_json_spec(&args.value, "value")?;
    let delimiter = global.delimiter(args.delimiter.as_deref());

    path::set_delimited(&mut root, &args.path, value, delimiter)?;

    if let Some(file) = &target_file {
        let content = serde_json::to_string_pretty(&root).map_err(|e| {
            Error::internal_json(e.to_string(), Some("serialize document".to_string()))
        })?;
        io::write_file_atomic(Path::new(file), &content, &format!("write {}", file))?;
        log_status!("set", "Wrote '{}' to {}", args.path, file);
    }

    Ok((
        SetOutput {
            command: "set".to_string(),
            path: args.path,
            result: root,
            written_to: target_file,
        },
        0,
    ))
}

use clap::Args;
use serde::Serialize;
use serde_json::Value;

use treekit::json::parse_json_spec;
use treekit::path;

use super::{CmdResult, GlobalArgs};

#[derive(Args)]
pub struct GetArgs {
    /// JSON document (inline, @file, or - for stdin)
    pub json: String,

    /// Delimited path, e.g. `a.b.0.c`
    pub path: String,

    /// JSON value returned when the path is missing
    #[arg(long, value_name = "JSON")]
    pub default: Option<String>,

    /// Path delimiter (defaults to the configured delimiter)
    #[arg(long, short = 'd')]
    pub delimiter: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GetOutput {
    command: String,
    path: String,
    found: bool,
    value: Value,
}

pub fn run(args: GetArgs, global: &GlobalArgs) -> CmdResult<GetOutput> {
    let root = parse_json_spec(&args.json, "json")?;
    let default = match args.default.as_deref() {
        Some(spec) => parse_json_spec(spec, "default")?,
        None => Value::Null,
    };
    let delimiter = global.delimiter(args.delimiter.as_deref());

    let found = path::find(&root, &args.path, delimiter).is_some();
    let value = path::get_delimited(&root, &args.path, &default, delimiter).clone();

    Ok((
        GetOutput {
            command: "get".to_string(),
            path: args.path,
            found,
            value,
        },
        0,
    ))
}

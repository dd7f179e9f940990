use clap::Args;
use serde::Serialize;
use serde_json::Value;

use treekit::json::parse_json_spec;
use treekit::merge;

use super::{CmdResult, GlobalArgs};

#[derive(Args)]
pub struct DefaultsArgs {
    /// Destination document (inline, @file, or - for stdin)
    pub dest: String,

    /// Source documents, applied in order; earlier sources win
    #[arg(required = true, num_args = 1..)]
    pub sources: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct DefaultsOutput {
    command: String,
    result: Value,
}

pub fn run(args: DefaultsArgs, _global: &GlobalArgs) -> CmdResult<DefaultsOutput> {
    let mut dest = parse_json_spec(&args.dest, "dest")?;
    let sources = args
        .sources
        .iter()
        .enumerate()
        .map(|(i, spec)| parse_json_spec(spec, &format!("source {}", i + 1)))
        .collect::<treekit::Result<Vec<Value>>>()?;

    merge::defaults_deep(&mut dest, &sources);

    Ok((
        DefaultsOutput {
            command: "defaults".to_string(),
            result: dest,
        },
        0,
    ))
}

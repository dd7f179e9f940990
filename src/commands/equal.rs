use clap::Args;
use serde::Serialize;

use treekit::compare::{self, Equality};
use treekit::json::parse_json_spec;

use super::{CmdResult, GlobalArgs};

#[derive(Args)]
pub struct EqualArgs {
    /// First document; its keys are compared when no --key is given
    pub a: String,

    /// Second document
    pub b: String,

    /// Key to compare (repeatable)
    #[arg(long = "key", short = 'k', value_name = "KEY")]
    pub keys: Vec<String>,

    /// Compare without type coercion
    #[arg(long)]
    pub strict: bool,
}

#[derive(Debug, Serialize)]
pub struct EqualOutput {
    command: String,
    equal: bool,
    mode: Equality,
    keys: Vec<String>,
}

pub fn run(args: EqualArgs, global: &GlobalArgs) -> CmdResult<EqualOutput> {
    let a = parse_json_spec(&args.a, "a")?;
    let b = parse_json_spec(&args.b, "b")?;
    let mode = if args.strict {
        Equality::Strict
    } else {
        global.defaults.equality
    };

    let keys = if args.keys.is_empty() {
        compare::own_keys(&a)
    } else {
        args.keys
    };
    let key_refs: Vec<&str> = keys.iter().map(String::as_str).collect();
    let equal = compare::equal_for_keys_with(&a, &b, Some(key_refs.as_slice()), mode);

    Ok((
        EqualOutput {
            command: "equal".to_string(),
            equal,
            mode,
            keys,
        },
        0,
    ))
}

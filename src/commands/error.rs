use clap::{Args, Subcommand};
use serde::Serialize;

use treekit::error::{codes, help};
use treekit::Error;

use super::{CmdResult, GlobalArgs};

#[derive(Args)]
pub struct ErrorArgs {
    #[command(subcommand)]
    command: ErrorCommand,
}

#[derive(Subcommand)]
enum ErrorCommand {
    /// List available error codes
    List,
    /// Explain an error code
    Explain {
        /// Error code (example: `path.invalid_segment`)
        code: String,
    },
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ErrorOutput {
    List {
        command: String,
        codes: Vec<help::ErrorHelpSummary>,
    },
    Explain {
        command: String,
        help: help::ErrorHelp,
    },
}

pub fn run(args: ErrorArgs, _global: &GlobalArgs) -> CmdResult<ErrorOutput> {
    match args.command {
        ErrorCommand::List => Ok((
            ErrorOutput::List {
                command: "error.list".to_string(),
                codes: help::list(),
            },
            0,
        )),
        ErrorCommand::Explain { code } => {
            let Some(code_enum) = codes::parse_code(&code) else {
                return Err(Error::validation_unknown_error_code(code));
            };

            Ok((
                ErrorOutput::Explain {
                    command: "error.explain".to_string(),
                    help: help::explain(code_enum),
                },
                0,
            ))
        }
    }
}

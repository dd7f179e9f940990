use clap::{Parser, Subcommand};

use commands::GlobalArgs;

mod commands;
mod output;

use commands::{config, defaults, equal, error, get, scale, set};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "treekit")]
#[command(version = VERSION)]
#[command(about = "Path access, deep defaults, subset equality and aspect-fit scaling for JSON trees")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Read the value at a delimited path
    Get(get::GetArgs),
    /// Write a value at a delimited path, creating containers as needed
    Set(set::SetArgs),
    /// Fill absent fields of a document from one or more sources
    Defaults(defaults::DefaultsArgs),
    /// Compare two documents on a subset of keys
    Equal(equal::EqualArgs),
    /// Fit content dimensions into a bounding box, centered
    Scale(scale::ScaleArgs),
    /// Manage global treekit.json configuration
    Config(config::ConfigArgs),
    /// Error code registry and explanations
    Error(error::ErrorArgs),
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    let global = GlobalArgs {
        defaults: treekit::defaults::load_defaults(),
    };

    let (json_result, exit_code) = commands::run_json(cli.command, &global);

    if let Err(err) = output::print_json_result(json_result) {
        eprintln!("{}: {}", err.code.as_str(), err.details);
        return std::process::ExitCode::from(1);
    }

    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}

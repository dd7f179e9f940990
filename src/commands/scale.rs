use clap::Args;
use serde::Serialize;

use treekit::scale::{self, Rect};

use super::{CmdResult, GlobalArgs};

#[derive(Args)]
pub struct ScaleArgs {
    /// Content width
    pub in_width: u32,
    /// Content height
    pub in_height: u32,
    /// Bounding box width
    pub out_width: u32,
    /// Bounding box height
    pub out_height: u32,
}

#[derive(Debug, Serialize)]
pub struct ScaleOutput {
    command: String,
    #[serde(flatten)]
    rect: Rect,
}

pub fn run(args: ScaleArgs, _global: &GlobalArgs) -> CmdResult<ScaleOutput> {
    let rect = scale::scale(args.in_width, args.in_height, args.out_width, args.out_height);

    Ok((
        ScaleOutput {
            command: "scale".to_string(),
            rect,
        },
        0,
    ))
}

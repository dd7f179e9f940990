use treekit::defaults::Defaults;

pub type CmdResult<T> = treekit::Result<(T, i32)>;

pub(crate) struct GlobalArgs {
    pub(crate) defaults: Defaults,
}

impl GlobalArgs {
    /// Resolve an explicit `--delimiter`, falling back to the configured default.
    pub(crate) fn delimiter<'a>(&'a self, explicit: Option<&'a str>) -> &'a str {
        explicit.unwrap_or(&self.defaults.delimiter)
    }
}

pub mod config;
pub mod defaults;
pub mod equal;
pub mod error;
pub mod get;
pub mod scale;
pub mod set;

macro_rules! dispatch {
    ($args:expr, $global:expr, $module:ident) => {
        crate::output::map_cmd_result_to_json($module::run($args, $global))
    };
}

pub(crate) fn run_json(
    command: crate::Commands,
    global: &GlobalArgs,
) -> (treekit::Result<serde_json::Value>, i32) {
    match command {
        crate::Commands::Get(args) => dispatch!(args, global, get),
        crate::Commands::Set(args) => dispatch!(args, global, set),
        crate::Commands::Defaults(args) => dispatch!(args, global, defaults),
        crate::Commands::Equal(args) => dispatch!(args, global, equal),
        crate::Commands::Scale(args) => dispatch!(args, global, scale),
        crate::Commands::Config(args) => dispatch!(args, global, config),
        crate::Commands::Error(args) => dispatch!(args, global, error),
    }
}

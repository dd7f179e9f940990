use clap::{Args, Subcommand};
use serde::Serialize;
use serde_json::Value;

use treekit::defaults::{self, Defaults, TreekitConfig};
use treekit::json::parse_json_spec;
use treekit::path::{self, DEFAULT_DELIMITER};
use treekit::Error;

use super::{CmdResult, GlobalArgs};

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Display configuration (merged defaults + file)
    Show {
        /// Show only built-in defaults (ignore treekit.json)
        #[arg(long)]
        builtin: bool,
    },
    /// Set a configuration value at a dotted path
    Set {
        /// Dotted path (e.g., defaults.delimiter)
        key: String,
        /// Value to set (JSON)
        value: String,
    },
    /// Remove a configuration value at a dotted path, restoring its default
    Remove {
        /// Dotted path (e.g., defaults.equality)
        key: String,
    },
    /// Reset configuration to built-in defaults (deletes treekit.json)
    Reset,
    /// Show the path to treekit.json
    Path,
}

#[derive(Debug, Serialize, Default)]
pub struct ConfigOutput {
    command: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    config: Option<TreekitConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    defaults: Option<Defaults>,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    exists: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    deleted: Option<bool>,
}

pub fn run(args: ConfigArgs, _global: &GlobalArgs) -> CmdResult<ConfigOutput> {
    match args.command {
        ConfigCommand::Show { builtin } => show(builtin),
        ConfigCommand::Set { key, value } => set(&key, &value),
        ConfigCommand::Remove { key } => remove(&key),
        ConfigCommand::Reset => reset(),
        ConfigCommand::Path => path(),
    }
}

fn show(builtin: bool) -> CmdResult<ConfigOutput> {
    let output = if builtin {
        ConfigOutput {
            command: "config.show".to_string(),
            defaults: Some(defaults::builtin_defaults()),
            ..Default::default()
        }
    } else {
        ConfigOutput {
            command: "config.show".to_string(),
            config: Some(defaults::load_config()),
            ..Default::default()
        }
    };
    Ok((output, 0))
}

fn set(key: &str, value_spec: &str) -> CmdResult<ConfigOutput> {
    let value = parse_json_spec(value_spec, "value")?;
    let (config, stored) = apply_value(&defaults::load_config(), key, value, value_spec)?;

    defaults::save_config(&config)?;

    Ok((
        ConfigOutput {
            command: "config.set".to_string(),
            config: Some(config),
            key: Some(key.to_string()),
            value: Some(stored),
            ..Default::default()
        },
        0,
    ))
}

/// Write `value` at `key` and return the validated config with the value it stored.
///
/// Keys that do not survive validation are unknown and rejected.
fn apply_value(
    current: &TreekitConfig,
    key: &str,
    value: Value,
    raw: &str,
) -> treekit::Result<(TreekitConfig, Value)> {
    let mut document = config_document_of(current)?;
    path::set_delimited(&mut document, key, value, DEFAULT_DELIMITER)?;
    let config = validate_document(document, key, Some(raw))?;

    let stored = config_document_of(&config)?;
    let Some(value) = path::find(&stored, key, DEFAULT_DELIMITER).cloned() else {
        return Err(Error::config_invalid_value(
            key,
            Some(raw.to_string()),
            "Unknown configuration key",
        )
        .with_hint("Run 'treekit config show --builtin' to see the expected shape"));
    };

    Ok((config, value))
}

fn remove(key: &str) -> CmdResult<ConfigOutput> {
    let mut document = config_document()?;
    if path::remove_delimited(&mut document, key, DEFAULT_DELIMITER).is_none() {
        return Err(Error::config_invalid_value(
            key,
            None,
            "No configuration value at this path",
        ));
    }
    let config = validate_document(document, key, None)?;

    defaults::save_config(&config)?;

    Ok((
        ConfigOutput {
            command: "config.remove".to_string(),
            config: Some(config),
            key: Some(key.to_string()),
            ..Default::default()
        },
        0,
    ))
}

fn reset() -> CmdResult<ConfigOutput> {
    let deleted = defaults::reset_config()?;
    Ok((
        ConfigOutput {
            command: "config.reset".to_string(),
            deleted: Some(deleted),
            ..Default::default()
        },
        0,
    ))
}

fn path() -> CmdResult<ConfigOutput> {
    Ok((
        ConfigOutput {
            command: "config.path".to_string(),
            path: Some(defaults::config_path()?),
            exists: Some(defaults::config_exists()),
            ..Default::default()
        },
        0,
    ))
}

fn config_document() -> treekit::Result<Value> {
    config_document_of(&defaults::load_config())
}

fn config_document_of(config: &TreekitConfig) -> treekit::Result<Value> {
    serde_json::to_value(config)
        .map_err(|e| Error::internal_json(e.to_string(), Some("serialize config".to_string())))
}

fn validate_document(document: Value, key: &str, raw: Option<&str>) -> treekit::Result<TreekitConfig> {
    serde_json::from_value(document).map_err(|e| {
        Error::config_invalid_value(key, raw.map(str::to_string), e.to_string())
            .with_hint("Run 'treekit config show --builtin' to see the expected shape")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use treekit::compare::Equality;
    use treekit::ErrorCode;

    #[test]
    fn test_apply_value_updates_known_key() {
        let (config, stored) = apply_value(
            &TreekitConfig::default(),
            "defaults.equality",
            json!("strict"),
            "\"strict\"",
        )
        .unwrap();
        assert_eq!(config.defaults.equality, Equality::Strict);
        assert_eq!(stored, json!("strict"));
    }

    #[test]
    fn test_apply_value_rejects_unknown_key() {
        let err = apply_value(
            &TreekitConfig::default(),
            "defaults.delimeter",
            json!("/"),
            "\"/\"",
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigInvalidValue);
        assert_eq!(err.details["key"], "defaults.delimeter");
    }

    #[test]
    fn test_apply_value_rejects_wrong_type() {
        let err = apply_value(&TreekitConfig::default(), "defaults.equality", json!(3), "3")
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigInvalidValue);
    }
}

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::compare::Equality;
use crate::paths;
use crate::path::DEFAULT_DELIMITER;
use crate::utils::io;

/// Root configuration structure for treekit.json
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TreekitConfig {
    #[serde(default)]
    pub defaults: Defaults,
}

/// All configurable defaults that can be overridden via treekit.json
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Defaults {
    /// Path delimiter used when a command does not pass `--delimiter`.
    #[serde(default = "default_delimiter")]
    pub delimiter: String,

    /// Comparison mode for `equal` when `--strict` is not given.
    #[serde(default)]
    pub equality: Equality,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            equality: Equality::default(),
        }
    }
}

fn default_delimiter() -> String {
    DEFAULT_DELIMITER.to_string()
}

// =============================================================================
// Loading functions
// =============================================================================

/// Load defaults, merging file config with built-in defaults.
/// If treekit.json is missing or invalid, returns built-in defaults.
pub fn load_defaults() -> Defaults {
    load_config().defaults
}

/// Load the full treekit.json config, falling back to defaults on any error.
pub fn load_config() -> TreekitConfig {
    let path = match paths::treekit_json() {
        Ok(path) => path,
        Err(_) => return TreekitConfig::default(),
    };

    if !path.exists() {
        return TreekitConfig::default();
    }

    match load_config_from(&path) {
        Ok(config) => config,
        Err(err) => {
            log_status!(
                "config",
                "Ignoring {} ({}), using built-in defaults",
                path.display(),
                err.details
            );
            TreekitConfig::default()
        }
    }
}

/// Load config from an explicit file.
pub fn load_config_from(path: &Path) -> crate::Result<TreekitConfig> {
    let content = io::read_file(path, &format!("read {}", path.display()))?;

    serde_json::from_str(&content)
        .map_err(|e| crate::Error::config_invalid_json(path.display().to_string(), e))
}

/// Save config to treekit.json file (creates if missing).
pub fn save_config(config: &TreekitConfig) -> crate::Result<()> {
    save_config_to(&paths::treekit_json()?, config)
}

/// Save config to an explicit file, creating its parent directory.
pub fn save_config_to(path: &Path, config: &TreekitConfig) -> crate::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            crate::Error::internal_io(e.to_string(), Some(format!("create {}", parent.display())))
        })?;
    }

    let content = serde_json::to_string_pretty(config).map_err(|e| {
        crate::Error::internal_json(e.to_string(), Some("serialize treekit.json".to_string()))
    })?;

    io::write_file_atomic(path, &content, &format!("write {}", path.display()))?;
    log_status!("config", "Saved {}", path.display());

    Ok(())
}

/// Check if treekit.json file exists
pub fn config_exists() -> bool {
    paths::treekit_json()
        .map(|p| p.exists())
        .unwrap_or(false)
}

/// Delete treekit.json file (reset to defaults)
pub fn reset_config() -> crate::Result<bool> {
    let path = paths::treekit_json()?;

    if path.exists() {
        fs::remove_file(&path).map_err(|e| {
            crate::Error::internal_io(e.to_string(), Some(format!("delete {}", path.display())))
        })?;
        Ok(true)
    } else {
        Ok(false)
    }
}

/// Get the path to treekit.json (for display purposes)
pub fn config_path() -> crate::Result<String> {
    Ok(paths::treekit_json()?.display().to_string())
}

/// Get built-in defaults (ignoring any file config)
pub fn builtin_defaults() -> Defaults {
    Defaults::default()
}

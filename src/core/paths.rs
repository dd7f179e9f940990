use crate::error::{Error, Result};
use std::env;
use std::path::PathBuf;

/// Base treekit config directory (universal ~/.config/treekit/ on all platforms)
pub fn treekit() -> Result<PathBuf> {
    #[cfg(windows)]
    {
        let appdata = env::var("APPDATA").map_err(|_| {
            Error::internal_unexpected(
                "APPDATA environment variable not set on Windows".to_string(),
            )
        })?;
        Ok(PathBuf::from(appdata).join("treekit"))
    }

    #[cfg(not(windows))]
    {
        let home = env::var("HOME").map_err(|_| {
            Error::internal_unexpected(
                "HOME environment variable not set on Unix-like system".to_string(),
            )
        })?;
        Ok(PathBuf::from(home).join(".config").join("treekit"))
    }
}

/// Global treekit.json config file path
pub fn treekit_json() -> Result<PathBuf> {
    Ok(treekit()?.join("treekit.json"))
}

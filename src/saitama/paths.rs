//! # Path Resolution
//!
//! All data lives under the per-user configuration directory, never under the
//! directory the tool happens to be launched from:
//!
//! ```text
//! <config dir>/saitama/
//! ├── problems.json          # canonical data file
//! ├── config.json            # user settings
//! └── .saitama_backups/      # timestamped snapshots of problems.json
//! ```
//!
//! `<config dir>` is `~/.config` on Linux, `~/Library/Application Support` on
//! macOS and `%APPDATA%` on Windows. Setting `SAITAMA_HOME` replaces the whole
//! `<config dir>/saitama` directory.

use crate::config::StoreConfig;
use crate::error::{Result, SaitamaError};
use directories::BaseDirs;
use std::fs;
use std::path::{Path, PathBuf};

pub const HOME_ENV: &str = "SAITAMA_HOME";
const APP_DIRNAME: &str = "saitama";

/// Resolves and creates the application directory.
pub fn app_dir() -> Result<PathBuf> {
    let dir = match std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        Some(home) => PathBuf::from(home),
        None => {
            let base = BaseDirs::new().ok_or_else(|| {
                SaitamaError::DirectoryUnavailable(
                    "could not determine the user config directory".to_string(),
                )
            })?;
            base.config_dir().join(APP_DIRNAME)
        }
    };
    ensure_dir(&dir)?;
    Ok(dir)
}

/// Path of the canonical problems file. Creates the parent directory.
pub fn resolve_data_path(config: &StoreConfig) -> Result<PathBuf> {
    Ok(app_dir()?.join(&config.data_filename))
}

/// Hidden snapshot directory, a sibling of the canonical file.
pub fn resolve_backup_dir(config: &StoreConfig) -> Result<PathBuf> {
    Ok(app_dir()?.join(&config.backup_dirname))
}

pub(crate) fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| {
        SaitamaError::DirectoryUnavailable(format!("could not create {}: {}", path.display(), e))
    })
}

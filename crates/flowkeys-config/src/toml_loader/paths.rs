//! Locating the shortcut config and seeding it with the default bindings.

use flowkeys_common::ConfigError;
use std::ffi::OsString;
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::template::default_config_toml;

/// Environment variable that points the editor at a specific config file.
pub const CONFIG_PATH_ENV: &str = "FLOWKEYS_CONFIG";

/// Per-user config file: `<config dir>/flowkeys/config.toml`.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))?;
    Ok(config_dir.join("flowkeys").join("config.toml"))
}

/// Decide which file holds the shortcut bindings.
///
/// An explicit path wins, then [`CONFIG_PATH_ENV`], then
/// [`default_config_path`].
pub fn resolve_config_path(explicit: Option<&Path>) -> Result<PathBuf, ConfigError> {
    choose_config_path(explicit, std::env::var_os(CONFIG_PATH_ENV))
}

pub(super) fn choose_config_path(
    explicit: Option<&Path>,
    from_env: Option<OsString>,
) -> Result<PathBuf, ConfigError> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    match from_env {
        Some(path) if !path.is_empty() => {
            debug!("config path taken from {CONFIG_PATH_ENV}");
            Ok(PathBuf::from(path))
        }
        _ => default_config_path(),
    }
}

/// Write the commented default bindings to `path`.
///
/// Returns `Ok(false)` and leaves the file alone if one already exists, so
/// bindings a user has written are never replaced by the template.
pub fn create_default_config(path: &Path) -> Result<bool, ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::ParseError(format!(
                "failed to create config directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            debug!("{} already exists, not writing defaults", path.display());
            return Ok(false);
        }
        Err(e) => {
            return Err(ConfigError::ParseError(format!(
                "failed to create {}: {e}",
                path.display()
            )))
        }
    };

    file.write_all(default_config_toml().as_bytes())
        .map_err(|e| {
            ConfigError::ParseError(format!(
                "failed to write default bindings to {}: {e}",
                path.display()
            ))
        })?;

    info!("wrote default shortcut bindings to {}", path.display());
    Ok(true)
}

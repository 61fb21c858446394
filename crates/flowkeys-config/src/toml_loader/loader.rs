//! Reading shortcut bindings from TOML.

use crate::schema::{FlowkeysConfig, ShortcutConfig};
use crate::validation;
use flowkeys_common::{Command, ConfigError};
use std::path::Path;
use tracing::{debug, info, warn};

use super::paths::{create_default_config, resolve_config_path};

const SECTIONS: [&str; 2] = ["shortcuts", "exemption"];

/// A parsed config together with what the file left out or got wrong.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: FlowkeysConfig,
    /// Commands the file gives no chord for. They keep their default chord.
    pub defaulted: Vec<Command>,
    /// Dotted keys that set nothing, e.g. `shortcuts.frezee`.
    pub unknown_keys: Vec<String>,
}

impl LoadedConfig {
    /// Parse TOML text and note which bindings fell back to defaults.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: FlowkeysConfig = toml::from_str(content)
            .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;
        let raw: toml::Table = toml::from_str(content)
            .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

        let mut unknown_keys: Vec<String> = raw
            .keys()
            .filter(|k| !SECTIONS.contains(&k.as_str()))
            .cloned()
            .collect();

        let mut given = Vec::new();
        if let Some(shortcuts) = raw.get("shortcuts").and_then(toml::Value::as_table) {
            for key in shortcuts.keys() {
                match ShortcutConfig::command_for_key(key) {
                    Some(command) => given.push(command),
                    None => unknown_keys.push(format!("shortcuts.{key}")),
                }
            }
        }

        let defaulted = Command::ALL
            .into_iter()
            .filter(|c| !given.contains(c))
            .collect();

        Ok(Self {
            config,
            defaulted,
            unknown_keys,
        })
    }
}

/// Load bindings from a TOML file, dropping the load report.
pub fn load_from_path(path: &Path) -> Result<FlowkeysConfig, ConfigError> {
    load_with_report(path).map(|loaded| loaded.config)
}

/// Load bindings from a TOML file.
///
/// Missing commands keep their default chord and unknown keys are logged.
/// A config that fails validation is still returned; clashing chords are
/// rejected later, when the command table is built.
pub fn load_with_report(path: &Path) -> Result<LoadedConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;
    let loaded = LoadedConfig::parse(&content)?;

    for key in &loaded.unknown_keys {
        warn!("{}: ignoring unknown key '{key}'", path.display());
    }
    if !loaded.defaulted.is_empty() {
        let names: Vec<&str> = loaded.defaulted.iter().map(|c| c.name()).collect();
        debug!("default chords kept for: {}", names.join(", "));
    }
    if let Err(e) = validation::validate(&loaded.config) {
        warn!("config validation warning: {e}");
    }

    info!("loaded shortcut bindings from {}", path.display());
    Ok(loaded)
}

/// Load bindings from `FLOWKEYS_CONFIG` or the per-user config file.
///
/// On first run the file does not exist yet. It is seeded with the
/// commented defaults and the default bindings are returned.
pub fn load_default() -> Result<FlowkeysConfig, ConfigError> {
    let path = resolve_config_path(None)?;

    match load_from_path(&path) {
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config at {}, seeding defaults", path.display());
            create_default_config(&path)?;
            Ok(FlowkeysConfig::default())
        }
        other => other,
    }
}

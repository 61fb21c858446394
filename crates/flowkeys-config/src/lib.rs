//! Flowkeys configuration system.
//!
//! Provides TOML-based configuration for the flow editor's keyboard
//! shortcuts and the marker class that opts UI regions out of them.
//! All sections use defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use flowkeys_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod keybinds;
pub mod schema;
pub mod toml_loader;
pub mod validation;
pub mod watcher;

pub use schema::{ExemptionConfig, FlowkeysConfig, ShortcutConfig, CONFIG_SCHEMA_VERSION};
pub use toml_loader::{
    load_default, load_from_path, load_with_report, resolve_config_path, LoadedConfig,
};
pub use watcher::ConfigWatcher;

use flowkeys_common::ConfigError;

/// Load config from the platform default path and validate it.
pub fn load_config() -> Result<FlowkeysConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &FlowkeysConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

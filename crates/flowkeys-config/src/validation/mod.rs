//! Full configuration validation.
//!
//! Each section has its own check; this orchestrator calls them all and
//! collects errors into a single `ConfigError`.

mod exemption;


use crate::keybinds;
use crate::schema::FlowkeysConfig;
use flowkeys_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &FlowkeysConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    if let Err(e) = keybinds::validate_not_empty(&config.shortcuts) {
        errors.push(e.to_string());
    }
    if let Err(e) = keybinds::validate_no_duplicates(&config.shortcuts) {
        errors.push(e.to_string());
    }

    exemption::validate_exemption(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

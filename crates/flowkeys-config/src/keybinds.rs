//! Shortcut validation utilities.

use crate::schema::ShortcutConfig;
use flowkeys_common::{Command, ConfigError};
use std::collections::HashMap;

/// Returns all shortcuts as `(command, chord)` pairs in registration order.
pub fn all_shortcuts(config: &ShortcutConfig) -> Vec<(Command, &str)> {
    Command::ALL
        .into_iter()
        .map(|command| (command, config.chord(command)))
        .collect()
}

/// Case- and whitespace-insensitive form of a chord string.
fn canonical(chord: &str) -> String {
    chord
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Validate that no chord string is empty.
pub fn validate_not_empty(config: &ShortcutConfig) -> Result<(), ConfigError> {
    for (command, chord) in all_shortcuts(config) {
        if chord.trim().is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "empty shortcut for '{}'",
                command.name()
            )));
        }
    }
    Ok(())
}

/// Validate that no two shortcuts are mapped to the same chord string.
///
/// This only compares spellings. Aliases such as `Cmd` vs `Mod` resolve to
/// the same key combination and are caught when the command table is built.
pub fn validate_no_duplicates(config: &ShortcutConfig) -> Result<(), ConfigError> {
    let mut seen: HashMap<String, Command> = HashMap::new();

    for (command, chord) in all_shortcuts(config) {
        let key = canonical(chord);
        if let Some(existing) = seen.get(&key) {
            return Err(ConfigError::ValidationError(format!(
                "duplicate shortcut '{chord}': assigned to both '{}' and '{}'",
                existing.name(),
                command.name()
            )));
        }
        seen.insert(key, command);
    }

    Ok(())
}

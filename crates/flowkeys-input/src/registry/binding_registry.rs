use std::collections::HashMap;

use flowkeys_common::Command;

use crate::keymap::{command_tooltip, parse_keybind, DisplayStyle};

use super::key_combo::KeyCombo;
use super::source::ChordSource;

/// Maps each [`Command`] to its parsed chord.
///
/// Built from a [`ChordSource`] at mount and rebuilt whenever the user's
/// shortcut configuration changes.
#[derive(Debug, Clone, Default)]
pub struct BindingRegistry {
    bindings: HashMap<Command, KeyCombo>,
}

impl BindingRegistry {
    /// Build the registry from a chord source.
    ///
    /// Chord strings that fail to parse are logged as warnings and skipped;
    /// the command then has no chord, which command-table construction
    /// reports as a configuration error.
    pub fn from_source(source: &impl ChordSource) -> Self {
        let mut bindings = HashMap::new();

        for command in Command::ALL {
            let Some(chord) = source.chord_for(command) else {
                tracing::warn!("no chord configured for '{}'", command.name());
                continue;
            };
            match parse_keybind(chord) {
                Ok(kb) => {
                    bindings.insert(command, KeyCombo::from_keybind(&kb));
                }
                Err(e) => {
                    tracing::warn!("invalid chord '{chord}' for '{}': {e}", command.name());
                }
            }
        }

        Self { bindings }
    }

    /// The chord bound to a command.
    pub fn chord_for(&self, command: Command) -> Option<&KeyCombo> {
        self.bindings.get(&command)
    }

    /// The first command, in [`Command::ALL`] order, bound to `combo`.
    pub fn lookup(&self, combo: &KeyCombo) -> Option<Command> {
        Command::ALL
            .into_iter()
            .find(|c| self.bindings.get(c) == Some(combo))
    }

    /// Display string for a command's chord in the native style.
    pub fn display_for(&self, command: Command) -> Option<String> {
        self.chord_for(command).map(KeyCombo::to_string)
    }

    /// Toolbar tooltip for a command, e.g. `Group (Ctrl+G)`.
    pub fn tooltip_for(&self, command: Command, style: DisplayStyle) -> Option<String> {
        self.chord_for(command)
            .map(|combo| command_tooltip(command, &combo.to_keybind(), style))
    }

    /// Number of commands with a chord.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether no command has a chord.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

use std::collections::HashMap;

use flowkeys_common::Command;
use flowkeys_config::ShortcutConfig;

/// Where chord strings come from.
///
/// The binding registry only consumes chords; storing and editing them is
/// the source's business.
pub trait ChordSource {
    /// The chord string configured for `command`, if any.
    fn chord_for(&self, command: Command) -> Option<&str>;
}

impl ChordSource for ShortcutConfig {
    fn chord_for(&self, command: Command) -> Option<&str> {
        Some(self.chord(command))
    }
}

impl ChordSource for HashMap<Command, String> {
    fn chord_for(&self, command: Command) -> Option<&str> {
        self.get(&command).map(String::as_str)
    }
}

//! Keyboard shortcut configuration types.

use flowkeys_common::Command;
use serde::{Deserialize, Serialize};

/// One chord string per flow-editor command.
///
/// Format: "Modifier+Key", where Modifier is one of Mod, Cmd, Ctrl, Alt,
/// Option, Shift, Super. `Mod` is Cmd on macOS and Ctrl elsewhere.
/// Multiple modifiers: "Mod+Shift+F".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShortcutConfig {
    pub freeze_path: String,
    pub freeze: String,
    pub download: String,
    pub docs: String,
    pub save: String,
    pub advanced: String,
    pub code: String,
    #[serde(alias = "component")]
    pub share: String,
    pub group: String,
    pub minimize: String,
}

impl Default for ShortcutConfig {
    fn default() -> Self {
        Self {
            freeze_path: "Mod+Shift+F".into(),
            freeze: "Mod+F".into(),
            download: "Mod+J".into(),
            docs: "Mod+Shift+D".into(),
            save: "Mod+S".into(),
            advanced: "Mod+Shift+A".into(),
            code: "Space".into(),
            share: "Mod+Shift+S".into(),
            group: "Mod+G".into(),
            minimize: "Mod+Shift+Q".into(),
        }
    }
}

impl ShortcutConfig {
    /// The command a `[shortcuts]` key sets. `component` is the older
    /// spelling of `share`.
    pub fn command_for_key(key: &str) -> Option<Command> {
        match key {
            "component" => Some(Command::Share),
            _ => Command::from_name(key),
        }
    }

    /// The configured chord string for a command.
    pub fn chord(&self, command: Command) -> &str {
        match command {
            Command::FreezePath => &self.freeze_path,
            Command::Freeze => &self.freeze,
            Command::Download => &self.download,
            Command::Docs => &self.docs,
            Command::Save => &self.save,
            Command::Advanced => &self.advanced,
            Command::Code => &self.code,
            Command::Share => &self.share,
            Command::Group => &self.group,
            Command::Minimize => &self.minimize,
        }
    }
}

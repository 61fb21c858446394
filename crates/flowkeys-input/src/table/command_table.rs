use std::collections::HashMap;
use std::fmt;

use flowkeys_common::{Command, InputError};

use crate::guard::GuardPolicy;
use crate::registry::{BindingRegistry, KeyCombo};

use super::handlers::{ShortcutHandlers, Trigger};

/// One bound command: chord, policy, and what it does right now.
#[derive(Clone)]
pub struct CommandEntry {
    pub command: Command,
    pub combo: KeyCombo,
    pub policy: GuardPolicy,
    pub trigger: Option<Trigger>,
    /// Value of the policy's override flag at build time.
    pub override_active: bool,
}

impl CommandEntry {
    fn new(command: Command, combo: KeyCombo, handlers: &ShortcutHandlers) -> Self {
        let policy = GuardPolicy::for_command(command);
        let override_active = policy
            .override_flag()
            .is_some_and(|flag| handlers.override_active(flag));
        Self {
            command,
            combo,
            policy,
            trigger: handlers.trigger(command).cloned(),
            override_active,
        }
    }
}

impl fmt::Debug for CommandEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandEntry")
            .field("command", &self.command)
            .field("combo", &self.combo)
            .field("policy", &self.policy)
            .field("has_trigger", &self.trigger.is_some())
            .field("override_active", &self.override_active)
            .finish()
    }
}

/// Immutable chord -> command table for one editor view.
///
/// Rebuilt wholesale whenever the view's triggers, override flags, or the
/// user's bindings change.
#[derive(Debug, Clone, Default)]
pub struct CommandTable {
    entries: HashMap<KeyCombo, CommandEntry>,
}

impl CommandTable {
    /// A table with no bindings.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Resolve every command's chord and attach the caller's handlers.
    ///
    /// Fails with [`InputError::MissingChord`] if the registry has no chord
    /// for a command, and with [`InputError::AmbiguousChord`] if two
    /// commands resolve to the same key combination.
    pub fn build(
        registry: &BindingRegistry,
        handlers: &ShortcutHandlers,
    ) -> Result<Self, InputError> {
        let mut entries: HashMap<KeyCombo, CommandEntry> = HashMap::new();

        for command in Command::ALL {
            let combo = registry
                .chord_for(command)
                .cloned()
                .ok_or(InputError::MissingChord(command))?;

            if let Some(existing) = entries.get(&combo) {
                return Err(InputError::AmbiguousChord {
                    chord: combo.to_string(),
                    first: existing.command,
                    second: command,
                });
            }

            entries.insert(combo.clone(), CommandEntry::new(command, combo, handlers));
        }

        tracing::debug!("built command table with {} bindings", entries.len());
        Ok(Self { entries })
    }

    /// Same chords, triggers and flags taken from `handlers` only.
    ///
    /// Nothing from the handler set this table was built with survives.
    pub fn with_handlers(&self, handlers: &ShortcutHandlers) -> Self {
        let entries = self
            .entries
            .iter()
            .map(|(combo, entry)| {
                (
                    combo.clone(),
                    CommandEntry::new(entry.command, combo.clone(), handlers),
                )
            })
            .collect();
        Self { entries }
    }

    /// The entry bound to a chord.
    pub fn get(&self, combo: &KeyCombo) -> Option<&CommandEntry> {
        self.entries.get(combo)
    }

    /// The entry for a command.
    pub fn entry(&self, command: Command) -> Option<&CommandEntry> {
        self.entries.values().find(|e| e.command == command)
    }

    pub fn entries(&self) -> impl Iterator<Item = &CommandEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

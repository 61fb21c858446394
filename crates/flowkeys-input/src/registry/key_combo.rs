use std::fmt;

use crate::keymap::{is_shiftable_symbol, keybind_to_display, KeyBind, Modifier};

pub(crate) const MOD_CTRL: u8 = 0b0001;
pub(crate) const MOD_ALT: u8 = 0b0010;
pub(crate) const MOD_SHIFT: u8 = 0b0100;
pub(crate) const MOD_SUPER: u8 = 0b1000;

/// Modifier key state of a live keyboard event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub super_key: bool,
}

/// A canonical chord representation for fast HashMap lookup.
///
/// Modifiers are stored as a bitmask so comparison never sorts a
/// `Vec<Modifier>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    /// Bitmask: Ctrl=1, Alt=2, Shift=4, Super=8.
    pub mods: u8,
    /// Normalized key name (e.g. "S", "Space", "F1").
    pub key: String,
}

impl KeyCombo {
    /// Build from a parsed [`KeyBind`].
    pub fn from_keybind(kb: &KeyBind) -> Self {
        let mods = kb.modifiers.iter().fold(0u8, |acc, m| {
            acc | match m {
                Modifier::Ctrl => MOD_CTRL,
                Modifier::Alt => MOD_ALT,
                Modifier::Shift => MOD_SHIFT,
                Modifier::Super => MOD_SUPER,
            }
        });
        Self {
            mods,
            key: kb.key.clone(),
        }
    }

    /// Build from a live event's modifier state and a normalized key name.
    ///
    /// Shift is dropped for symbol and digit keys: the key value is already
    /// the shifted character (`"!"`, not `"1"`), which is how such chords
    /// are written (`"Mod+!"`).
    pub fn from_event(mods: Modifiers, key: impl Into<String>) -> Self {
        let key = key.into();
        let mut bits = 0u8;
        if mods.ctrl {
            bits |= MOD_CTRL;
        }
        if mods.alt {
            bits |= MOD_ALT;
        }
        if mods.shift && !is_shiftable_symbol(&key) {
            bits |= MOD_SHIFT;
        }
        if mods.super_key {
            bits |= MOD_SUPER;
        }
        Self { mods: bits, key }
    }

    /// Reconstruct a [`KeyBind`] for display purposes.
    pub fn to_keybind(&self) -> KeyBind {
        let modifiers = [
            (MOD_CTRL, Modifier::Ctrl),
            (MOD_ALT, Modifier::Alt),
            (MOD_SHIFT, Modifier::Shift),
            (MOD_SUPER, Modifier::Super),
        ]
        .into_iter()
        .filter(|(bit, _)| self.mods & bit != 0)
        .map(|(_, m)| m)
        .collect();

        KeyBind {
            modifiers,
            key: self.key.clone(),
        }
    }
}

impl fmt::Display for KeyCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&keybind_to_display(&self.to_keybind()))
    }
}

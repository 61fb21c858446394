use crate::keymap::normalize_dom_key;
use crate::registry::{KeyCombo, Modifiers};

/// A keydown event as seen by the dispatcher.
///
/// `N` is the host's element handle; `target` is the element that had
/// focus when the key was pressed.
#[derive(Debug, Clone)]
pub struct KeyEvent<N> {
    pub combo: KeyCombo,
    pub target: Option<N>,
}

impl<N> KeyEvent<N> {
    pub fn new(combo: KeyCombo, target: Option<N>) -> Self {
        Self { combo, target }
    }

    /// Build from a DOM `KeyboardEvent.key` value and modifier state.
    pub fn from_dom(key: &str, mods: Modifiers, target: Option<N>) -> Self {
        Self::new(KeyCombo::from_event(mods, normalize_dom_key(key)), target)
    }
}

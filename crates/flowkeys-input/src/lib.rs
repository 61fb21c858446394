pub mod context;
pub mod dispatcher;
pub mod guard;
pub mod keymap;
pub mod registry;
pub mod table;

pub use context::{ElementNode, ElementTree, ExemptionClassifier, KeyEvent, MarkerClassifier};
pub use dispatcher::{DispatchOutcome, Dispatcher};
pub use guard::GuardPolicy;
pub use keymap::{
    command_tooltip, keybind_to_display, keybind_to_display_with, normalize_dom_key, parse_keybind,
    DisplayStyle, KeyBind, Modifier,
};
pub use registry::{BindingRegistry, ChordSource, KeyCombo, Modifiers};
pub use table::{CommandEntry, CommandTable, ShortcutHandlers, Trigger};

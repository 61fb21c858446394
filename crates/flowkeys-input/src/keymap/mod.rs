mod display;
mod dom_keys;
mod parse;
mod types;

pub use display::{command_tooltip, keybind_to_display, keybind_to_display_with, DisplayStyle};
pub use dom_keys::normalize_dom_key;
pub use parse::parse_keybind;
pub(crate) use parse::is_shiftable_symbol;
pub use types::{KeyBind, Modifier};

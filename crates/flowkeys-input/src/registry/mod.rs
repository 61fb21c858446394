//! Binding registry: resolves each command's configured chord string into
//! a [`KeyCombo`].

mod binding_registry;
mod key_combo;
mod source;

pub use binding_registry::BindingRegistry;
pub use key_combo::{KeyCombo, Modifiers};
pub use source::ChordSource;

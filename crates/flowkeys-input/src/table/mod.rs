//! Command table: the chord -> {command, policy, trigger} set a dispatcher
//! resolves key events against.

mod command_table;
mod handlers;

pub use command_table::{CommandEntry, CommandTable};
pub use handlers::{ShortcutHandlers, Trigger};

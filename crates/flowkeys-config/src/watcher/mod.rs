//! File watcher for live shortcut rebinding.
//!
//! Uses the `notify` crate to watch the config file. Changes are debounced
//! so an editor's write-then-rename save produces one reload signal.

mod config_watcher;


pub use config_watcher::{ConfigWatcher, DEFAULT_DEBOUNCE};

pub mod commands;
pub mod errors;

pub use commands::{Command, OverrideFlag};
pub use errors::{ConfigError, FlowkeysError, InputError};

pub type Result<T> = std::result::Result<T, FlowkeysError>;

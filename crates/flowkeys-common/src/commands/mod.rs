mod command_enum;
mod names;

pub use command_enum::*;

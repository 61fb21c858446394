use std::path::PathBuf;

use crate::commands::Command;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("config watch error: {0}")]
    WatchError(String),
}

/// Chord and command-table construction failures.
///
/// These are static configuration mismatches. Dispatching a key event
/// never produces one.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("invalid chord: {0}")]
    InvalidChord(String),

    #[error("no chord bound for command '{}'", .0.name())]
    MissingChord(Command),

    #[error(
        "ambiguous chord '{chord}': bound to both '{}' and '{}'",
        .first.name(),
        .second.name()
    )]
    AmbiguousChord {
        chord: String,
        first: Command,
        second: Command,
    },
}

/// Either half of wiring a dispatcher from a config file: loading the
/// file, or turning its chords into a command table.
#[derive(Debug, thiserror::Error)]
pub enum FlowkeysError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Input(#[from] InputError),
}

use serde::{Deserialize, Serialize};

/// Every command the flow editor binds to a keyboard chord.
///
/// The set is fixed: chords come from configuration, triggers from the
/// editor view that owns the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    // -- Graph structure --
    FreezePath,
    Freeze,
    Group,
    Minimize,

    // -- Export --
    Download,
    Docs,

    // -- Modals --
    Save,
    Advanced,
    Code,
    Share,
}

/// A boolean that re-enables a command inside an exempt region.
///
/// Each flag mirrors "this command's own modal is open": once focus has
/// moved into the modal's form fields the command must still fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverrideFlag {
    /// The save-override confirmation modal is open.
    OverrideModal,
    /// The advanced settings modal is open.
    AdvancedModal,
    /// The code editor modal is open.
    CodeModal,
    /// The share confirmation modal is open.
    ShareConfirm,
}

impl OverrideFlag {
    pub const ALL: [OverrideFlag; 4] = [
        OverrideFlag::OverrideModal,
        OverrideFlag::AdvancedModal,
        OverrideFlag::CodeModal,
        OverrideFlag::ShareConfirm,
    ];
}

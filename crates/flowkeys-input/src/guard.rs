//! Guard policies: when may a command fire inside an exempt region?

use flowkeys_common::{Command, OverrideFlag};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GuardPolicy {
    /// Fires regardless of where focus is.
    Unguarded,
    /// Never fires while the target is in an exempt region.
    AlwaysExempt,
    /// Fires in an exempt region only while the named flag is set.
    ExemptUnlessOverride(OverrideFlag),
}

impl GuardPolicy {
    /// The fixed policy of each flow-editor command.
    pub fn for_command(command: Command) -> Self {
        match command {
            Command::FreezePath | Command::Freeze | Command::Group | Command::Minimize => {
                GuardPolicy::AlwaysExempt
            }
            Command::Download | Command::Docs => GuardPolicy::Unguarded,
            Command::Save => GuardPolicy::ExemptUnlessOverride(OverrideFlag::OverrideModal),
            Command::Advanced => GuardPolicy::ExemptUnlessOverride(OverrideFlag::AdvancedModal),
            Command::Code => GuardPolicy::ExemptUnlessOverride(OverrideFlag::CodeModal),
            Command::Share => GuardPolicy::ExemptUnlessOverride(OverrideFlag::ShareConfirm),
        }
    }

    pub fn override_flag(&self) -> Option<OverrideFlag> {
        match self {
            GuardPolicy::ExemptUnlessOverride(flag) => Some(*flag),
            _ => None,
        }
    }

    /// Whether exemption status can change the outcome at all.
    pub fn consults_exemption(&self) -> bool {
        !matches!(self, GuardPolicy::Unguarded)
    }

    /// Whether a command with this policy may fire.
    pub fn permits(&self, exempt: bool, override_active: bool) -> bool {
        match self {
            GuardPolicy::Unguarded => true,
            GuardPolicy::AlwaysExempt => !exempt,
            GuardPolicy::ExemptUnlessOverride(_) => !exempt || override_active,
        }
    }
}

//! Configuration schema types.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod exemption;
mod shortcuts;

pub use exemption::*;
pub use shortcuts::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowkeysConfig {
    pub shortcuts: ShortcutConfig,
    pub exemption: ExemptionConfig,
}

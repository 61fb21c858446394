use serde::{Deserialize, Serialize};

/// Which UI regions opt out of global shortcuts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExemptionConfig {
    /// Class name that marks an element subtree as exempt.
    pub marker_class: String,
}

impl Default for ExemptionConfig {
    fn default() -> Self {
        Self {
            marker_class: "noflow".into(),
        }
    }
}

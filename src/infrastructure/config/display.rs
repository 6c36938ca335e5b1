//! Listing display defaults.

use serde::{Deserialize, Serialize};

/// `[display]` section. CLI flags can only switch these on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Start with every category collapsed.
    #[serde(default)]
    pub collapsed: bool,
    /// Start with every item card expanded.
    #[serde(default)]
    pub details: bool,
}

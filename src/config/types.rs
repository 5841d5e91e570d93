//! Configuration type definitions.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Tool palette settings.
///
/// Hidden tools stay bound but are skipped when several tools share a chord
/// and the dispatcher looks for a visible one to switch to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolbarConfig {
    /// Tool identifiers hidden from the palette (e.g. `["spray", "jumble"]`)
    #[serde(default)]
    pub hidden_tools: Vec<String>,
}

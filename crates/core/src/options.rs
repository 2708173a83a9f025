use serde::{Deserialize, Serialize};

/// Options accepted by the block-to-module transform.
///
/// Deserializes from the host's camelCase option object; missing fields keep
/// their defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToJsxOptions {
    /// Reserved for single-block compilation; currently has no effect.
    #[serde(alias = "singleBlock")]
    pub single_block: bool,
    /// Declare the wrapper as `const TDXContent` instead of the default export.
    #[serde(alias = "skipExport")]
    pub skip_export: bool,
}

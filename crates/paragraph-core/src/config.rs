//! Configuration passed by the host at construction

use serde::{Deserialize, Serialize};

use crate::{ParagraphError, Result};

/// Paragraph tool configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParagraphConfig {
    /// Placeholder shown on an empty surface, translated by the host.
    /// Empty by default.
    pub placeholder: String,

    /// Keep blocks whose text is blank instead of dropping them on save
    pub preserve_blank: bool,
}

impl ParagraphConfig {
    /// Decode host configuration. `null` and `{}` both yield the defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Option<Self> =
            serde_json::from_str(json).map_err(ParagraphError::InvalidConfig)?;
        Ok(config.unwrap_or_default())
    }
}

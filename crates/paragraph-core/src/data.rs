//! The record exchanged with the host.

use serde::{Deserialize, Serialize};

use crate::{ParagraphError, Result};

/// Saved paragraph data.
///
/// `text` holds inline markup (after the host's sanitizer only line breaks and
/// inline-tool tags survive). `speakable` is optional and treated as `false`
/// when absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockData {
    #[serde(default)]
    pub text: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speakable: Option<bool>,
}

impl BlockData {
    pub(crate) const FIELDS: &'static [&'static str] = &["text", "speakable"];

    /// Create a record with text only
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            speakable: None,
        }
    }

    /// Create a record with an explicit speakable flag
    pub fn with_speakable(text: impl Into<String>, speakable: bool) -> Self {
        Self {
            text: text.into(),
            speakable: Some(speakable),
        }
    }

    pub fn is_speakable(&self) -> bool {
        self.speakable.unwrap_or(false)
    }

    /// Decode a record from host JSON. `null` yields the empty record.
    pub fn from_json(json: &str) -> Result<Self> {
        let data: Option<Self> = serde_json::from_str(json).map_err(ParagraphError::InvalidData)?;
        Ok(data.unwrap_or_default())
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(ParagraphError::InvalidData)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_null_is_empty_record() {
        let data = BlockData::from_json("null").unwrap();
        assert_eq!(data, BlockData::default());
        assert_eq!(data.text, "");
        assert!(!data.is_speakable());
    }

    #[test]
    fn test_missing_fields_default() {
        let data = BlockData::from_json("{}").unwrap();
        assert_eq!(data, BlockData::default());

        let data = BlockData::from_json(r#"{"speakable": true}"#).unwrap();
        assert_eq!(data.text, "");
        assert_eq!(data.speakable, Some(true));
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let data = BlockData::from_json(r#"{"text": "a", "level": 2}"#).unwrap();
        assert_eq!(data, BlockData::new("a"));
    }

    #[test]
    fn test_absent_speakable_not_serialized() {
        let json = BlockData::new("Hi").to_json().unwrap();
        assert_eq!(json, r#"{"text":"Hi"}"#);

        let json = BlockData::with_speakable("Hi", false).to_json().unwrap();
        assert_eq!(json, r#"{"text":"Hi","speakable":false}"#);
    }

    #[test]
    fn test_malformed_json() {
        let err = BlockData::from_json(r#"{"text": 5}"#).unwrap_err();
        assert!(matches!(err, ParagraphError::InvalidData(_)));
    }
}

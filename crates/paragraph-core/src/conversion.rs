//! Conversion between block types.
//!
//! A block exports one of its fields as a string when the host converts it to
//! another block type, and fills one field when another block is converted
//! into it. Both directions are addressed by field name.

use serde_json::{Map, Value};

use crate::{BlockData, ParagraphError, Result};

/// Field names used for export and import
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionConfig {
    pub export: &'static str,
    pub import: &'static str,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            export: "text",
            import: "text",
        }
    }
}

/// Read the export field of a record as a string
pub fn export(data: &BlockData, config: &ConversionConfig) -> Result<String> {
    let value = serde_json::to_value(data).map_err(ParagraphError::InvalidData)?;
    match value.get(config.export) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Ok(other.to_string()),
        None => Err(ParagraphError::UnknownField(config.export.to_string())),
    }
}

/// Build a record whose import field holds `content`; other fields keep their defaults
pub fn import(content: &str, config: &ConversionConfig) -> Result<BlockData> {
    // Unknown keys are ignored on decode, so reject them up front
    if !BlockData::FIELDS.contains(&config.import) {
        return Err(ParagraphError::UnknownField(config.import.to_string()));
    }

    let mut fields = Map::new();
    fields.insert(config.import.to_string(), Value::String(content.to_string()));

    serde_json::from_value(Value::Object(fields)).map_err(ParagraphError::InvalidData)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_text() {
        let data = BlockData::with_speakable("Hello <b>World</b>", true);
        let exported = export(&data, &ConversionConfig::default()).unwrap();
        assert_eq!(exported, "Hello <b>World</b>");
    }

    #[test]
    fn test_import_text_only() {
        let data = import("from a header", &ConversionConfig::default()).unwrap();
        assert_eq!(data, BlockData::new("from a header"));
    }

    #[test]
    fn test_unknown_export_field() {
        let config = ConversionConfig {
            export: "caption",
            import: "text",
        };
        let err = export(&BlockData::new("x"), &config).unwrap_err();
        assert!(matches!(err, ParagraphError::UnknownField(ref f) if f == "caption"));
    }

    #[test]
    fn test_unknown_import_field() {
        let config = ConversionConfig {
            export: "text",
            import: "caption",
        };
        let err = import("x", &config).unwrap_err();
        assert!(matches!(err, ParagraphError::UnknownField(_)));
    }
}

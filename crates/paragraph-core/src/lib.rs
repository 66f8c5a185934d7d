//! paragraph-core - block data, configuration and conversion
//!
//! This crate holds the DOM-free half of the paragraph block: the record the
//! host persists, the configuration the host passes at construction, and the
//! field-based conversion used when a block is turned into another block type.
//! It is used by the `paragraph` crate, which owns the editable surface.
//!
//! # Example
//!
//! ```rust
//! use paragraph_core::{BlockData, ConversionConfig, conversion};
//!
//! let data = BlockData::from_json(r#"{"text": "Hello", "speakable": true}"#).unwrap();
//! assert!(data.is_speakable());
//!
//! let config = ConversionConfig::default();
//! assert_eq!(conversion::export(&data, &config).unwrap(), "Hello");
//!
//! let imported = conversion::import("Hi", &config).unwrap();
//! assert_eq!(imported.text, "Hi");
//! assert_eq!(imported.speakable, None);
//! ```

mod config;
pub mod conversion;
mod data;

pub use config::ParagraphConfig;
pub use conversion::ConversionConfig;
pub use data::BlockData;

/// Error type for paragraph data handling
#[derive(Debug, thiserror::Error)]
pub enum ParagraphError {
    #[error("Invalid block data: {0}")]
    InvalidData(#[source] serde_json::Error),

    #[error("Invalid paragraph config: {0}")]
    InvalidConfig(#[source] serde_json::Error),

    #[error("Unknown field: {0}")]
    UnknownField(String),
}

pub type Result<T> = std::result::Result<T, ParagraphError>;

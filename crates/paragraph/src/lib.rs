//! # paragraph
//!
//! An editable paragraph block for block-structured rich-text editors.
//!
//! The block owns one editable surface and one settings panel. A host editor
//! constructs it with saved data, mounts the element returned by `render`, and
//! drives it through the [`BlockTool`] lifecycle: save, validate, merge, paste
//! and settings. The record carries inline markup and a `speakable` flag.
//!
//! ## Design
//!
//! There is no browser here. Surfaces are [`Node`] trees behind shared
//! [`LiveElement`] handles, markup is parsed with an HTML5 parser the way
//! `innerHTML` assignments are, and the host reaches the block only through
//! the injected [`HostApi`].
//!
//! ## Example
//!
//! ```rust
//! use std::rc::Rc;
//! use paragraph::{BlockData, BlockTool, DefaultHost, Paragraph, ParagraphOptions, Tune};
//!
//! let options = ParagraphOptions::new(Rc::new(DefaultHost::new()))
//!     .data(BlockData::new("Hello "));
//! let mut block = Paragraph::new(options);
//! let element = block.render();
//!
//! block.merge(&BlockData::new("World"));
//! block.toggle_tune(Tune::Speakable);
//!
//! let saved = block.save(&element);
//! assert_eq!(saved.text, "Hello World");
//! assert!(saved.is_speakable());
//! assert!(block.validate(&saved));
//! ```

mod block;
pub mod events;
pub mod host;
pub mod html;
pub mod live;
pub mod node;
pub mod paste;
pub mod sanitize;
mod tool;
mod utilities;

pub use block::{is_tune_active, Paragraph, ParagraphOptions, Tune};
pub use events::{KeyCode, KeyboardEvent};
pub use host::{DefaultHost, HostApi, Styles};
pub use html::{parse_fragment, parse_html};
pub use live::LiveElement;
pub use node::{Node, NodeType};
pub use paste::{PasteConfig, PasteEvent};
pub use sanitize::{FieldSanitizers, Filter, SanitizeConfig, Sanitizer, TagRule};
pub use tool::{BlockTool, Toolbox};
pub use utilities::*;

pub use paragraph_core::{
    conversion, BlockData, ConversionConfig, ParagraphConfig, ParagraphError, Result,
};

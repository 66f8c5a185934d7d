//! Capabilities the hosting editor injects into a block.

use indexmap::IndexMap;

use crate::node::Node;

/// Style tokens provided by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Styles {
    /// Base class every block surface carries
    pub block: String,
    /// Class identifying paragraph surfaces
    pub wrapper: String,
    pub settings_wrapper: String,
    pub settings_button: String,
    pub settings_button_active: String,
    pub settings_button_focused: String,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            block: "cdx-block".to_string(),
            wrapper: "ce-paragraph".to_string(),
            settings_wrapper: "cdx-settings".to_string(),
            settings_button: "cdx-settings-button".to_string(),
            settings_button_active: "cdx-settings-button--active".to_string(),
            settings_button_focused: "cdx-settings-button--focused".to_string(),
        }
    }
}

/// Host API surface handed to a block at construction.
///
/// Blocks only reach host state through this object, never through globals.
pub trait HostApi {
    /// Style tokens for block and settings presentation
    fn styles(&self) -> &Styles;

    /// Translate a UI string. Returns the input when no translation exists.
    fn translate(&self, text: &str) -> String {
        text.to_string()
    }

    /// Presentation hook for settings buttons (tooltips and the like)
    fn decorate_settings_button(&self, button: &mut Node, title: &str) {
        button.set_attr("title", title);
    }
}

/// Dictionary-backed host API
#[derive(Debug, Clone, Default)]
pub struct DefaultHost {
    styles: Styles,
    translations: IndexMap<String, String>,
}

impl DefaultHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_styles(styles: Styles) -> Self {
        Self {
            styles,
            translations: IndexMap::new(),
        }
    }

    /// Register a translation
    pub fn translation(mut self, source: &str, translated: &str) -> Self {
        self.translations
            .insert(source.to_string(), translated.to_string());
        self
    }
}

impl HostApi for DefaultHost {
    fn styles(&self) -> &Styles {
        &self.styles
    }

    fn translate(&self, text: &str) -> String {
        self.translations
            .get(text)
            .cloned()
            .unwrap_or_else(|| text.to_string())
    }
}

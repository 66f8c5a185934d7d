//! The paragraph block.
//!
//! The editable surface is the source of truth while the user types; the
//! record is refreshed from it only when read through [`Paragraph::sync_data`].
//! [`Paragraph::set_data`] is the only path that writes markup into the surface.

mod settings;
mod view;

pub use settings::{is_tune_active, Tune};

use std::fmt;
use std::rc::Rc;

use paragraph_core::{BlockData, ConversionConfig, ParagraphConfig};
use tracing::debug;

use crate::host::HostApi;
use crate::live::LiveElement;
use crate::paste::{PasteConfig, PasteEvent};
use crate::sanitize::{FieldSanitizers, SanitizeConfig, TagRule};
use crate::tool::{BlockTool, Toolbox};
use crate::utilities::is_blank;

use settings::SettingsPanel;

const TOOLBOX_ICON: &str = r#"<svg width="20" height="20" viewBox="0 0 24 24"><path d="M8 9V7.2C8 7.09 8.09 7 8.2 7h7.6c.11 0 .2.09.2.2V9M12 7v10m-2 0h4"/></svg>"#;

/// Construction inputs for a [`Paragraph`]
pub struct ParagraphOptions {
    /// Previously saved record, if any
    pub data: Option<BlockData>,
    pub config: ParagraphConfig,
    pub api: Rc<dyn HostApi>,
    pub read_only: bool,
}

impl ParagraphOptions {
    pub fn new(api: Rc<dyn HostApi>) -> Self {
        Self {
            data: None,
            config: ParagraphConfig::default(),
            api,
            read_only: false,
        }
    }

    pub fn data(mut self, data: BlockData) -> Self {
        self.data = Some(data);
        self
    }

    pub fn config(mut self, config: ParagraphConfig) -> Self {
        self.config = config;
        self
    }

    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }
}

/// A paragraph of inline markup with a speakable tune
pub struct Paragraph {
    api: Rc<dyn HostApi>,
    preserve_blank: bool,
    read_only: bool,
    data: BlockData,
    element: LiveElement,
    settings: Option<SettingsPanel>,
}

impl Paragraph {
    pub fn new(options: ParagraphOptions) -> Self {
        let ParagraphOptions {
            data,
            config,
            api,
            read_only,
        } = options;

        let element = view::draw_view(&*api, &config.placeholder, read_only);

        let mut paragraph = Self {
            api,
            preserve_blank: config.preserve_blank,
            read_only,
            data: BlockData::default(),
            element,
            settings: None,
        };
        paragraph.set_data(data);
        paragraph
    }

    /// Read the surface markup into the record and return a copy of it
    pub fn sync_data(&mut self) -> BlockData {
        self.data.text = self.element.inner_html();
        self.data.clone()
    }

    /// Replace the record and write its text into the surface.
    /// `None` is treated as the empty record.
    pub fn set_data(&mut self, data: Option<BlockData>) {
        self.data = data.unwrap_or_default();
        self.element.set_inner_html(&self.data.text);
        debug!(
            text_len = self.data.text.len(),
            speakable = ?self.data.speakable,
            "paragraph data set"
        );
    }

    /// Flip a tune, store it in the record and repaint its settings button.
    /// Returns the new value.
    pub fn toggle_tune(&mut self, tune: Tune) -> bool {
        let current = self.sync_data();
        let enabled = !tune.is_enabled(&current);
        self.set_data(Some(tune.apply(current, enabled)));

        if let Some(panel) = &self.settings {
            panel.set_active(&*self.api, tune, enabled);
        }
        debug!(tune = tune.name(), enabled, "paragraph tune toggled");
        enabled
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }
}

impl BlockTool for Paragraph {
    type Data = BlockData;

    fn render(&mut self) -> LiveElement {
        debug!(read_only = self.read_only, "rendering paragraph");
        self.element.clone()
    }

    fn save(&mut self, block_content: &LiveElement) -> BlockData {
        let speakable = self.sync_data().speakable;
        BlockData {
            text: block_content.inner_html(),
            speakable,
        }
    }

    fn validate(&self, saved: &BlockData) -> bool {
        if is_blank(&saved.text) && !self.preserve_blank {
            debug!("rejecting blank paragraph");
            return false;
        }
        true
    }

    fn merge(&mut self, data: &BlockData) {
        let current = self.sync_data();
        let merged = BlockData {
            text: current.text + &data.text,
            speakable: current.speakable,
        };
        debug!(appended_len = data.text.len(), "merging paragraph");
        self.set_data(Some(merged));
    }

    fn on_paste(&mut self, event: &PasteEvent) {
        debug!(tag = event.data.tag_name(), "paragraph paste");
        self.set_data(Some(BlockData::new(event.data.inner_html())));
    }

    fn render_settings(&mut self) -> LiveElement {
        let panel = SettingsPanel::render(&*self.api, &self.data);
        let element = panel.element().clone();
        self.settings = Some(panel);
        element
    }

    fn toolbox() -> Option<Toolbox> {
        Some(Toolbox {
            icon: TOOLBOX_ICON,
            title: "Text",
        })
    }

    fn conversion_config() -> Option<ConversionConfig> {
        Some(ConversionConfig {
            export: "text",
            import: "text",
        })
    }

    fn sanitize() -> FieldSanitizers {
        let mut text = SanitizeConfig::new();
        text.insert("br".to_string(), TagRule::Bare);

        let mut fields = FieldSanitizers::new();
        fields.insert("text", text);
        fields
    }

    fn paste_config() -> Option<PasteConfig> {
        Some(PasteConfig::new(&["P"]))
    }

    fn is_read_only_supported() -> bool {
        true
    }
}

impl fmt::Debug for Paragraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Paragraph")
            .field("preserve_blank", &self.preserve_blank)
            .field("read_only", &self.read_only)
            .field("data", &self.data)
            .field("element", &self.element)
            .finish_non_exhaustive()
    }
}

//! The lifecycle contract between a block and its host.

use paragraph_core::ConversionConfig;

use crate::live::LiveElement;
use crate::paste::{PasteConfig, PasteEvent};
use crate::sanitize::FieldSanitizers;

/// Toolbox presentation of a block type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toolbox {
    /// SVG markup
    pub icon: &'static str,
    pub title: &'static str,
}

/// Operations a host drives a block through.
///
/// The host constructs the block, mounts the element returned by
/// [`render`](BlockTool::render) and then calls the remaining operations in
/// any order, one at a time.
pub trait BlockTool {
    /// Record persisted by the host
    type Data;

    /// Return the element the host inserts into its document
    fn render(&mut self) -> LiveElement;

    /// Extract the record from the rendered element
    fn save(&mut self, block_content: &LiveElement) -> Self::Data;

    /// Decide whether a saved record is kept. Invalid blocks are dropped.
    fn validate(&self, _saved: &Self::Data) -> bool {
        true
    }

    /// Absorb the record of the following block
    fn merge(&mut self, data: &Self::Data);

    /// Replace content with a matched paste
    fn on_paste(&mut self, event: &PasteEvent);

    /// Return the block's settings panel
    fn render_settings(&mut self) -> LiveElement;

    fn toolbox() -> Option<Toolbox>
    where
        Self: Sized,
    {
        None
    }

    fn conversion_config() -> Option<ConversionConfig>
    where
        Self: Sized,
    {
        None
    }

    fn sanitize() -> FieldSanitizers
    where
        Self: Sized,
    {
        FieldSanitizers::new()
    }

    fn paste_config() -> Option<PasteConfig>
    where
        Self: Sized,
    {
        None
    }

    fn is_read_only_supported() -> bool
    where
        Self: Sized,
    {
        false
    }
}

//! Block tunes shown in the settings panel.

use paragraph_core::BlockData;

use crate::host::HostApi;
use crate::html::parse_fragment;
use crate::live::LiveElement;
use crate::node::Node;

const SPEAKABLE_ICON: &str = r#"<svg width="16" height="16" viewBox="0 0 24 24"><path d="M3 9v6h4l5 5V4L7 9H3z"/></svg>"#;

/// A boolean setting of the paragraph record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tune {
    /// Flag the block for text-to-speech
    Speakable,
}

impl Tune {
    /// Tunes in panel order
    pub const ALL: [Tune; 1] = [Tune::Speakable];

    pub fn name(self) -> &'static str {
        match self {
            Tune::Speakable => "speakable",
        }
    }

    /// Untranslated title
    pub fn title(self) -> &'static str {
        match self {
            Tune::Speakable => "Speakable",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Tune::Speakable => SPEAKABLE_ICON,
        }
    }

    /// Current value of this tune in a record
    pub fn is_enabled(self, data: &BlockData) -> bool {
        match self {
            Tune::Speakable => data.is_speakable(),
        }
    }

    /// Return `data` with this tune set to `enabled`, other fields untouched
    pub fn apply(self, data: BlockData, enabled: bool) -> BlockData {
        match self {
            Tune::Speakable => BlockData {
                speakable: Some(enabled),
                ..data
            },
        }
    }

    fn position(self) -> usize {
        Self::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }
}

/// The rendered settings panel: a wrapper holding one button per tune
#[derive(Debug, Clone)]
pub(crate) struct SettingsPanel {
    element: LiveElement,
}

impl SettingsPanel {
    pub(crate) fn render(api: &dyn HostApi, data: &BlockData) -> Self {
        let styles = api.styles();
        let mut wrapper = Node::element("div");
        wrapper.add_class(&[styles.settings_wrapper.as_str()]);

        for tune in Tune::ALL {
            let mut button = Node::element("span");
            button.add_class(&[styles.settings_button.as_str()]);
            button.set_attr("data-tune", tune.name());
            button.set_children(parse_fragment(tune.icon()));
            api.decorate_settings_button(&mut button, &api.translate(tune.title()));
            paint(api, &mut button, tune.is_enabled(data));
            wrapper.add_child(button);
        }

        Self {
            element: LiveElement::new(wrapper),
        }
    }

    pub(crate) fn element(&self) -> &LiveElement {
        &self.element
    }

    /// Bring a tune's button in line with its value
    pub(crate) fn set_active(&self, api: &dyn HostApi, tune: Tune, enabled: bool) {
        self.element.with_node_mut(|wrapper| {
            let button = wrapper
                .children_mut()
                .and_then(|buttons| buttons.get_mut(tune.position()));
            if let Some(button) = button {
                paint(api, button, enabled);
            }
        });
    }
}

fn paint(api: &dyn HostApi, button: &mut Node, enabled: bool) {
    let styles = api.styles();
    button.toggle_class(&styles.settings_button_active, enabled);
    button.toggle_class(&styles.settings_button_focused, enabled);
}

/// Whether the button for `tune` in a rendered settings panel is shown active
pub fn is_tune_active(panel: &LiveElement, api: &dyn HostApi, tune: Tune) -> bool {
    panel
        .snapshot()
        .element_children()
        .find(|button| button.attr("data-tune") == Some(tune.name()))
        .is_some_and(|button| button.has_class(&api.styles().settings_button_active))
}

//! The editable surface and its empty-state normalization.

use tracing::trace;

use crate::events::KeyboardEvent;
use crate::host::HostApi;
use crate::live::LiveElement;
use crate::node::Node;

/// Build the paragraph surface. Read-only surfaces get no listeners.
pub(crate) fn draw_view(api: &dyn HostApi, placeholder: &str, read_only: bool) -> LiveElement {
    let styles = api.styles();
    let mut div = Node::element("div");
    div.add_class(&[styles.wrapper.as_str(), styles.block.as_str()]);
    div.set_attr("contenteditable", if read_only { "false" } else { "true" });
    div.set_attr("data-placeholder", &api.translate(placeholder));

    let element = LiveElement::new(div);
    if !read_only {
        element.on_key_up(normalize_emptied_surface);
    }
    element
}

/// Clear leftover markup once deleting has removed all text.
///
/// Some browsers leave a lone `<br>` behind in an emptied contenteditable,
/// which would otherwise save as a non-empty paragraph.
pub(crate) fn normalize_emptied_surface(surface: &mut Node, event: &KeyboardEvent) {
    if !event.code.is_deletion() {
        return;
    }

    if surface.text_content().is_empty() {
        trace!(leftover = %surface.inner_html(), "clearing emptied paragraph surface");
        surface.set_children(Vec::new());
    }
}

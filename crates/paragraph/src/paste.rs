//! Paste matching and paste events.

use crate::html::parse_fragment;
use crate::node::Node;

/// Tags a block accepts from host-detected paste
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasteConfig {
    pub tags: Vec<&'static str>,
}

impl PasteConfig {
    pub fn new(tags: &[&'static str]) -> Self {
        Self {
            tags: tags.to_vec(),
        }
    }

    /// Check if an element's tag is accepted (case-insensitive)
    pub fn matches(&self, node: &Node) -> bool {
        node.is_element()
            && self
                .tags
                .iter()
                .any(|tag| tag.eq_ignore_ascii_case(node.tag_name()))
    }
}

/// A paste the host matched against a block's [`PasteConfig`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasteEvent {
    /// The matched source element
    pub data: Node,
}

impl PasteEvent {
    pub fn new(data: Node) -> Self {
        Self { data }
    }

    /// Parse pasted markup and pick the first element accepted by `config`,
    /// searching depth-first.
    pub fn from_html(html: &str, config: &PasteConfig) -> Option<Self> {
        parse_fragment(html)
            .iter()
            .find_map(|node| find_match(node, config))
            .map(Self::new)
    }
}

fn find_match(node: &Node, config: &PasteConfig) -> Option<Node> {
    if config.matches(node) {
        return Some(node.clone());
    }
    node.children().find_map(|child| find_match(child, config))
}

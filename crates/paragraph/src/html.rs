//! HTML fragment parsing.
//!
//! Markup written into an editable surface is parsed the way a browser parses
//! `innerHTML` assignments: as a fragment in body context. The result is
//! converted to the [`Node`] structure used everywhere else in this crate.

use scraper::{ElementRef, Html, Node as ScraperNode};

use crate::node::Node;

/// Parse a markup string into a list of top-level nodes.
///
/// Comments, doctypes and processing instructions are dropped.
///
/// # Example
///
/// ```rust
/// use paragraph::parse_fragment;
///
/// let nodes = parse_fragment("Hello <b>World</b>");
/// assert_eq!(nodes.len(), 2);
/// assert_eq!(nodes[1].tag_name(), "b");
/// ```
pub fn parse_fragment(html: &str) -> Vec<Node> {
    if html.is_empty() {
        return Vec::new();
    }
    let document = Html::parse_fragment(html);
    convert_children(document.root_element())
}

/// Parse a markup string into a single container node holding the fragment
pub fn parse_html(html: &str) -> Node {
    let mut container = Node::element("template");
    container.set_children(parse_fragment(html));
    container
}

/// Convert a scraper ElementRef to our Node structure
fn scraper_to_node(element: ElementRef<'_>) -> Node {
    let mut node = Node::element(element.value().name());
    for (name, value) in element.value().attrs() {
        node.set_attr(name, value);
    }
    node.set_children(convert_children(element));
    node
}

fn convert_children(element: ElementRef<'_>) -> Vec<Node> {
    let mut nodes = Vec::new();
    for child in element.children() {
        match child.value() {
            ScraperNode::Text(text) => nodes.push(Node::text(&text.text)),
            ScraperNode::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    nodes.push(scraper_to_node(child_element));
                }
            }
            _ => {}
        }
    }
    nodes
}

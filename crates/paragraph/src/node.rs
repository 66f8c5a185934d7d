//! Lightweight DOM node tree for editable surfaces.
//!
//! Elements keep a lowercase tag name, insertion-ordered attributes and their
//! children. Serialization follows what a browser produces for `innerHTML`,
//! so markup read back from a surface looks the way a host expects it to.

use indexmap::IndexMap;
use smallvec::SmallVec;

use crate::utilities::{escape_attr, escape_text, is_raw_text, is_void};

/// Node types matching DOM nodeType values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
    /// Element node (nodeType = 1)
    Element = 1,
    /// Text node (nodeType = 3)
    Text = 3,
}

/// An element node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attributes: IndexMap<String, String>,
    children: Vec<Node>,
}

/// A DOM node: an element or a run of text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    /// Create a new element node
    pub fn element(tag_name: &str) -> Self {
        Node::Element(Element {
            tag: tag_name.to_lowercase(),
            attributes: IndexMap::new(),
            children: Vec::new(),
        })
    }

    /// Create a new element node with attributes
    pub fn element_with_attrs(tag_name: &str, attrs: Vec<(&str, &str)>) -> Self {
        let mut node = Self::element(tag_name);
        for (name, value) in attrs {
            node.set_attr(name, value);
        }
        node
    }

    /// Create a new text node
    pub fn text(content: &str) -> Self {
        Node::Text(content.to_string())
    }

    pub fn node_type(&self) -> NodeType {
        match self {
            Node::Element(_) => NodeType::Element,
            Node::Text(_) => NodeType::Text,
        }
    }

    /// Check if this is an element node
    pub fn is_element(&self) -> bool {
        matches!(self, Node::Element(_))
    }

    /// Check if this is a text node
    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }

    /// Get the tag name (lowercase); empty for text nodes
    pub fn tag_name(&self) -> &str {
        match self {
            Node::Element(el) => &el.tag,
            Node::Text(_) => "",
        }
    }

    /// Get an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        match self {
            Node::Element(el) => el
                .attributes
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(name))
                .map(|(_, value)| value.as_str()),
            Node::Text(_) => None,
        }
    }

    /// Check if an attribute exists
    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }

    /// Iterate attributes in insertion order
    pub fn attrs(&self) -> impl Iterator<Item = (&str, &str)> {
        let attrs = match self {
            Node::Element(el) => Some(&el.attributes),
            Node::Text(_) => None,
        };
        attrs
            .into_iter()
            .flat_map(|a| a.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }

    /// Set an attribute. Names match case-insensitively; the first spelling
    /// wins (parsers hand us `viewBox` and friends in their proper case).
    /// No-op on text nodes.
    pub fn set_attr(&mut self, name: &str, value: &str) {
        if let Node::Element(el) = self {
            match el.attributes.iter_mut().find(|(key, _)| key.eq_ignore_ascii_case(name)) {
                Some((_, existing)) => *existing = value.to_string(),
                None => {
                    el.attributes.insert(name.to_string(), value.to_string());
                }
            }
        }
    }

    /// Remove an attribute, returning its previous value
    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        let Node::Element(el) = self else {
            return None;
        };
        let index = el
            .attributes
            .keys()
            .position(|key| key.eq_ignore_ascii_case(name))?;
        el.attributes.shift_remove_index(index).map(|(_, value)| value)
    }

    /// Get all child nodes
    pub fn children(&self) -> impl Iterator<Item = &Node> {
        let children: &[Node] = match self {
            Node::Element(el) => &el.children,
            Node::Text(_) => &[],
        };
        children.iter()
    }

    /// Get only element children
    pub fn element_children(&self) -> impl Iterator<Item = &Node> {
        self.children().filter(|n| n.is_element())
    }

    /// Mutable access to an element's children
    pub fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Node::Element(el) => Some(&mut el.children),
            Node::Text(_) => None,
        }
    }

    /// Add a child node. Text nodes cannot have children, so this is a no-op there.
    pub fn add_child(&mut self, child: Node) {
        if let Some(children) = self.children_mut() {
            children.push(child);
        }
    }

    /// Replace all children
    pub fn set_children(&mut self, nodes: Vec<Node>) {
        if let Some(children) = self.children_mut() {
            *children = nodes;
        }
    }

    /// Get all text content from this node and descendants
    pub fn text_content(&self) -> String {
        match self {
            Node::Text(text) => text.clone(),
            Node::Element(_) => self.children().map(Node::text_content).collect(),
        }
    }

    /// Serialize this node including its own tag
    pub fn outer_html(&self) -> String {
        match self {
            Node::Text(text) => escape_text(text),
            Node::Element(el) => {
                let mut html = format!("<{}", el.tag);
                for (name, value) in &el.attributes {
                    html.push_str(&format!(" {}=\"{}\"", name, escape_attr(value)));
                }
                html.push('>');

                if !is_void(&el.tag) {
                    html.push_str(&self.inner_html());
                    html.push_str(&format!("</{}>", el.tag));
                }
                html
            }
        }
    }

    /// Serialize the children of this node
    pub fn inner_html(&self) -> String {
        if is_raw_text(self.tag_name()) {
            return self
                .children()
                .map(|child| match child {
                    Node::Text(text) => text.clone(),
                    Node::Element(_) => child.outer_html(),
                })
                .collect();
        }
        self.children().map(Node::outer_html).collect()
    }

    /// Class names from the `class` attribute
    pub fn classes(&self) -> SmallVec<[&str; 4]> {
        self.attr("class")
            .map(|c| c.split_whitespace().collect())
            .unwrap_or_default()
    }

    pub fn has_class(&self, name: &str) -> bool {
        self.classes().contains(&name)
    }

    /// Add class names, skipping empty tokens and duplicates
    pub fn add_class(&mut self, names: &[&str]) {
        let mut classes: SmallVec<[String; 4]> =
            self.classes().iter().map(|c| c.to_string()).collect();
        for name in names.iter().filter(|n| !n.is_empty()) {
            if !classes.iter().any(|c| c == name) {
                classes.push(name.to_string());
            }
        }
        self.set_attr("class", &classes.join(" "));
    }

    pub fn remove_class(&mut self, name: &str) {
        if !self.has_class(name) {
            return;
        }
        let remaining: SmallVec<[String; 4]> = self
            .classes()
            .into_iter()
            .filter(|c| *c != name)
            .map(str::to_string)
            .collect();
        let joined = remaining.join(" ");
        self.set_attr("class", &joined);
    }

    /// Add the class when `force` is true, remove it otherwise
    pub fn toggle_class(&mut self, name: &str, force: bool) {
        if force {
            self.add_class(&[name]);
        } else {
            self.remove_class(name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_element() {
        let node = Node::element("DIV");
        assert!(node.is_element());
        assert_eq!(node.tag_name(), "div");
        assert_eq!(node.node_type(), NodeType::Element);
    }

    #[test]
    fn test_create_text() {
        let node = Node::text("Hello World");
        assert!(node.is_text());
        assert_eq!(node.text_content(), "Hello World");
        assert_eq!(node.children().count(), 0);
    }

    #[test]
    fn test_attributes() {
        let mut node = Node::element_with_attrs("a", vec![("href", "https://example.com")]);
        assert_eq!(node.attr("HREF"), Some("https://example.com"));
        node.set_attr("HREF", "https://example.com/");
        assert_eq!(node.outer_html(), "<a href=\"https://example.com/\"></a>");

        assert_eq!(node.attr("title"), None);

        node.set_attr("href", "https://other.example");
        assert_eq!(node.attrs().count(), 1);
        assert_eq!(node.remove_attr("href").as_deref(), Some("https://other.example"));
        assert!(!node.has_attr("href"));
    }

    #[test]
    fn test_text_content() {
        let mut div = Node::element("div");
        div.add_child(Node::text("Hello "));
        let mut b = Node::element("b");
        b.add_child(Node::text("World"));
        div.add_child(b);
        div.add_child(Node::element("br"));

        assert_eq!(div.text_content(), "Hello World");
    }

    #[test]
    fn test_inner_html_escapes_text() {
        let mut div = Node::element("div");
        div.add_child(Node::text("a < b & c"));
        assert_eq!(div.inner_html(), "a &lt; b &amp; c");
    }

    #[test]
    fn test_raw_text_is_not_escaped() {
        let mut style = Node::element("style");
        style.add_child(Node::text("a>b && c<d"));
        assert_eq!(style.outer_html(), "<style>a>b && c<d</style>");

        let mut div = Node::element("div");
        div.add_child(style);
        div.add_child(Node::text("a>b"));
        assert_eq!(div.inner_html(), "<style>a>b && c<d</style>a&gt;b");
    }

    #[test]
    fn test_remove_last_class() {
        let mut span = Node::element_with_attrs("span", vec![("class", "only")]);
        span.remove_class("only");
        assert!(!span.has_class("only"));
        assert_eq!(span.classes().len(), 0);
    }

    #[test]
    fn test_void_element_html() {
        assert_eq!(Node::element("br").outer_html(), "<br>");

        let img = Node::element_with_attrs("img", vec![("src", "test.png"), ("alt", "")]);
        assert_eq!(img.outer_html(), "<img src=\"test.png\" alt=\"\">");
    }

    #[test]
    fn test_class_list() {
        let mut div = Node::element("div");
        div.add_class(&["ce-paragraph", "cdx-block", "", "cdx-block"]);
        assert_eq!(div.attr("class"), Some("ce-paragraph cdx-block"));
        assert!(div.has_class("cdx-block"));

        div.toggle_class("active", true);
        div.toggle_class("active", true);
        assert_eq!(div.classes().len(), 3);

        div.toggle_class("active", false);
        assert!(!div.has_class("active"));
        assert_eq!(div.attr("class"), Some("ce-paragraph cdx-block"));
    }
}

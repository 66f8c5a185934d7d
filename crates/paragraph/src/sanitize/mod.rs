//! Host-side sanitizing of block markup.
//!
//! A block declares which tags may survive in each of its fields; inline tools
//! add their own tags. The [`Sanitizer`] applies such an allow-list: allowed
//! tags keep only their permitted attributes, removed elements vanish with
//! their content, and every other element is unwrapped so its text survives.

mod rule;

pub use rule::{Filter, TagRule};

use indexmap::IndexMap;

use crate::html::parse_fragment;
use crate::node::Node;
use crate::utilities::UNSAFE_ELEMENTS;

/// Allow-list of tags for one field
pub type SanitizeConfig = IndexMap<String, TagRule>;

/// Sanitize declarations keyed by field name
pub type FieldSanitizers = IndexMap<&'static str, SanitizeConfig>;

/// Markup scrubber built from sanitize declarations
#[derive(Debug)]
pub struct Sanitizer {
    /// Allowed tags, in declaration order
    allowed: SanitizeConfig,
    /// Elements removed together with their content
    remove_rules: Vec<Filter>,
}

impl Sanitizer {
    /// Create a sanitizer that allows nothing and drops unsafe elements
    pub fn new() -> Self {
        Self {
            allowed: IndexMap::new(),
            remove_rules: vec![Filter::tags(UNSAFE_ELEMENTS)],
        }
    }

    /// Create a sanitizer from a field's declaration
    pub fn from_config(config: &SanitizeConfig) -> Self {
        let mut sanitizer = Self::new();
        sanitizer.extend(config);
        sanitizer
    }

    /// Allow a tag without attributes
    pub fn allow(&mut self, tag: &str) -> &mut Self {
        self.allowed.insert(tag.to_lowercase(), TagRule::Bare);
        self
    }

    /// Allow a tag with the listed attributes
    pub fn allow_with_attrs(&mut self, tag: &str, attrs: &[&str]) -> &mut Self {
        self.allowed
            .insert(tag.to_lowercase(), TagRule::attributes(attrs));
        self
    }

    /// Merge another declaration, e.g. one contributed by an inline tool
    pub fn extend(&mut self, config: &SanitizeConfig) -> &mut Self {
        for (tag, rule) in config {
            self.allowed.insert(tag.to_lowercase(), rule.clone());
        }
        self
    }

    /// Remove elements matching the filter, content included
    pub fn remove(&mut self, filter: Filter) -> &mut Self {
        self.remove_rules.push(filter);
        self
    }

    pub fn is_allowed(&self, tag: &str) -> bool {
        self.allowed.contains_key(&tag.to_lowercase())
    }

    /// Scrub markup down to the allow-list
    pub fn clean(&self, html: &str) -> String {
        let mut cleaned = Vec::new();
        for node in parse_fragment(html) {
            self.clean_node(node, &mut cleaned);
        }
        cleaned.iter().map(Node::outer_html).collect()
    }

    fn clean_node(&self, node: Node, out: &mut Vec<Node>) {
        if node.is_text() {
            out.push(node);
            return;
        }

        if self.should_remove(&node) {
            return;
        }

        let mut children = Vec::new();
        for child in node.children().cloned() {
            self.clean_node(child, &mut children);
        }

        match self.allowed.get(node.tag_name()) {
            Some(rule) => {
                let mut kept = Node::element(node.tag_name());
                for (name, value) in node.attrs().filter(|(name, _)| rule.permits(name)) {
                    kept.set_attr(name, value);
                }
                kept.set_children(children);
                out.push(kept);
            }
            // Unwrap: keep what's inside, drop the tag itself
            None => out.extend(children),
        }
    }

    fn should_remove(&self, node: &Node) -> bool {
        if self.is_allowed(node.tag_name()) {
            return false;
        }
        self.remove_rules.iter().any(|filter| filter.matches(node))
    }
}

impl Default for Sanitizer {
    fn default() -> Self {
        Self::new()
    }
}

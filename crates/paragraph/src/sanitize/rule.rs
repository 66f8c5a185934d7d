//! Filter and tag rule types for sanitizing markup.

use crate::node::Node;

/// A filter determines which elements a rule applies to
pub enum Filter {
    /// Match a single tag name
    TagName(String),
    /// Match any of multiple tag names
    TagNames(Vec<String>),
    /// Match using a predicate function
    Predicate(Box<dyn Fn(&str, &Node) -> bool>),
}

impl Filter {
    /// Create a filter for a single tag
    pub fn tag(name: &str) -> Self {
        Filter::TagName(name.to_lowercase())
    }

    /// Create a filter for multiple tags
    pub fn tags(names: &[&str]) -> Self {
        Filter::TagNames(names.iter().map(|s| s.to_lowercase()).collect())
    }

    /// Create a filter with a predicate
    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn(&str, &Node) -> bool + 'static,
    {
        Filter::Predicate(Box::new(f))
    }

    /// Check if this filter matches an element
    pub fn matches(&self, node: &Node) -> bool {
        let tag = node.tag_name();
        match self {
            Filter::TagName(t) => tag == t,
            Filter::TagNames(tags) => tags.iter().any(|t| t == tag),
            Filter::Predicate(f) => f(tag, node),
        }
    }
}

impl std::fmt::Debug for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Filter::TagName(t) => f.debug_tuple("TagName").field(t).finish(),
            Filter::TagNames(t) => f.debug_tuple("TagNames").field(t).finish(),
            Filter::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

/// What survives of an allowed tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagRule {
    /// Keep the tag, strip every attribute
    Bare,
    /// Keep the tag and only the listed attributes
    Attributes(Vec<String>),
}

impl TagRule {
    pub fn attributes(names: &[&str]) -> Self {
        TagRule::Attributes(names.iter().map(|s| s.to_lowercase()).collect())
    }

    /// Check if an attribute survives this rule
    pub fn permits(&self, attr: &str) -> bool {
        match self {
            TagRule::Bare => false,
            TagRule::Attributes(names) => names.iter().any(|n| n.eq_ignore_ascii_case(attr)),
        }
    }
}

//! Caddyfile document tree
//!
//! The tree is made of two types:
//! - [`Directive`]: a name, a discriminator, arguments, a sort priority and
//!   its own [`Block`] of children
//! - [`Block`]: an ordered list of directives it exclusively owns

use regex::Regex;
use std::sync::LazyLock;
use std::sync::atomic::{AtomicU64, Ordering};

/// Order of a directive that was never given an explicit priority.
///
/// Sorts after every explicitly ordered sibling.
pub const UNORDERED: i32 = i32::MAX;

static SNIPPET_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\(.*\)$").expect("static pattern"));

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of a directive, used for removal by node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DirectiveId(u64);

impl DirectiveId {
    fn next() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// A named Caddyfile statement
#[derive(Debug)]
pub struct Directive {
    id: DirectiveId,

    /// Directive name (e.g. "reverse_proxy", "tls", "handle")
    pub name: String,

    /// Secondary lookup key for directives sharing a name
    pub discriminator: String,

    /// Arguments following the name, written verbatim
    pub args: Vec<String>,

    /// Sort priority among siblings, [`UNORDERED`] when unset
    pub order: i32,

    /// Nested directives
    pub block: Block,
}

impl Directive {
    pub fn new(name: impl Into<String>, discriminator: impl Into<String>) -> Self {
        Self {
            id: DirectiveId::next(),
            name: name.into(),
            discriminator: discriminator.into(),
            args: Vec::new(),
            order: UNORDERED,
            block: Block::new(),
        }
    }

    pub fn id(&self) -> DirectiveId {
        self.id
    }

    /// Append one or more arguments in the given order
    pub fn add_args<I, S>(&mut self, args: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_args(args);
        self
    }

    pub fn set_order(&mut self, order: i32) -> &mut Self {
        self.order = order;
        self
    }

    pub fn with_order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }

    pub fn is_ordered(&self) -> bool {
        self.order != UNORDERED
    }

    /// A directive without arguments. Only sorted first at the top level.
    pub fn is_global(&self) -> bool {
        self.args.is_empty()
    }

    /// Whether the name has the `(name)` form of a snippet definition.
    pub fn is_snippet(&self) -> bool {
        SNIPPET_PATTERN.is_match(&self.name)
    }

    pub fn has_children(&self) -> bool {
        !self.block.children.is_empty()
    }
}

/// Ordered collection of directives
#[derive(Debug, Default)]
pub struct Block {
    pub children: Vec<Directive>,
}

impl Block {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Directive> {
        self.children.iter()
    }
}

impl<'a> IntoIterator for &'a Block {
    type Item = &'a Directive;
    type IntoIter = std::slice::Iter<'a, Directive>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_directive_defaults() {
        let directive = Directive::new("reverse_proxy", "api");
        assert_eq!(directive.name, "reverse_proxy");
        assert_eq!(directive.discriminator, "api");
        assert!(directive.args.is_empty());
        assert_eq!(directive.order, UNORDERED);
        assert!(!directive.is_ordered());
        assert!(directive.block.is_empty());
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Directive::new("tls", "");
        let b = Directive::new("tls", "");
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_add_args_keeps_order_and_duplicates() {
        let mut directive = Directive::new("header", "");
        directive.add_args(["-Server"]).add_args(["X-A", "X-A"]);
        assert_eq!(directive.args, vec!["-Server", "X-A", "X-A"]);
    }

    #[test]
    fn test_global_is_argument_count() {
        let directive = Directive::new("email", "");
        assert!(directive.is_global());
        assert!(!directive.with_args(["ops@example.com"]).is_global());
    }

    #[test]
    fn test_snippet_detection() {
        assert!(Directive::new("(common)", "").is_snippet());
        assert!(Directive::new("()", "").is_snippet());
        assert!(!Directive::new("import", "").is_snippet());
        assert!(!Directive::new("(common", "").is_snippet());
        assert!(!Directive::new("x(common)", "").is_snippet());
    }
}

//! Declarative description of a Caddyfile tree
//!
//! A [`Document`] is replayed onto a [`Block`] through the mutation API.
//! Entries sharing a `(name, discriminator)` key merge into one directive
//! unless `append` is set.

use caddygen_core::{Block, Children, Directive, UNORDERED};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A whole Caddyfile
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub directives: Vec<DirectiveSpec>,
}

/// One directive and its nested block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DirectiveSpec {
    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub discriminator: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,

    /// Always add a new directive instead of merging into an existing one
    #[serde(default, skip_serializing_if = "is_false")]
    pub append: bool,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<DirectiveSpec>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl Document {
    /// Assemble a fresh tree
    pub fn build(&self) -> Block {
        let mut root = Block::new();
        self.apply(&mut root);
        root
    }

    /// Replay the document onto an existing node
    pub fn apply<C: Children + ?Sized>(&self, target: &mut C) {
        for spec in &self.directives {
            spec.apply(target);
        }
    }

    /// Build and marshal in one step
    pub fn render(&self) -> String {
        self.build().marshal_string()
    }

    /// Describe an assembled tree, in its current child order
    pub fn from_block(block: &Block) -> Self {
        Self {
            directives: specs_of(block),
        }
    }
}

impl DirectiveSpec {
    fn apply<C: Children + ?Sized>(&self, target: &mut C) {
        if self.append {
            target.add_directive(Directive::from(self));
            return;
        }

        let directive = target.get_or_create_directive(&self.name, &self.discriminator);
        directive.add_args(self.args.iter().cloned());
        if let Some(order) = self.order {
            directive.set_order(order);
        }
        for child in &self.children {
            child.apply(directive);
        }
    }

    fn from_directive(directive: &Directive, append: bool) -> Self {
        Self {
            name: directive.name.clone(),
            discriminator: directive.discriminator.clone(),
            args: directive.args.clone(),
            order: directive.is_ordered().then_some(directive.order),
            append,
            children: specs_of(&directive.block),
        }
    }
}

fn specs_of(block: &Block) -> Vec<DirectiveSpec> {
    let mut seen = HashSet::new();
    block
        .iter()
        .map(|d| {
            // a repeated key only survives a rebuild when appended
            let append = !seen.insert((d.name.as_str(), d.discriminator.as_str()));
            DirectiveSpec::from_directive(d, append)
        })
        .collect()
}

/// A new directive for the entry and its children. Children still merge
/// among themselves unless they set `append`.
impl From<&DirectiveSpec> for Directive {
    fn from(spec: &DirectiveSpec) -> Self {
        let mut directive = Directive::new(&spec.name, &spec.discriminator)
            .with_args(spec.args.iter().cloned())
            .with_order(spec.order.unwrap_or(UNORDERED));
        for child in &spec.children {
            child.apply(&mut directive);
        }
        directive
    }
}

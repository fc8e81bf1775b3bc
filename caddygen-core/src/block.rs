//! Mutation and lookup over a node's children
//!
//! Both [`Block`] and [`Directive`] expose an ordered child sequence, so
//! every operation is written once against the [`Children`] trait.

use crate::tree::{Block, Directive, DirectiveId};

/// A node holding an ordered list of child directives
pub trait Children {
    fn block(&self) -> &Block;

    fn block_mut(&mut self) -> &mut Block;

    /// Append a directive after the existing children
    fn add_directive(&mut self, directive: Directive) -> &mut Directive {
        let children = &mut self.block_mut().children;
        children.push(directive);
        let last = children.len() - 1;
        &mut children[last]
    }

    /// Return the first child keyed by `(name, discriminator)`, creating
    /// and appending it if none exists.
    fn get_or_create_directive(&mut self, name: &str, discriminator: &str) -> &mut Directive {
        let children = &mut self.block_mut().children;
        let index = match position(children, name, discriminator) {
            Some(index) => index,
            None => {
                tracing::trace!("Creating directive {} [{}]", name, discriminator);
                children.push(Directive::new(name, discriminator));
                children.len() - 1
            }
        };
        &mut children[index]
    }

    fn first_match(&self, name: &str, discriminator: &str) -> Option<&Directive> {
        self.block()
            .children
            .iter()
            .find(|d| d.name == name && d.discriminator == discriminator)
    }

    fn first_match_mut(&mut self, name: &str, discriminator: &str) -> Option<&mut Directive> {
        self.block_mut()
            .children
            .iter_mut()
            .find(|d| d.name == name && d.discriminator == discriminator)
    }

    /// All children with this name, whatever their discriminator
    fn all_by_name(&self, name: &str) -> Vec<&Directive> {
        self.block()
            .children
            .iter()
            .filter(|d| d.name == name)
            .collect()
    }

    /// Remove the child with this identity. No-op when it is not a direct child.
    fn remove(&mut self, id: DirectiveId) -> Option<Directive> {
        let children = &mut self.block_mut().children;
        let index = children.iter().position(|d| d.id() == id)?;
        Some(children.remove(index))
    }

    /// Remove every child keyed by `(name, discriminator)`, keeping the
    /// relative order of the rest. Returns how many were removed.
    fn remove_all_matches(&mut self, name: &str, discriminator: &str) -> usize {
        let children = &mut self.block_mut().children;
        let before = children.len();
        children.retain(|d| d.name != name || d.discriminator != discriminator);
        let removed = before - children.len();
        if removed > 0 {
            tracing::trace!("Removed {} directive(s) {} [{}]", removed, name, discriminator);
        }
        removed
    }
}

fn position(children: &[Directive], name: &str, discriminator: &str) -> Option<usize> {
    children
        .iter()
        .position(|d| d.name == name && d.discriminator == discriminator)
}

impl Children for Block {
    fn block(&self) -> &Block {
        self
    }

    fn block_mut(&mut self) -> &mut Block {
        self
    }
}

impl Children for Directive {
    fn block(&self) -> &Block {
        &self.block
    }

    fn block_mut(&mut self) -> &mut Block {
        &mut self.block
    }
}

//! Sibling ordering applied before each level is written
//!
//! Keys, in priority order:
//! 1. at the top level, directives without arguments come first
//! 2. explicit `order`, ascending ([`UNORDERED`](crate::UNORDERED) last)
//! 3. name
//! 4. first argument, when both sides have one
//! 5. discriminator
//!
//! Siblings equal on every key keep their insertion order, since the sort
//! is stable.

use crate::tree::{Block, Directive};
use std::cmp::Ordering;

/// Compare two siblings found at nesting `level` (0 for the root).
pub fn compare(a: &Directive, b: &Directive, level: usize) -> Ordering {
    let global = if level == 0 {
        b.is_global().cmp(&a.is_global())
    } else {
        Ordering::Equal
    };

    global
        .then_with(|| a.order.cmp(&b.order))
        .then_with(|| a.name.cmp(&b.name))
        .then_with(|| match (a.args.first(), b.args.first()) {
            (Some(x), Some(y)) => x.cmp(y),
            _ => Ordering::Equal,
        })
        .then_with(|| a.discriminator.cmp(&b.discriminator))
}

impl Block {
    /// Stable-sort the direct children as they would be written at `level`.
    ///
    /// Key 4 only applies when both sides have arguments, so `compare` is
    /// not transitive over siblings mixing argument-less and argument-bearing
    /// directives of one name. `slice::sort_by` may panic on such input;
    /// insertion sort never does, and leaves no adjacent pair inverted, so a
    /// second pass is a no-op.
    pub fn sort(&mut self, level: usize) {
        let children = &mut self.children;
        for i in 1..children.len() {
            let mut j = i;
            while j > 0 && compare(&children[j - 1], &children[j], level) == Ordering::Greater {
                children.swap(j - 1, j);
                j -= 1;
            }
        }
    }

    /// Sort every level below and including this one, starting at `level`,
    /// leaving the tree in the order it would be written.
    pub fn sort_tree(&mut self, level: usize) {
        self.sort(level);
        for directive in &mut self.children {
            directive.block.sort_tree(level + 1);
        }
    }
}

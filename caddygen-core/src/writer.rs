//! Caddyfile text output
//!
//! Each level is sorted in place before it is written, so the children of
//! every block are left in output order afterwards.

use crate::tree::{Block, Directive};
use std::io;

const INDENT: char = '\t';

impl Block {
    /// Write the tree as Caddyfile text
    pub fn marshal(&mut self) -> Vec<u8> {
        self.marshal_string().into_bytes()
    }

    /// Write the tree as a Caddyfile string
    pub fn marshal_string(&mut self) -> String {
        let mut buffer = String::new();
        self.write(&mut buffer, 0);
        tracing::debug!(
            "Marshalled {} top-level directives into {} bytes",
            self.len(),
            buffer.len()
        );
        buffer
    }

    /// Marshal into any writer, one top-level directive at a time
    pub fn write_to<W: io::Write>(&mut self, mut out: W) -> io::Result<()> {
        self.sort(0);
        let mut buffer = String::new();
        for directive in &mut self.children {
            buffer.clear();
            directive.write(&mut buffer, 0);
            out.write_all(buffer.as_bytes())?;
        }
        out.flush()
    }

    fn write(&mut self, buffer: &mut String, level: usize) {
        self.sort(level);
        for directive in &mut self.children {
            directive.write(buffer, level);
        }
    }
}

impl Directive {
    fn write(&mut self, buffer: &mut String, level: usize) {
        indent(buffer, level);

        let mut needs_space = false;
        if level > 0 && !self.name.is_empty() {
            buffer.push_str(&self.name);
            needs_space = true;
        }

        for arg in &self.args {
            if needs_space {
                buffer.push(' ');
            }
            buffer.push_str(arg);
            needs_space = true;
        }

        if self.has_children() {
            if needs_space {
                buffer.push(' ');
            }
            buffer.push_str("{\n");
            self.block.write(buffer, level + 1);
            indent(buffer, level);
            buffer.push('}');
        }

        buffer.push('\n');
    }
}

fn indent(buffer: &mut String, level: usize) {
    buffer.extend(std::iter::repeat_n(INDENT, level));
}

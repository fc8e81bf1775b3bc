//! Caddygen Core Library
//!
//! An in-memory Caddyfile document: a tree of [`Directive`]s held in
//! [`Block`]s, a deterministic ordering policy and a tab-indented writer.
//!
//! # Example
//!
//! ```rust
//! use caddygen_core::{Block, Children};
//!
//! let mut root = Block::new();
//! let site = root.get_or_create_directive("site", "example.com");
//! site.add_args(["example.com"]);
//!
//! let handle = site.get_or_create_directive("handle", "/api/*");
//! handle.add_args(["/api/*"]);
//! handle
//!     .get_or_create_directive("reverse_proxy", "")
//!     .add_args(["localhost:9000"]);
//!
//! // names are only written below the top level
//! assert_eq!(
//!     root.marshal_string(),
//!     "example.com {\n\thandle /api/* {\n\t\treverse_proxy localhost:9000\n\t}\n}\n"
//! );
//! ```

pub mod block;
pub mod order;
pub mod tree;
pub mod writer;

pub use block::Children;
pub use order::compare;
pub use tree::{Block, Directive, DirectiveId, UNORDERED};

/// Caddygen version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

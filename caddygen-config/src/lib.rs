//! Caddygen Document Configuration
//!
//! Describes a Caddyfile tree as JSON or TOML and assembles it with
//! [`caddygen_core`].
//!
//! # Example
//!
//! ```rust
//! use caddygen_config::DocumentLoader;
//!
//! let document = DocumentLoader::from_toml(r#"
//!     [[directives]]
//!     name = "site"
//!     args = [":8080"]
//!
//!     [[directives.children]]
//!     name = "file_server"
//! "#).unwrap();
//!
//! assert_eq!(document.render(), ":8080 {\n\tfile_server\n}\n");
//! ```

pub mod document;
pub mod error;
pub mod loader;

pub use document::{DirectiveSpec, Document};
pub use error::{ConfigError, Result};
pub use loader::DocumentLoader;

use std::path::Path;

/// Load a document file and marshal it into Caddyfile text
pub fn render_file(path: impl AsRef<Path>) -> Result<String> {
    Ok(DocumentLoader::load(path)?.render())
}

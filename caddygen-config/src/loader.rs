//! Document loader

use crate::document::Document;
use crate::error::{ConfigError, Result};
use std::path::Path;

/// Document loader for the supported formats
pub struct DocumentLoader;

impl DocumentLoader {
    /// Load a document from a file, choosing the format by extension
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Document> {
        let path = path.as_ref();
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        if !matches!(ext, "json" | "toml") {
            return Err(ConfigError::UnknownFormat(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)?;
        tracing::debug!("Loaded {} ({} bytes)", path.display(), content.len());

        match ext {
            "json" => Self::from_json(&content),
            _ => Self::from_toml(&content),
        }
    }

    /// Parse a JSON document
    pub fn from_json(content: &str) -> Result<Document> {
        Ok(serde_json::from_str(content)?)
    }

    /// Parse a TOML document
    pub fn from_toml(content: &str) -> Result<Document> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize a document as pretty JSON
    pub fn to_json(document: &Document) -> Result<String> {
        Ok(serde_json::to_string_pretty(document)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SITE_TOML: &str = r#"
[[directives]]
name = "site"
discriminator = "example.com"
args = ["example.com"]

[[directives.children]]
name = "tls"
args = ["internal"]
order = 1

[[directives.children]]
name = "reverse_proxy"
args = ["localhost:9000"]
"#;

    #[test]
    fn test_toml_loading() {
        let document = DocumentLoader::from_toml(SITE_TOML).unwrap();
        assert_eq!(document.directives.len(), 1);
        assert_eq!(document.directives[0].children.len(), 2);
        assert_eq!(document.directives[0].children[0].order, Some(1));
        assert_eq!(
            document.render(),
            "example.com {\n\ttls internal\n\treverse_proxy localhost:9000\n}\n"
        );
    }

    #[test]
    fn test_json_loading() {
        let json = r#"{"directives": [{"name": "", "discriminator": "options", "children": [{"name": "admin", "args": ["off"]}]}]}"#;
        let document = DocumentLoader::from_json(json).unwrap();
        assert_eq!(document.render(), "{\n\tadmin off\n}\n");
    }

    #[test]
    fn test_empty_json_document() {
        let document = DocumentLoader::from_json("{}").unwrap();
        assert!(document.directives.is_empty());
    }

    #[test]
    fn test_invalid_json() {
        let err = DocumentLoader::from_json("{").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_json_round_trip_through_loader() {
        let document = DocumentLoader::from_toml(SITE_TOML).unwrap();
        let json = DocumentLoader::to_json(&document).unwrap();
        assert!(!json.contains("append"));
        assert_eq!(DocumentLoader::from_json(&json).unwrap(), document);
    }

    #[test]
    fn test_load_by_extension() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(SITE_TOML.as_bytes()).unwrap();

        let document = DocumentLoader::load(file.path()).unwrap();
        assert_eq!(document.directives[0].name, "site");
    }

    #[test]
    fn test_unknown_extension() {
        let err = DocumentLoader::load("Caddyfile.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownFormat(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = DocumentLoader::load("/nonexistent/caddygen.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}

//! The documentation catalog: entries and their typed content blocks.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{AppError, Result};

/// One renderable unit of documentation content.
///
/// The set is closed: the renderer matches exhaustively, so a new variant
/// without a render rule fails to compile. `Unknown` exists only as the
/// landing spot for unrecognized `type` tags in user-supplied catalog files;
/// it renders nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    Title { text: String },
    Paragraph { text: String },
    Code { language: String, code: String },
    Button { label: String, url: String },
    #[serde(other)]
    Unknown,
}

impl ContentBlock {
    pub fn title(text: &str) -> Self {
        Self::Title { text: text.to_string() }
    }

    pub fn paragraph(text: &str) -> Self {
        Self::Paragraph { text: text.to_string() }
    }

    pub fn code(language: &str, code: &str) -> Self {
        Self::Code { language: language.to_string(), code: code.to_string() }
    }

    pub fn button(label: &str, url: &str) -> Self {
        Self::Button { label: label.to_string(), url: url.to_string() }
    }
}

/// One selectable catalog item. `id` doubles as the `db` location-parameter
/// value, so it must be unique across the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocEntry {
    pub id: String,
    pub name: String,
    pub content: Vec<ContentBlock>,
}

/// Immutable, validated list of entries. Exactly one entry is selected at a
/// time; selection itself lives in [`crate::app::state::AppState`].
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<DocEntry>,
}

impl Catalog {
    /// Build a catalog, rejecting empty input and duplicate ids.
    pub fn new(entries: Vec<DocEntry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(AppError::Catalog("catalog has no entries".to_string()));
        }
        let mut seen = HashSet::new();
        for entry in &entries {
            if entry.id.is_empty() {
                return Err(AppError::Catalog(format!("entry \"{}\" has an empty id", entry.name)));
            }
            if !seen.insert(entry.id.as_str()) {
                return Err(AppError::Catalog(format!("duplicate id: {}", entry.id)));
            }
        }
        Ok(Self { entries })
    }

    /// The compiled-in BuildMyMeta catalog.
    pub fn builtin() -> Self {
        Self::new(super::catalog_data::builtin_entries()).expect("builtin catalog is valid")
    }

    /// Load a user-supplied catalog from a JSON file. Blocks with a `type`
    /// we do not know deserialize as `Unknown` and are tolerated.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let entries: Vec<DocEntry> = serde_json::from_str(&contents)?;
        Self::new(entries)
    }

    pub fn entries(&self) -> &[DocEntry] {
        &self.entries
    }

    pub fn first(&self) -> &DocEntry {
        &self.entries[0]
    }

    pub fn find(&self, id: &str) -> Option<&DocEntry> {
        self.entries.iter().find(|e| e.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn entry(id: &str) -> DocEntry {
        DocEntry {
            id: id.to_string(),
            name: id.to_uppercase(),
            content: vec![ContentBlock::title("Installation")],
        }
    }

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.first().id, "mongodb");
        assert!(catalog.find("postgresql").is_some());
        assert!(catalog.find("nextjs").is_some());
        assert_eq!(catalog.entries().len(), 9);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let err = Catalog::new(vec![entry("mongodb"), entry("mongodb")]).unwrap_err();
        assert!(err.to_string().contains("duplicate id: mongodb"));
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert!(Catalog::new(Vec::new()).is_err());
    }

    #[test]
    fn test_find_unknown_id() {
        let catalog = Catalog::new(vec![entry("mongodb")]).unwrap();
        assert!(catalog.find("oracle").is_none());
    }

    #[test]
    fn test_block_tags_round_trip() {
        let blocks = vec![
            ContentBlock::title("Installation"),
            ContentBlock::paragraph("Install the package."),
            ContentBlock::code("bash", "npm install build-my-meta"),
            ContentBlock::button("View on npm", "https://www.npmjs.com/package/build-my-meta"),
        ];
        let json = serde_json::to_string(&blocks).unwrap();
        assert!(json.contains("\"type\":\"title\""));
        assert!(json.contains("\"type\":\"code\""));
        let parsed: Vec<ContentBlock> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, blocks);
    }

    #[test]
    fn test_unknown_block_kind_tolerated() {
        let json = r#"[
            {"type": "title", "text": "Installation"},
            {"type": "marquee", "text": "never seen before"}
        ]"#;
        let parsed: Vec<ContentBlock> = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0], ContentBlock::title("Installation"));
        assert_eq!(parsed[1], ContentBlock::Unknown);
    }

    #[test]
    fn test_load_catalog_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": "redis", "name": "Redis", "content": [
                {{"type": "title", "text": "Installation"}},
                {{"type": "code", "language": "bash", "code": "npm install build-my-meta redis"}}
            ]}}]"#
        )
        .unwrap();

        let catalog = Catalog::from_json_file(file.path()).unwrap();
        assert_eq!(catalog.first().id, "redis");
        assert_eq!(catalog.first().content.len(), 2);
    }

    #[test]
    fn test_load_rejects_duplicate_ids() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": "a", "name": "A", "content": []}},
                {{"id": "a", "name": "B", "content": []}}]"#
        )
        .unwrap();

        assert!(Catalog::from_json_file(file.path()).is_err());
    }
}

//! The per-directory metadata file consumed by the docs site generator.

use serde::{Deserialize, Serialize};

/// Contents of one `meta.json`.
///
/// Field order is the serialized key order: `title` before `pages`.
/// `pages` is an ordered set; use [`MetaFile::push_page`] to keep it that way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaFile {
    pub title: String,
    pub pages: Vec<String>,
}

impl MetaFile {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            pages: Vec::new(),
        }
    }

    /// Append an entry unless it is already listed. Returns whether it was added.
    pub fn push_page(&mut self, name: &str) -> bool {
        if self.pages.iter().any(|p| p == name) {
            return false;
        }
        self.pages.push(name.to_string());
        true
    }

    /// Pretty-printed JSON (2-space indent, non-ASCII kept verbatim) with a
    /// trailing newline.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }
}

//! Shared test utilities for the navmeta test suite.
//!
//! Provides docs-tree setup and assertions over written metadata files.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = make_dirs(&["en/use-dify/getting-started"]);
//! let json = descriptor_json("en", r#"[{"dropdown": "Use Dify", "groups": [...]}]"#);
//! // ... compile ...
//! assert_meta(&tmp, "en/use-dify/getting-started", "Getting Started", &["intro"]);
//! ```

use std::collections::BTreeMap;
use std::path::Path;
use tempfile::TempDir;
use walkdir::WalkDir;

use crate::types::MetaFile;

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/docs/` to a temp directory and return it.
///
/// The fixture tree holds a `docs.json` and the directories it references
/// (with one intentionally missing, `en/self-host/legacy`).
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/docs");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

/// Create a temp docs root containing the given relative directories.
pub fn make_dirs(dirs: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for dir in dirs {
        std::fs::create_dir_all(tmp.path().join(dir)).unwrap();
    }
    tmp
}

/// Wrap a dropdown array in a one-version, one-language descriptor.
pub fn descriptor_json(language: &str, dropdowns: &str) -> String {
    format!(
        r#"{{"navigation": {{"versions": [{{"version": "latest", "languages": [
            {{"language": "{language}", "dropdowns": {dropdowns}}}
        ]}}]}}}}"#
    )
}

// =========================================================================
// Metadata lookups
// =========================================================================

/// Parse the `meta.json` in `dir`. Panics if it is missing or malformed.
pub fn read_meta(root: &TempDir, dir: &str) -> MetaFile {
    let path = root.path().join(dir).join("meta.json");
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("no meta.json in '{dir}': {e}"));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("malformed meta.json in '{dir}': {e}"))
}

/// Raw contents of every `meta.json` under the root, keyed by relative directory.
pub fn read_all_meta(root: &TempDir) -> BTreeMap<String, String> {
    WalkDir::new(root.path())
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file() && e.file_name() == "meta.json")
        .map(|e| {
            let rel = e.path().parent().unwrap().strip_prefix(root.path()).unwrap();
            (
                rel.to_string_lossy().to_string(),
                std::fs::read_to_string(e.path()).unwrap(),
            )
        })
        .collect()
}

// =========================================================================
// Assertions
// =========================================================================

/// Assert the `meta.json` in `dir` has exactly this title and entry list.
pub fn assert_meta(root: &TempDir, dir: &str, title: &str, pages: &[&str]) {
    let meta = read_meta(root, dir);
    assert_eq!(meta.title, title, "title mismatch in '{dir}'");
    assert_eq!(meta.pages, pages.to_vec(), "pages mismatch in '{dir}'");
}

/// Assert no `meta.json` was written into `dir`.
pub fn assert_no_meta(root: &TempDir, dir: &str) {
    let path = root.path().join(dir).join("meta.json");
    assert!(!path.exists(), "unexpected meta.json in '{dir}'");
}

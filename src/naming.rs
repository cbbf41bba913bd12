//! Centralized path and directory naming for navigation entries.
//!
//! Page references are slash-delimited paths rooted at a language directory:
//!
//! ```text
//! en/use-dify/getting-started/intro
//! ── ──────── ─────────────── ─────
//! │  │        │               └ base name (sidebar entry)
//! │  │        └ subdirectory of the dropdown
//! │  └ dropdown directory
//! └ language directory
//! ```
//!
//! Everything but the last segment is the page's directory; a group's
//! directory is the directory of its first page.
//!
//! ## Dropdown Directories
//!
//! Dropdown labels are translated per language ("Self Host", "自托管",
//! "セルフホスト") but all map to the same directory. [`dropdown_directory_name`]
//! matches keywords from every supported language against the lower-cased
//! label; the first matching rule wins:
//!
//! | Rule | Keywords | Directory |
//! |------|----------|-----------|
//! | 1 | (`use` \| `使用` \| `使う`) and `dify` | `use-dify` |
//! | 2 | `self` \| `自托管` \| `セルフ` | `self-host` |
//! | 3 | `plugin` \| `插件` \| `プラグイン` | `develop-plugin` |
//! | 4 | `api` | `api-reference` |
//!
//! Labels matching no rule are lower-cased with spaces turned into dashes.

/// Last path segment of a page reference.
///
/// - `"en/use-dify/getting-started/intro"` → `"intro"`
/// - `"intro"` → `"intro"`
pub fn page_base_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Everything before the last path segment.
///
/// - `"en/use-dify/getting-started/intro"` → `"en/use-dify/getting-started"`
/// - `"intro"` → `""`
pub fn page_directory(path: &str) -> &str {
    path.rfind('/').map_or("", |idx| &path[..idx])
}

/// Name under which a nested directory is listed in its parent's entries.
///
/// This is the segment immediately following `parent` when `nested` lies
/// below it. Otherwise it falls back to the last segment of `nested`.
///
/// - `("en/a", "en/a/b")` → `"b"`
/// - `("en/a", "en/a/b/c")` → `"b"`
/// - `("en/a", "en/x/y")` → `"y"`
pub fn subdirectory_name<'a>(parent: &str, nested: &'a str) -> &'a str {
    let below = if parent.is_empty() {
        Some(nested).filter(|n| !n.is_empty())
    } else {
        nested
            .strip_prefix(parent)
            .and_then(|rest| rest.strip_prefix('/'))
    };
    match below {
        Some(rest) => rest.split('/').next().unwrap_or(rest),
        None => page_base_name(nested),
    }
}

/// Third segment of a page reference: the dropdown subdirectory it lives in.
///
/// Returns `None` for references with fewer than three segments.
pub fn top_level_subdirectory(path: &str) -> Option<&str> {
    path.split('/').nth(2)
}

/// One dropdown rule: every keyword set must have at least one keyword
/// present in the lower-cased label.
struct DirectoryRule {
    all_of: &'static [&'static [&'static str]],
    directory: &'static str,
}

const DROPDOWN_RULES: &[DirectoryRule] = &[
    DirectoryRule {
        all_of: &[&["dify"], &["use", "使用", "使う"]],
        directory: "use-dify",
    },
    DirectoryRule {
        all_of: &[&["self", "自托管", "セルフ"]],
        directory: "self-host",
    },
    DirectoryRule {
        all_of: &[&["plugin", "插件", "プラグイン"]],
        directory: "develop-plugin",
    },
    DirectoryRule {
        all_of: &[&["api"]],
        directory: "api-reference",
    },
];

impl DirectoryRule {
    fn matches(&self, label: &str) -> bool {
        self.all_of
            .iter()
            .all(|any_of| any_of.iter().any(|kw| label.contains(kw)))
    }
}

/// Resolve the directory a dropdown's content lives in from its display label.
pub fn dropdown_directory_name(label: &str) -> String {
    let lower = label.to_lowercase();
    DROPDOWN_RULES
        .iter()
        .find(|rule| rule.matches(&lower))
        .map(|rule| rule.directory.to_string())
        .unwrap_or_else(|| lower.replace(' ', "-"))
}

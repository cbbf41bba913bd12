//! Navigation descriptor model and loading.
//!
//! The descriptor is the `docs.json` document maintainers edit by hand. Only the
//! navigation part matters here:
//!
//! ```text
//! navigation
//! └── versions[]
//!     └── languages[]            { "language": "en", "dropdowns": [...] }
//!         └── dropdowns[]        { "dropdown": "Use Dify", "pages": [...], "groups": [...] }
//!             ├── pages[]        sections: strings or { "group", "pages" }
//!             └── groups[]       { "group": "Getting Started", "pages": [...] }
//! ```
//!
//! Below a dropdown, every item is either a page reference (a slash-delimited
//! path string such as `en/use-dify/getting-started/intro`) or a nested group
//! with its own `pages`. That recursive union is [`NavItem`].
//!
//! Keys this tool has no use for (`icon`, `expanded`, `openapi`, ...) are
//! accepted and ignored. The descriptor is never mutated.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DescriptorError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid navigation descriptor: {0}")]
    Json(#[from] serde_json::Error),
}

/// Root of the input document.
#[derive(Debug, Clone, Deserialize)]
pub struct NavigationDescriptor {
    pub navigation: Navigation,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Navigation {
    pub versions: Vec<Version>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Version {
    pub languages: Vec<LanguageConfig>,
}

/// Navigation for one language. `language` doubles as the language's root
/// directory name (`en`, `zh`, `ja`).
#[derive(Debug, Clone, Deserialize)]
pub struct LanguageConfig {
    pub language: String,
    pub dropdowns: Vec<Dropdown>,
}

/// A top-level menu entry. Carries sections under `pages`, groups under
/// `groups`, or both.
#[derive(Debug, Clone, Deserialize)]
pub struct Dropdown {
    pub dropdown: String,
    #[serde(default)]
    pub pages: Option<Vec<NavItem>>,
    #[serde(default)]
    pub groups: Option<Vec<Group>>,
}

/// One entry in a `pages` list.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum NavItem {
    /// Slash-delimited page path.
    Page(String),
    Group(Group),
}

/// A named collection of pages and nested groups.
///
/// A group without a `pages` key is kept in the tree but never descended into.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Group {
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub pages: Option<Vec<NavItem>>,
}

impl NavigationDescriptor {
    /// Read and parse a descriptor from disk.
    pub fn load(path: &Path) -> Result<Self, DescriptorError> {
        let content = fs::read_to_string(path).map_err(|source| DescriptorError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, DescriptorError> {
        Ok(serde_json::from_str(content)?)
    }

    /// All language configurations across all versions, in declaration order.
    pub fn languages(&self) -> impl Iterator<Item = &LanguageConfig> {
        self.navigation
            .versions
            .iter()
            .flat_map(|v| v.languages.iter())
    }
}

impl NavItem {
    pub fn as_group(&self) -> Option<&Group> {
        match self {
            NavItem::Group(g) => Some(g),
            NavItem::Page(_) => None,
        }
    }
}

impl Group {
    /// Display label, empty when the group has none.
    pub fn title(&self) -> &str {
        self.group.as_deref().unwrap_or("")
    }

    /// Child items; empty when the group has no `pages` key.
    pub fn children(&self) -> &[NavItem] {
        self.pages.as_deref().unwrap_or(&[])
    }

    pub fn has_pages(&self) -> bool {
        self.pages.is_some()
    }
}

impl Dropdown {
    /// Groups that sit directly below the dropdown's top level.
    ///
    /// For a `pages`-based dropdown these are the groups inside each structured
    /// section (plain string sections are skipped). For a `groups`-based
    /// dropdown they are the groups themselves. Only groups that carry a
    /// `pages` key are yielded; sections come before groups.
    pub fn top_level_groups(&self) -> impl Iterator<Item = &Group> {
        let from_sections = self
            .pages
            .iter()
            .flatten()
            .filter_map(NavItem::as_group)
            .flat_map(Group::children)
            .filter_map(NavItem::as_group)
            .filter(|g| g.has_pages());
        let from_groups = self.groups.iter().flatten().filter(|g| g.has_pages());
        from_sections.chain(from_groups)
    }
}

/// Find the first page reference in `items`, depth-first and left to right.
///
/// Nested groups are searched before their later siblings. Returns `None` if
/// the subtree holds no page reference at all.
pub fn first_page(items: &[NavItem]) -> Option<&str> {
    items.iter().find_map(|item| match item {
        NavItem::Page(path) => Some(path.as_str()),
        NavItem::Group(group) => first_page(group.children()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(path: &str) -> NavItem {
        NavItem::Page(path.to_string())
    }

    fn group(title: &str, pages: Vec<NavItem>) -> NavItem {
        NavItem::Group(Group {
            group: Some(title.to_string()),
            pages: Some(pages),
        })
    }

    // =========================================================================
    // first_page
    // =========================================================================

    #[test]
    fn first_page_returns_leading_string() {
        let items = vec![page("en/a/intro"), page("en/a/setup")];
        assert_eq!(first_page(&items), Some("en/a/intro"));
    }

    #[test]
    fn first_page_descends_into_nested_group_before_siblings() {
        let items = vec![
            group("Nested", vec![page("en/a/b/deep")]),
            page("en/a/shallow"),
        ];
        assert_eq!(first_page(&items), Some("en/a/b/deep"));
    }

    #[test]
    fn first_page_skips_empty_groups() {
        let items = vec![
            group("Empty", vec![]),
            NavItem::Group(Group {
                group: Some("No pages key".into()),
                pages: None,
            }),
            group("Later", vec![page("en/a/later")]),
        ];
        assert_eq!(first_page(&items), Some("en/a/later"));
    }

    #[test]
    fn first_page_none_when_no_page_anywhere() {
        let items = vec![group("Outer", vec![group("Inner", vec![])])];
        assert_eq!(first_page(&items), None);
        assert_eq!(first_page(&[]), None);
    }

    // =========================================================================
    // Parsing
    // =========================================================================

    #[test]
    fn parse_mixed_items_and_ignores_unknown_keys() {
        let json = r#"{
          "theme": "mint",
          "navigation": {
            "versions": [{
              "version": "latest",
              "languages": [{
                "language": "en",
                "dropdowns": [{
                  "dropdown": "Use Dify",
                  "icon": "book",
                  "pages": [
                    "en/use-dify/index",
                    {
                      "group": "Getting Started",
                      "expanded": true,
                      "pages": ["en/use-dify/getting-started/intro"]
                    }
                  ]
                }]
              }]
            }]
          }
        }"#;
        let desc = NavigationDescriptor::parse(json).unwrap();
        let lang = desc.languages().next().unwrap();
        assert_eq!(lang.language, "en");
        let dropdown = &lang.dropdowns[0];
        let sections = dropdown.pages.as_ref().unwrap();
        assert!(matches!(&sections[0], NavItem::Page(p) if p == "en/use-dify/index"));
        let section = sections[1].as_group().unwrap();
        assert_eq!(section.title(), "Getting Started");
        assert_eq!(section.children().len(), 1);
        assert!(dropdown.groups.is_none());
    }

    #[test]
    fn parse_group_without_label_has_empty_title() {
        let json = r#"{"navigation":{"versions":[{"languages":[{"language":"en","dropdowns":[
            {"dropdown":"API Reference","groups":[{"openapi":"spec.json","pages":["en/api-reference/x/y"]}]}
        ]}]}]}}"#;
        let desc = NavigationDescriptor::parse(json).unwrap();
        let dropdown = &desc.navigation.versions[0].languages[0].dropdowns[0];
        let groups = dropdown.groups.as_ref().unwrap();
        assert_eq!(groups[0].title(), "");
        assert!(groups[0].has_pages());
    }

    #[test]
    fn parse_rejects_missing_navigation() {
        let result = NavigationDescriptor::parse(r#"{"name": "docs"}"#);
        assert!(matches!(result, Err(DescriptorError::Json(_))));
    }

    #[test]
    fn parse_rejects_non_string_page_entry() {
        let json = r#"{"navigation":{"versions":[{"languages":[{"language":"en","dropdowns":[
            {"dropdown":"X","groups":[{"group":"G","pages":[42]}]}
        ]}]}]}}"#;
        let err = NavigationDescriptor::parse(json).unwrap_err();
        // Well-formed JSON; only the page entry's shape is wrong
        assert!(matches!(err, DescriptorError::Json(ref e) if e.is_data()));
    }

    #[test]
    fn load_reports_missing_file_path() {
        let err = NavigationDescriptor::load(Path::new("/nonexistent/docs.json")).unwrap_err();
        assert!(matches!(err, DescriptorError::Read { .. }));
        assert!(err.to_string().contains("/nonexistent/docs.json"));
    }

    #[test]
    fn version_label_is_ignored() {
        let json = r#"{"navigation":{"versions":[
            {"version":"v2","default":true,"languages":[{"language":"en","dropdowns":[]}]}
        ]}}"#;
        let desc = NavigationDescriptor::parse(json).unwrap();
        assert_eq!(desc.navigation.versions[0].languages[0].language, "en");
    }

    #[test]
    fn languages_span_all_versions() {
        let json = r#"{"navigation":{"versions":[
            {"version":"v1","languages":[{"language":"en","dropdowns":[]}]},
            {"version":"v2","languages":[{"language":"zh","dropdowns":[]},{"language":"ja","dropdowns":[]}]}
        ]}}"#;
        let desc = NavigationDescriptor::parse(json).unwrap();
        let langs: Vec<&str> = desc.languages().map(|l| l.language.as_str()).collect();
        assert_eq!(langs, vec!["en", "zh", "ja"]);
    }

    // =========================================================================
    // top_level_groups
    // =========================================================================

    #[test]
    fn top_level_groups_from_sections_then_groups() {
        let dropdown = Dropdown {
            dropdown: "Mixed".into(),
            pages: Some(vec![
                page("en/mixed/loose-page"),
                group(
                    "Section",
                    vec![
                        page("en/mixed/section-page"),
                        group("A", vec![page("en/mixed/a/one")]),
                        NavItem::Group(Group {
                            group: Some("No pages".into()),
                            pages: None,
                        }),
                    ],
                ),
            ]),
            groups: Some(vec![
                Group {
                    group: Some("B".into()),
                    pages: Some(vec![page("en/mixed/b/one")]),
                },
                Group {
                    group: Some("C".into()),
                    pages: None,
                },
            ]),
        };
        let titles: Vec<&str> = dropdown.top_level_groups().map(Group::title).collect();
        assert_eq!(titles, vec!["A", "B"]);
    }

    #[test]
    fn top_level_groups_empty_dropdown() {
        let dropdown = Dropdown {
            dropdown: "Empty".into(),
            pages: None,
            groups: None,
        };
        assert_eq!(dropdown.top_level_groups().count(), 0);
    }
}

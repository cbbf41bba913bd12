//! Tool configuration.
//!
//! Handles loading, merging, and validating `navmeta.toml`. The file is
//! optional and lives in the docs root next to the navigation descriptor.
//! User values are merged on top of stock defaults, so a config file only
//! needs the keys it wants to change.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! navigation_file = "docs.json"        # Descriptor, relative to the docs root
//! meta_file = "meta.json"              # File written into each directory
//! default_root_title = "Documentation" # Root title for unlisted languages
//!
//! [root_titles]
//! en = "Documentation"
//! zh = "文档"
//! ja = "ドキュメント"
//! ```
//!
//! Entries under `[root_titles]` are added to the stock table, not swapped in
//! for it. Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Name of the config file looked up in the docs root.
pub const CONFIG_FILE: &str = "navmeta.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Configuration loaded from `navmeta.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MetaConfig {
    /// Navigation descriptor path, relative to the docs root.
    pub navigation_file: String,
    /// Name of the metadata file written into each directory.
    pub meta_file: String,
    /// Root title for languages missing from `root_titles`.
    pub default_root_title: String,
    /// Root `meta.json` title per language code.
    pub root_titles: BTreeMap<String, String>,
}

impl Default for MetaConfig {
    fn default() -> Self {
        let root_titles = [("en", "Documentation"), ("zh", "文档"), ("ja", "ドキュメント")]
            .into_iter()
            .map(|(lang, title)| (lang.to_string(), title.to_string()))
            .collect();
        Self {
            navigation_file: "docs.json".to_string(),
            meta_file: "meta.json".to_string(),
            default_root_title: "Documentation".to_string(),
            root_titles,
        }
    }
}

impl MetaConfig {
    /// Title of a language's root metadata file.
    pub fn root_title(&self, language: &str) -> &str {
        self.root_titles
            .get(language)
            .map_or(self.default_root_title.as_str(), String::as_str)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.navigation_file.trim().is_empty() {
            return Err(ConfigError::Validation(
                "navigation_file must not be empty".into(),
            ));
        }
        if self.meta_file.trim().is_empty() {
            return Err(ConfigError::Validation("meta_file must not be empty".into()));
        }
        if self.meta_file.contains('/') || self.meta_file.contains('\\') {
            return Err(ConfigError::Validation(
                "meta_file must be a file name, not a path".into(),
            ));
        }
        Ok(())
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(MetaConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// Tables merge key-by-key; any other overlay value replaces the base value.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `navmeta.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(root: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = root.join(CONFIG_FILE);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<MetaConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: MetaConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config for a docs root, falling back to stock defaults.
pub fn load_config(root: &Path) -> Result<MetaConfig, ConfigError> {
    resolve_config(stock_defaults_value(), load_raw_config(root)?)
}

/// Returns a fully-commented stock `navmeta.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# navmeta configuration
# =====================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Place this file as navmeta.toml in the docs root (the directory holding
# the language directories and the navigation descriptor).
# Unknown keys will cause an error.

# Navigation descriptor, relative to the docs root.
navigation_file = "docs.json"

# Metadata file written into every directory the navigation implies.
meta_file = "meta.json"

# Root title used for languages not listed under [root_titles].
default_root_title = "Documentation"

# ---------------------------------------------------------------------------
# Root titles
# ---------------------------------------------------------------------------
# Title of each language's root meta.json, keyed by language code.
# Entries here are added to the built-in table.
[root_titles]
en = "Documentation"
zh = "文档"
ja = "ドキュメント"
"##
}

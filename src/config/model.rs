// src/config/model.rs

use serde::Deserialize;

use crate::config::defaults::{default_ignored_content_paths, default_ignored_paths};

/// Top-level configuration as read from a TOML file.
///
/// ```toml
/// [config]
/// target_directory = "."
/// output_markdown_path = "output/project.md"
/// sort_entries = true
///
/// [ignore]
/// paths = ["target/", "*.log"]
/// content = ["*.env"]
/// append_default_paths = true
/// ```
///
/// All sections are optional; anything missing falls back to the built-in
/// defaults in [`crate::config::defaults`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub config: ConfigSection,

    #[serde(default)]
    pub ignore: IgnoreSection,
}

/// `[config]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigSection {
    /// Default scan root; the first positional CLI argument overrides it.
    #[serde(default)]
    pub target_directory: Option<String>,

    /// Default output file; the second positional CLI argument overrides it.
    #[serde(default)]
    pub output_markdown_path: Option<String>,

    /// Sort sibling entries by name instead of using enumeration order.
    ///
    /// If `None`, sorting is enabled.
    #[serde(default)]
    pub sort_entries: Option<bool>,
}

/// `[ignore]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IgnoreSection {
    /// Fully-ignored rules. If `None`, the built-in list is used.
    #[serde(default)]
    pub paths: Option<Vec<String>>,

    /// Content-only rules. If `None`, the built-in list is used.
    #[serde(default)]
    pub content: Option<Vec<String>>,

    /// If true, `paths` is appended to the built-in list instead of
    /// replacing it.
    #[serde(default)]
    pub append_default_paths: bool,

    /// Same as `append_default_paths`, for `content`.
    #[serde(default)]
    pub append_default_content: bool,
}

impl ConfigSection {
    pub fn effective_sort_entries(&self) -> bool {
        self.sort_entries.unwrap_or(true)
    }
}

impl IgnoreSection {
    /// Effective fully-ignored list after applying the append/replace rule.
    pub fn effective_paths(&self) -> Vec<String> {
        effective_rules(
            self.paths.as_ref(),
            default_ignored_paths(),
            self.append_default_paths,
        )
    }

    /// Effective content-only list after applying the append/replace rule.
    pub fn effective_content(&self) -> Vec<String> {
        effective_rules(
            self.content.as_ref(),
            default_ignored_content_paths(),
            self.append_default_content,
        )
    }
}

/// Built-in rules come first when appending so configuration order stays
/// stable for diagnostics.
fn effective_rules(
    configured: Option<&Vec<String>>,
    defaults: Vec<String>,
    append_default: bool,
) -> Vec<String> {
    match (configured, append_default) {
        (Some(list), true) => {
            let mut combined = defaults;
            combined.extend(list.iter().cloned());
            combined
        }
        (Some(list), false) => list.clone(),
        (None, _) => defaults,
    }
}

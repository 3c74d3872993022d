// src/watch/filter.rs

//! Decide whether a raw filesystem event should trigger a regeneration.

use std::path::Path;
use std::sync::Arc;

use notify::event::{CreateKind, EventKind, RemoveKind};

use crate::config::Settings;
use crate::document::TEMP_FILE_PREFIX;
use crate::engine::ChangeKind;

/// Outcome of filtering a single event path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathDecision {
    /// Relevant change; carries the `/`-separated relative path.
    Accept(String),
    /// The scan root itself.
    Root,
    /// Not below the scan root.
    Outside,
    /// The output document or its temporary file.
    OwnOutput,
    /// Hidden by a fully-ignored rule (carries the raw rule text).
    Ignored(String),
}

/// Path filter for watch events, sharing the walker's rules.
#[derive(Debug, Clone)]
pub struct EventFilter {
    settings: Arc<Settings>,
}

impl EventFilter {
    pub fn new(settings: Arc<Settings>) -> Self {
        Self { settings }
    }

    pub fn classify(&self, path: &Path) -> PathDecision {
        let Some(rel) = relative_str(&self.settings.target_dir, path) else {
            return PathDecision::Outside;
        };
        let rel = rel.trim_matches('/');
        if rel.is_empty() {
            return PathDecision::Root;
        }

        if self.is_own_output(rel) {
            return PathDecision::OwnOutput;
        }

        match self.settings.ignored.rule_hiding_path(rel) {
            Some(rule) => PathDecision::Ignored(rule.raw().to_string()),
            None => PathDecision::Accept(rel.to_string()),
        }
    }

    fn is_own_output(&self, rel: &str) -> bool {
        let Some(out) = self.settings.output_rel.as_deref() else {
            return false;
        };
        if rel == out {
            return true;
        }

        let (out_dir, _) = split_parent(out);
        let (dir, name) = split_parent(rel);
        dir == out_dir && name.starts_with(TEMP_FILE_PREFIX)
    }
}

/// Map a notify event kind onto the three change kinds we react to.
///
/// Access events never change content and are dropped.
pub fn change_kind(kind: &EventKind) -> Option<ChangeKind> {
    match kind {
        EventKind::Create(_) => Some(ChangeKind::Added),
        EventKind::Modify(_) | EventKind::Any => Some(ChangeKind::Changed),
        EventKind::Remove(_) => Some(ChangeKind::Removed),
        EventKind::Access(_) | EventKind::Other => None,
    }
}

/// Whether the backend told us the event concerns a directory.
pub fn is_directory_event(kind: &EventKind) -> bool {
    matches!(
        kind,
        EventKind::Create(CreateKind::Folder) | EventKind::Remove(RemoveKind::Folder)
    )
}

/// Convert a path into a string relative to `root`, with forward slashes.
///
/// Tries a plain `strip_prefix` first, then canonicalizes the path (which
/// only works while it still exists) to cope with symlinked prefixes.
pub fn relative_str(root: &Path, path: &Path) -> Option<String> {
    if let Ok(rel) = path.strip_prefix(root) {
        return Some(rel.to_string_lossy().replace('\\', "/"));
    }

    let canon = path.canonicalize().ok()?;
    let rel = canon.strip_prefix(root).ok()?;
    Some(rel.to_string_lossy().replace('\\', "/"))
}

fn split_parent(rel: &str) -> (&str, &str) {
    match rel.rfind('/') {
        Some(idx) => (&rel[..idx], &rel[idx + 1..]),
        None => ("", rel),
    }
}

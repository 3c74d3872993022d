// src/config/settings.rs

use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::config::defaults::{DEFAULT_OUTPUT_MARKDOWN_PATH, DEFAULT_TARGET_DIRECTORY};
use crate::config::model::ConfigFile;
use crate::errors::{Result, TreedocError};
use crate::rules::RuleList;

/// Fully resolved, immutable run configuration.
///
/// Built once at startup and shared (behind an `Arc`) by the generator and
/// the watcher. Nothing in here changes for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Canonical scan root.
    pub target_dir: PathBuf,
    /// Name printed on the first line of the tree block.
    pub root_name: String,
    /// Absolute output file path.
    pub output_path: PathBuf,
    /// Output path relative to `target_dir` (with `/` separators) when the
    /// document is written inside the scanned tree.
    pub output_rel: Option<String>,
    /// Rules hiding a path from both the tree and the content sections.
    pub ignored: RuleList,
    /// Rules hiding only a file's content.
    pub content_ignored: RuleList,
    pub sort_entries: bool,
}

impl Settings {
    /// Resolve settings from a validated config plus positional overrides.
    ///
    /// Precedence for both paths: CLI argument > config file > built-in
    /// default. Fails with [`TreedocError::TargetMissing`] before anything is
    /// written if the scan root does not exist.
    pub fn resolve(
        cfg: &ConfigFile,
        target_override: Option<&str>,
        output_override: Option<&str>,
    ) -> Result<Self> {
        let target = target_override
            .or(cfg.config.target_directory.as_deref())
            .unwrap_or(DEFAULT_TARGET_DIRECTORY);
        let output = output_override
            .or(cfg.config.output_markdown_path.as_deref())
            .unwrap_or(DEFAULT_OUTPUT_MARKDOWN_PATH);

        let target_dir = resolve_target(Path::new(target))?;
        let root_name = target_dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| target_dir.display().to_string());

        let output_path = resolve_output(Path::new(output))?;
        let output_rel = output_path
            .strip_prefix(&target_dir)
            .ok()
            .map(|rel| rel.to_string_lossy().replace('\\', "/"));

        let ignored = RuleList::compile("ignored_paths", &cfg.ignore.effective_paths())?;
        let content_ignored =
            RuleList::compile("ignored_content_paths", &cfg.ignore.effective_content())?;

        Ok(Self {
            target_dir,
            root_name,
            output_path,
            output_rel,
            ignored,
            content_ignored,
            sort_entries: cfg.config.effective_sort_entries(),
        })
    }
}

fn resolve_target(path: &Path) -> Result<PathBuf> {
    if !path.exists() {
        return Err(TreedocError::TargetMissing(path.to_path_buf()));
    }
    if !path.is_dir() {
        return Err(TreedocError::TargetNotDirectory(path.to_path_buf()));
    }
    let canonical = path
        .canonicalize()
        .with_context(|| format!("canonicalizing target directory {:?}", path))?;
    // Surface permission problems now rather than on the first cycle.
    std::fs::read_dir(&canonical)
        .with_context(|| format!("reading target directory {:?}", canonical))?;
    Ok(canonical)
}

/// Make the output path absolute without requiring it to exist yet.
///
/// The deepest existing ancestor is canonicalized so that the "is the output
/// inside the tree" check sees the same prefix as the canonical root.
fn resolve_output(path: &Path) -> Result<PathBuf> {
    if path.is_dir() {
        return Err(TreedocError::Config(format!(
            "output path {:?} is a directory",
            path
        )));
    }

    let absolute = std::path::absolute(path)
        .with_context(|| format!("resolving output path {:?}", path))?;

    if absolute.file_name().is_none() {
        return Err(TreedocError::Config(format!(
            "output path {:?} has no file name",
            path
        )));
    }

    Ok(canonicalize_existing_prefix(&absolute))
}

fn canonicalize_existing_prefix(path: &Path) -> PathBuf {
    let mut existing = path;
    let mut rest = Vec::new();

    while !existing.exists() {
        match (existing.parent(), existing.file_name()) {
            (Some(parent), Some(name)) => {
                rest.push(name);
                existing = parent;
            }
            _ => return path.to_path_buf(),
        }
    }

    match existing.canonicalize() {
        Ok(mut canonical) => {
            canonical.extend(rest.iter().rev());
            canonical
        }
        Err(_) => path.to_path_buf(),
    }
}

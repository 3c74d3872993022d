// src/walk.rs

//! Recursive directory walk producing the rendered tree and the file list.

use std::ffi::OsString;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::trace;

use crate::rules::RuleList;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE_INDENT: &str = "│   ";
const SPACE_INDENT: &str = "    ";

/// A regular file reached by the walk, in traversal order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub path: PathBuf,
    /// Path relative to the scan root, `/`-separated.
    pub rel_path: String,
    pub name: String,
}

#[derive(Debug, Clone, Default)]
pub struct WalkOutput {
    /// Box-drawing tree, one line per visible entry, each ending in `\n`.
    pub tree: String,
    pub files: Vec<FileEntry>,
}

#[derive(Debug, Clone, Copy)]
pub struct WalkOptions<'a> {
    /// Fully-ignored rules; matching entries and their subtrees are skipped.
    pub ignored: &'a RuleList,
    /// Sort siblings by name; otherwise keep `read_dir` order.
    pub sort_entries: bool,
    /// Relative path that is always skipped (the output document).
    pub skip_rel: Option<&'a str>,
}

/// Walk `root` depth-first.
///
/// Hidden entries contribute nothing and are never descended into. Any IO
/// error aborts the whole walk.
pub fn walk(root: &Path, opts: &WalkOptions<'_>) -> Result<WalkOutput> {
    let mut out = WalkOutput::default();
    walk_dir(root, "", "", opts, &mut out)?;
    Ok(out)
}

fn walk_dir(
    dir: &Path,
    dir_rel: &str,
    prefix: &str,
    opts: &WalkOptions<'_>,
    out: &mut WalkOutput,
) -> Result<()> {
    let mut entries: Vec<(OsString, PathBuf)> = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("reading directory {:?}", dir))? {
        let entry = entry.with_context(|| format!("reading entry in {:?}", dir))?;
        entries.push((entry.file_name(), entry.path()));
    }

    if opts.sort_entries {
        entries.sort_by(|a, b| a.0.cmp(&b.0));
    }

    let visible: Vec<(String, String, PathBuf)> = entries
        .into_iter()
        .filter_map(|(name, path)| {
            let name = name.to_string_lossy().into_owned();
            let rel = join_rel(dir_rel, &name);
            if opts.skip_rel == Some(rel.as_str()) {
                return None;
            }
            if let Some(rule) = opts.ignored.matched_rule(&rel, &name) {
                trace!(path = %rel, rule = %rule.raw(), "entry hidden");
                return None;
            }
            Some((name, rel, path))
        })
        .collect();

    let count = visible.len();
    for (i, (name, rel, path)) in visible.into_iter().enumerate() {
        let is_last = i + 1 == count;
        let meta = fs::metadata(&path).with_context(|| format!("reading metadata of {:?}", path))?;

        let connector = if is_last { LAST_BRANCH } else { BRANCH };
        let _ = writeln!(out.tree, "{prefix}{connector}{name}");

        if meta.is_dir() {
            let child_prefix = format!("{prefix}{}", if is_last { SPACE_INDENT } else { PIPE_INDENT });
            walk_dir(&path, &rel, &child_prefix, opts, out)?;
        } else if meta.is_file() {
            out.files.push(FileEntry {
                path,
                rel_path: rel,
                name,
            });
        }
    }

    Ok(())
}

fn join_rel(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{parent}/{name}")
    }
}

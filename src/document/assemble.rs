// src/document/assemble.rs

use std::fs;

use anyhow::{Context, Result};

use crate::document::language::language_tag;
use crate::rules::RuleList;
use crate::walk::{FileEntry, WalkOutput};

pub const DOCUMENT_TITLE: &str = "# 项目文档";
pub const STRUCTURE_HEADING: &str = "## 项目的文件结构";
pub const CONTENT_HEADING: &str = "## 项目内容";
pub const REDACTED_MARKER: &str = "*(内容已屏蔽)*";

/// Counters reported after assembling a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DocumentStats {
    pub files: usize,
    pub redacted: usize,
}

/// Assembled document, ready to be written.
#[derive(Debug, Clone)]
pub struct Document {
    pub text: String,
    pub stats: DocumentStats,
}

/// Build the whole document in memory from a finished walk.
///
/// Files matched by `content_ignored` get a heading and the redaction
/// marker; everything else is read and embedded in a fenced block.
pub fn assemble(root_name: &str, walk: &WalkOutput, content_ignored: &RuleList) -> Result<Document> {
    let mut stats = DocumentStats::default();
    let mut sections = String::new();

    for file in &walk.files {
        stats.files += 1;
        if content_ignored.matches(&file.rel_path, &file.name) {
            stats.redacted += 1;
            push_redacted(&mut sections, file);
        } else {
            let content = read_text(file)?;
            push_content(&mut sections, file, &content);
        }
    }

    let text = format!(
        "{DOCUMENT_TITLE}\n\n{STRUCTURE_HEADING}\n\n```\n{root_name}\n{tree}\n```\n\n---\n\n{CONTENT_HEADING}\n{sections}\n",
        tree = walk.tree,
    );

    Ok(Document { text, stats })
}

/// Read a file as text. Invalid UTF-8 is replaced rather than rejected.
fn read_text(file: &FileEntry) -> Result<String> {
    let bytes = fs::read(&file.path).with_context(|| format!("reading file {:?}", file.path))?;
    Ok(match String::from_utf8(bytes) {
        Ok(s) => s,
        Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
    })
}

fn push_content(out: &mut String, file: &FileEntry, content: &str) {
    let lang = language_tag(&file.name);
    out.push_str("\n### ");
    out.push_str(&file.rel_path);
    out.push_str("\n\n```");
    out.push_str(lang);
    out.push('\n');
    out.push_str(content);
    out.push_str("\n```\n");
}

fn push_redacted(out: &mut String, file: &FileEntry) {
    out.push_str("\n### ");
    out.push_str(&file.rel_path);
    out.push_str("\n\n");
    out.push_str(REDACTED_MARKER);
    out.push('\n');
}

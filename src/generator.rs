// src/generator.rs

//! One regeneration cycle: walk → assemble → write.

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::config::Settings;
use crate::document::{assemble, write_atomic, Document, DocumentStats};
use crate::walk::{walk, WalkOptions};

/// Summary of a successful cycle, used for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegenerationReport {
    pub stats: DocumentStats,
    pub bytes: usize,
    pub elapsed: Duration,
}

/// Something that can rebuild the output document from scratch.
///
/// The runtime only talks to this trait, so tests can plug in a fake that
/// counts invocations or fails on demand.
pub trait Regenerate: Send + Sync + 'static {
    fn regenerate(&self) -> Result<RegenerationReport>;
}

/// The real generator, bound to one immutable [`Settings`].
#[derive(Debug, Clone)]
pub struct Generator {
    settings: Arc<Settings>,
}

impl Generator {
    pub fn new(settings: Arc<Settings>) -> Self {
        Self { settings }
    }

    /// Walk and assemble without touching the output file.
    pub fn render(&self) -> Result<Document> {
        let s = &self.settings;
        let opts = WalkOptions {
            ignored: &s.ignored,
            sort_entries: s.sort_entries,
            skip_rel: s.output_rel.as_deref(),
        };

        let tree = walk(&s.target_dir, &opts)
            .with_context(|| format!("walking {:?}", s.target_dir))?;
        debug!(files = tree.files.len(), "walk finished");

        assemble(&s.root_name, &tree, &s.content_ignored)
    }
}

impl Regenerate for Generator {
    /// Run a full cycle. The output is only written once the whole document
    /// has been assembled; on error the previous file is left untouched.
    fn regenerate(&self) -> Result<RegenerationReport> {
        let started = Instant::now();
        info!("generating markdown document");

        let doc = self.render()?;
        write_atomic(&self.settings.output_path, &doc.text)?;

        let report = RegenerationReport {
            stats: doc.stats,
            bytes: doc.text.len(),
            elapsed: started.elapsed(),
        };
        info!(
            output = %self.settings.output_path.display(),
            files = report.stats.files,
            redacted = report.stats.redacted,
            bytes = report.bytes,
            elapsed_ms = report.elapsed.as_millis() as u64,
            "markdown document updated"
        );
        Ok(report)
    }
}

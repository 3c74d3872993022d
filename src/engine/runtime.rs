// src/engine/runtime.rs

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use crate::engine::queue::RegenQueue;
use crate::generator::{Regenerate, RegenerationReport};

/// What kind of change a watch event describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Added,
    Changed,
    Removed,
}

/// Reason why a regeneration was requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerReason {
    FileWatch {
        kind: ChangeKind,
        path: PathBuf,
        directory: bool,
    },
    Manual,
}

/// Result of one regeneration cycle.
#[derive(Debug, Clone)]
pub enum CycleOutcome {
    Success(RegenerationReport),
    Failed(String),
}

/// Events sent into the runtime from the watcher, finished cycles, or
/// external signals.
#[derive(Debug, Clone)]
pub enum RuntimeEvent {
    RegenerationRequested { reason: TriggerReason },
    RegenerationFinished { outcome: CycleOutcome },
    ShutdownRequested,
}

#[derive(Debug, Clone, Default)]
pub struct RuntimeOptions {
    /// Exit as soon as no cycle is running and none is pending.
    /// In watch mode this should be `false`.
    pub exit_when_idle: bool,
}

/// Counters returned when the runtime stops.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RuntimeSummary {
    pub cycles: u64,
    pub failures: u64,
    pub coalesced: u64,
}

/// The main event loop.
///
/// Responsibilities:
/// - Consume `RuntimeEvent`s from the watcher and the Ctrl-C handler.
/// - Run at most one regeneration at a time on the blocking pool.
/// - Coalesce triggers that arrive mid-cycle into a single follow-up cycle.
/// - Log and swallow cycle failures; the next trigger is the retry.
pub struct Runtime<R: Regenerate> {
    generator: Arc<R>,
    queue: RegenQueue,
    options: RuntimeOptions,
    summary: RuntimeSummary,
    shutting_down: bool,

    events_rx: mpsc::Receiver<RuntimeEvent>,
    /// Used by running cycles to report back into the same loop.
    events_tx: mpsc::Sender<RuntimeEvent>,
}

impl<R: Regenerate> Runtime<R> {
    pub fn new(
        generator: Arc<R>,
        options: RuntimeOptions,
        events_rx: mpsc::Receiver<RuntimeEvent>,
        events_tx: mpsc::Sender<RuntimeEvent>,
    ) -> Self {
        Self {
            generator,
            queue: RegenQueue::new(),
            options,
            summary: RuntimeSummary::default(),
            shutting_down: false,
            events_rx,
            events_tx,
        }
    }

    pub async fn run(mut self) -> Result<RuntimeSummary> {
        info!("treedoc runtime started");

        while let Some(event) = self.events_rx.recv().await {
            debug!(?event, "runtime received event");

            let keep_running = match event {
                RuntimeEvent::RegenerationRequested { reason } => self.handle_request(reason),
                RuntimeEvent::RegenerationFinished { outcome } => self.handle_finished(outcome),
                RuntimeEvent::ShutdownRequested => self.handle_shutdown(),
            };

            if !keep_running {
                break;
            }
        }

        self.summary.coalesced = self.queue.coalesced();
        info!(
            cycles = self.summary.cycles,
            failures = self.summary.failures,
            "treedoc runtime exiting"
        );
        Ok(self.summary)
    }

    fn handle_request(&mut self, reason: TriggerReason) -> bool {
        match &reason {
            TriggerReason::FileWatch {
                kind,
                path,
                directory,
            } => {
                let entry = if *directory { "directory" } else { "path" };
                info!(?kind, entry, path = %path.display(), "filesystem change");
            }
            TriggerReason::Manual => info!("regeneration requested"),
        }

        if self.shutting_down {
            debug!("ignoring trigger during shutdown");
            return true;
        }

        if self.queue.record_trigger() {
            self.start_cycle();
        }
        true
    }

    fn handle_finished(&mut self, outcome: CycleOutcome) -> bool {
        self.summary.cycles += 1;
        match outcome {
            CycleOutcome::Success(report) => {
                debug!(?report, "regeneration cycle succeeded");
            }
            CycleOutcome::Failed(err) => {
                self.summary.failures += 1;
                error!(error = %err, "error while generating markdown document");
            }
        }

        if self.shutting_down {
            self.queue.clear_pending();
            self.queue.finish_cycle();
            info!("in-flight cycle finished, stopping runtime");
            return false;
        }

        if self.queue.finish_cycle() {
            self.start_cycle();
            return true;
        }

        if self.options.exit_when_idle {
            info!("runtime idle and exit_when_idle=true, stopping");
            return false;
        }
        true
    }

    fn handle_shutdown(&mut self) -> bool {
        info!("shutdown requested");
        if self.queue.is_idle() {
            return false;
        }
        // Let the running cycle finish so the output is never abandoned mid-write.
        self.shutting_down = true;
        self.queue.clear_pending();
        true
    }

    /// Run one cycle on the blocking pool and report back via `events_tx`.
    fn start_cycle(&mut self) {
        let generator = Arc::clone(&self.generator);
        let tx = self.events_tx.clone();

        tokio::spawn(async move {
            let outcome = match tokio::task::spawn_blocking(move || generator.regenerate()).await {
                Ok(Ok(report)) => CycleOutcome::Success(report),
                Ok(Err(err)) => CycleOutcome::Failed(format!("{err:#}")),
                Err(join_err) => CycleOutcome::Failed(format!("regeneration task panicked: {join_err}")),
            };

            if let Err(err) = tx.send(RuntimeEvent::RegenerationFinished { outcome }).await {
                warn!("failed to report finished cycle: {err}");
            }
        });
    }
}

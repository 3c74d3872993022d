// src/watch/watcher.rs

use std::sync::Arc;

use anyhow::Result;
use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;
use tracing::{debug, info, trace, warn};

use crate::config::Settings;
use crate::engine::{RuntimeEvent, TriggerReason};
use crate::watch::filter::{change_kind, is_directory_event, EventFilter, PathDecision};

/// Handle for the filesystem watcher.
///
/// This exists mainly so the underlying `RecommendedWatcher` is kept alive for
/// as long as needed. Dropping this handle will stop file watching.
pub struct WatcherHandle {
    _inner: RecommendedWatcher,
}

impl std::fmt::Debug for WatcherHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WatcherHandle").finish()
    }
}

/// Spawn a filesystem watcher on `settings.target_dir` that sends one
/// `RuntimeEvent::RegenerationRequested` per relevant changed path.
///
/// Only changes made after this call are reported; there is no initial
/// snapshot. Paths hidden by the fully-ignored rules, the root itself and
/// the output document are dropped here.
pub fn spawn_watcher(
    settings: Arc<Settings>,
    runtime_tx: mpsc::Sender<RuntimeEvent>,
) -> Result<WatcherHandle> {
    let root = settings.target_dir.clone();
    let filter = EventFilter::new(Arc::clone(&settings));

    // Channel from the blocking notify callback into the async world.
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<notify::Result<Event>>();

    let mut watcher = RecommendedWatcher::new(
        move |res: notify::Result<Event>| {
            if let Err(err) = event_tx.send(res) {
                // We can't log via tracing here reliably, so fall back to stderr.
                eprintln!("treedoc: failed to forward notify event: {err}");
            }
        },
        Config::default(),
    )?;

    watcher.watch(&root, RecursiveMode::Recursive)?;

    info!("watching directory {:?}", root);

    tokio::spawn(async move {
        while let Some(res) = event_rx.recv().await {
            let event = match res {
                Ok(event) => event,
                Err(err) => {
                    warn!(error = %err, "file watcher error");
                    continue;
                }
            };
            trace!(?event, "received notify event");

            let Some(kind) = change_kind(&event.kind) else {
                continue;
            };
            let directory = is_directory_event(&event.kind);

            for path in event.paths {
                match filter.classify(&path) {
                    PathDecision::Accept(rel) => {
                        debug!(?kind, path = %rel, "watch match -> regenerating");
                        let reason = TriggerReason::FileWatch {
                            kind,
                            path: rel.into(),
                            directory,
                        };
                        if let Err(err) = runtime_tx
                            .send(RuntimeEvent::RegenerationRequested { reason })
                            .await
                        {
                            warn!("failed to send RuntimeEvent::RegenerationRequested: {err}");
                            // If the runtime channel is closed, there's no point
                            // keeping the watcher loop alive.
                            return;
                        }
                    }
                    PathDecision::Ignored(rule) => {
                        debug!(path = ?path, rule = %rule, "event on ignored path dropped");
                    }
                    other => {
                        trace!(path = ?path, decision = ?other, "event dropped");
                    }
                }
            }
        }

        debug!("file watcher loop ended");
    });

    Ok(WatcherHandle { _inner: watcher })
}

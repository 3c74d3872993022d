// src/engine/queue.rs

use tracing::debug;

/// Single-slot coalescing queue for regeneration cycles.
///
/// Semantics:
/// - When idle, a trigger starts a cycle immediately.
/// - While a cycle runs, a trigger only marks the queue dirty. Any number of
///   further triggers collapse into that same pending cycle.
/// - When a cycle finishes and the queue is dirty, exactly one more cycle is
///   started; otherwise the queue goes idle.
///
/// Every cycle is a full rebuild, so one pending run is always enough to
/// reflect the latest state of the tree.
#[derive(Debug, Default)]
pub struct RegenQueue {
    running: bool,
    dirty: bool,
    coalesced: u64,
}

impl RegenQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// True if no cycle is running.
    pub fn is_idle(&self) -> bool {
        !self.running
    }

    /// True if a follow-up cycle is pending.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Number of triggers absorbed into an already pending cycle.
    pub fn coalesced(&self) -> u64 {
        self.coalesced
    }

    /// Record a trigger. Returns true if the caller should start a cycle now.
    pub fn record_trigger(&mut self) -> bool {
        if !self.running {
            self.running = true;
            return true;
        }

        if self.dirty {
            self.coalesced += 1;
            debug!(coalesced = self.coalesced, "trigger merged into pending cycle");
        } else {
            self.dirty = true;
            debug!("cycle running; follow-up cycle queued");
        }
        false
    }

    /// Record that the running cycle ended. Returns true if the caller should
    /// immediately start the pending follow-up cycle.
    pub fn finish_cycle(&mut self) -> bool {
        if self.dirty {
            self.dirty = false;
            self.running = true;
            true
        } else {
            self.running = false;
            false
        }
    }

    /// Drop any pending follow-up cycle (used on shutdown).
    pub fn clear_pending(&mut self) {
        self.dirty = false;
    }
}

// src/engine/mod.rs

//! Orchestration engine for treedoc.
//!
//! This module ties together:
//! - the coalescing regeneration queue (what happens when changes arrive
//!   while a cycle is running)
//! - the main runtime event loop that reacts to:
//!   - file-watch triggers
//!   - finished regeneration cycles
//!   - shutdown signals

pub mod queue;
pub mod runtime;

pub use queue::RegenQueue;
pub use runtime::{
    ChangeKind, CycleOutcome, Runtime, RuntimeEvent, RuntimeOptions, RuntimeSummary,
    TriggerReason,
};

// src/watch/mod.rs

//! File watching and change filtering.
//!
//! This module is responsible for:
//! - Wiring up a cross-platform filesystem watcher (`notify`).
//! - Dropping events on fully-ignored paths, the root and our own output,
//!   using the same rules as the tree walk.
//!
//! It does **not** regenerate anything itself; it only turns filesystem
//! changes into runtime triggers.

pub mod filter;
pub mod watcher;

pub use filter::{change_kind, relative_str, EventFilter, PathDecision};
pub use watcher::{spawn_watcher, WatcherHandle};

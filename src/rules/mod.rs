// src/rules/mod.rs

//! Path matching for the two filter lists.
//!
//! A rule is either a *directory rule* (`node_modules/`), which hides any
//! path containing a segment equal to its name, or a *file rule* (`pom.xml`,
//! `*.log`), which is compared against the entry name only.
//!
//! The same engine backs both the fully-ignored list (structure + content)
//! and the content-only list (redacted bodies); the two lists never interact.

pub mod list;
pub mod rule;

pub use list::RuleList;
pub use rule::{Rule, RuleKind};

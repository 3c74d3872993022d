// src/document/mod.rs

//! Markdown document assembly and output.
//!
//! - [`assemble`] turns a finished walk into the full document text.
//! - [`language`] holds the extension → fence tag map.
//! - [`output`] writes the result atomically.

pub mod assemble;
pub mod language;
pub mod output;

pub use assemble::{assemble, Document, DocumentStats, REDACTED_MARKER};
pub use language::language_tag;
pub use output::{write_atomic, TEMP_FILE_PREFIX};

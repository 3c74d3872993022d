// src/errors.rs

//! Crate-wide error types.
//!
//! Fatal startup problems (missing scan root, bad configuration) are typed so
//! callers and tests can match on them. Failures inside a regeneration cycle
//! stay plain `anyhow::Error`s with context; they are logged, never fatal.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TreedocError {
    #[error("target directory {0:?} does not exist")]
    TargetMissing(PathBuf),

    #[error("target path {0:?} is not a directory")]
    TargetNotDirectory(PathBuf),

    #[error("invalid rule {rule:?} in {list}: {reason}")]
    InvalidRule {
        list: String,
        rule: String,
        reason: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, TreedocError>;

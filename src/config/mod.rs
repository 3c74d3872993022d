// src/config/mod.rs

//! Configuration loading and validation for treedoc.
//!
//! Responsibilities:
//! - Hold the built-in defaults (`defaults.rs`).
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a config file from disk (`loader.rs`).
//! - Validate rule lists and paths (`validate.rs`).
//! - Resolve CLI overrides into immutable [`Settings`] (`settings.rs`).

pub mod defaults;
pub mod loader;
pub mod model;
pub mod settings;
pub mod validate;

pub use loader::{anchor_paths, config_root_dir, load_and_validate, load_from_path, load_optional};
pub use model::{ConfigFile, ConfigSection, IgnoreSection};
pub use settings::Settings;
pub use validate::validate_config;

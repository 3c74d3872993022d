// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::config::defaults::DEFAULT_CONFIG_FILE;
use crate::config::model::ConfigFile;
use crate::config::validate::validate_config;
use crate::errors::Result;

/// Load a configuration file from a given path and return the raw `ConfigFile`.
///
/// This only performs TOML deserialization; use [`load_and_validate`] for
/// the semantic checks.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .with_context(|| format!("reading config file at {:?}", path))?;

    let config: ConfigFile = toml::from_str(&contents)?;
    Ok(config)
}

/// Load a configuration file from path and run validation.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let config = load_from_path(&path)?;
    validate_config(&config)?;
    Ok(config)
}

/// Resolve which config file to use, if any.
///
/// - An explicit `--config` path must exist.
/// - Otherwise `Treedoc.toml` in the working directory is used if present.
/// - Otherwise the built-in defaults apply.
///
/// Relative paths inside a loaded file are anchored to the file's directory.
pub fn load_optional(explicit: Option<&Path>) -> Result<ConfigFile> {
    match explicit {
        Some(path) => load_anchored(path),
        None => {
            let path = default_config_path();
            if path.is_file() {
                load_anchored(&path)
            } else {
                let config = ConfigFile::default();
                validate_config(&config)?;
                Ok(config)
            }
        }
    }
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from(DEFAULT_CONFIG_FILE)
}

fn load_anchored(path: &Path) -> Result<ConfigFile> {
    let mut config = load_and_validate(path)?;
    anchor_paths(&mut config, &config_root_dir(path));
    Ok(config)
}

/// Directory that relative paths in the config file at `config_path` refer to.
pub fn config_root_dir(config_path: &Path) -> PathBuf {
    config_path
        .parent()
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Rewrite relative `target_directory` and `output_markdown_path` so they
/// are relative to `root` instead of the working directory.
pub fn anchor_paths(config: &mut ConfigFile, root: &Path) {
    let section = &mut config.config;
    for slot in [&mut section.target_directory, &mut section.output_markdown_path] {
        if let Some(value) = slot.as_mut() {
            if Path::new(value.as_str()).is_relative() {
                *value = root.join(value.as_str()).to_string_lossy().into_owned();
            }
        }
    }
}


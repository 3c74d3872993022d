// src/config/validate.rs

use crate::config::model::ConfigFile;
use crate::errors::{Result, TreedocError};

/// Run semantic validation against a loaded configuration.
///
/// This checks:
/// - no rule in either effective list is blank (or only `/` / `./`)
/// - a configured output path is not empty
///
/// Whether the target directory exists is checked later, once CLI
/// overrides have been applied.
pub fn validate_config(cfg: &ConfigFile) -> Result<()> {
    validate_rules("ignored_paths", &cfg.ignore.effective_paths())?;
    validate_rules("ignored_content_paths", &cfg.ignore.effective_content())?;
    validate_output(cfg)?;
    Ok(())
}

fn validate_rules(list: &str, rules: &[String]) -> Result<()> {
    for rule in rules {
        let body = rule.trim();
        let body = body.strip_prefix("./").unwrap_or(body);
        let body = body.strip_suffix('/').unwrap_or(body);
        if body.is_empty() {
            return Err(TreedocError::InvalidRule {
                list: list.to_string(),
                rule: rule.clone(),
                reason: "rule has an empty name".to_string(),
            });
        }
    }
    Ok(())
}

fn validate_output(cfg: &ConfigFile) -> Result<()> {
    if let Some(out) = &cfg.config.output_markdown_path {
        if out.trim().is_empty() {
            return Err(TreedocError::Config(
                "[config].output_markdown_path must not be empty".to_string(),
            ));
        }
    }
    if let Some(target) = &cfg.config.target_directory {
        if target.trim().is_empty() {
            return Err(TreedocError::Config(
                "[config].target_directory must not be empty".to_string(),
            ));
        }
    }
    Ok(())
}

#![allow(dead_code)]

use std::fs;
use std::path::Path;
use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};
use treedoc::config::{ConfigFile, ConfigSection, IgnoreSection, Settings};

static INIT: Once = Once::new();

/// Initialise tracing for tests.
///
/// Uses `with_test_writer()`, so output only shows up for failing tests
/// (unless run with `-- --nocapture`). Enable levels with `RUST_LOG=debug`.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .init();
    });
}

/// Config that uses exactly the given rule lists, with sorting enabled.
pub fn config_with_rules(paths: &[&str], content: &[&str]) -> ConfigFile {
    ConfigFile {
        config: ConfigSection {
            target_directory: None,
            output_markdown_path: None,
            sort_entries: Some(true),
        },
        ignore: IgnoreSection {
            paths: Some(paths.iter().map(|s| s.to_string()).collect()),
            content: Some(content.iter().map(|s| s.to_string()).collect()),
            append_default_paths: false,
            append_default_content: false,
        },
    }
}

pub fn settings_for(
    root: &Path,
    output: &Path,
    paths: &[&str],
    content: &[&str],
) -> Result<Settings, Box<dyn std::error::Error>> {
    let cfg = config_with_rules(paths, content);
    let settings = Settings::resolve(
        &cfg,
        Some(root.to_str().ok_or("non-utf8 root")?),
        Some(output.to_str().ok_or("non-utf8 output")?),
    )?;
    Ok(settings)
}

/// Write `contents` to `root/rel`, creating parent directories.
pub fn write_file(root: &Path, rel: &str, contents: &str) -> std::io::Result<()> {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents)
}

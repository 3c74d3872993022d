// src/document/output.rs

use std::fs::{self, Permissions};
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use tempfile::Builder;

/// Prefix of the temporary file created next to the output while writing.
pub const TEMP_FILE_PREFIX: &str = ".treedoc-";

/// Replace `path` with `contents` in one step.
///
/// Parent directories are created as needed. The data goes to a temporary
/// file next to the target which is then renamed over it, so readers never
/// observe a half-written document.
///
/// The replacement keeps the mode of the file it replaces. A brand new file
/// gets the same mode a plain create would give it (`0o666` minus umask).
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    fs::create_dir_all(parent)
        .with_context(|| format!("creating output directory {:?}", parent))?;

    let existing = fs::metadata(path).ok().map(|meta| meta.permissions());

    let mut builder = Builder::new();
    builder.prefix(TEMP_FILE_PREFIX);
    if existing.is_none() {
        if let Some(perms) = fresh_file_permissions() {
            builder.permissions(perms);
        }
    }

    let mut tmp = builder
        .tempfile_in(parent)
        .with_context(|| format!("creating temporary file in {:?}", parent))?;
    tmp.write_all(contents.as_bytes())
        .with_context(|| format!("writing temporary file for {:?}", path))?;
    tmp.flush()?;

    if let Some(perms) = existing {
        tmp.as_file()
            .set_permissions(perms)
            .with_context(|| format!("copying permissions of {:?}", path))?;
    }

    tmp.persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("replacing output file {:?}", path))?;
    Ok(())
}

/// Mode requested for a new output file. The kernel applies the umask to it
/// at creation time.
#[cfg(unix)]
fn fresh_file_permissions() -> Option<Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(Permissions::from_mode(0o666))
}

#[cfg(not(unix))]
fn fresh_file_permissions() -> Option<Permissions> {
    None
}

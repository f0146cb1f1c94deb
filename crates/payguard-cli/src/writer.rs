use std::{
    fs,
    io::BufWriter,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use tempfile::NamedTempFile;

/// Where to write a generated file.
///
/// `path` may be an existing directory (the default `filename` is joined
/// onto it), a path ending in a separator (created as a directory), or a file
/// path whose missing parents are created. `None` means the current directory.
pub fn resolve_file_path(path: Option<&str>, filename: &str) -> Result<PathBuf> {
    let base_path = path.unwrap_or(".");
    let path = Path::new(base_path);

    let output_path = if path.exists() {
        if path.is_dir() {
            path.join(filename)
        } else {
            path.to_path_buf()
        }
    } else if base_path.ends_with('/') || base_path.ends_with('\\') {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory: {}", path.display()))?;
        path.join(filename)
    } else {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create directory: {}", parent.display())
                })?;
            }
        }
        path.to_path_buf()
    };
    Ok(output_path)
}

pub fn write_file(path: Option<&str>, filename: &str, contents: &str) -> Result<PathBuf> {
    let output_path = resolve_file_path(path, filename)?;
    fs::write(&output_path, contents)
        .with_context(|| format!("Failed to write file: {}", output_path.display()))?;
    Ok(output_path)
}

/// Write through a temporary file next to `path` and move it into place only
/// when `write` succeeds. On failure any existing file at `path` is untouched.
pub fn write_staged<T>(
    path: &Path,
    write: impl FnOnce(&mut BufWriter<NamedTempFile>) -> Result<T>,
) -> Result<T> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let staged = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create file in: {}", dir.display()))?;
    let mut writer = BufWriter::new(staged);
    let value = write(&mut writer)?;
    let staged = writer
        .into_inner()
        .map_err(|e| e.into_error())
        .with_context(|| format!("Failed to write file: {}", path.display()))?;
    staged
        .persist(path)
        .with_context(|| format!("Failed to write file: {}", path.display()))?;
    Ok(value)
}

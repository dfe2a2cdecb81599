use crate::log_debug;
use crate::schemas::errors::{InstallerError, Result};
use colored::Colorize;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

/// Reads a text file, treating a missing file as absent rather than as an error.
///
/// # Returns
/// * `Ok(None)` if the file does not exist
/// * `Ok(Some(content))` with the whole file otherwise
pub fn read_if_exists(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(InstallerError::FileRead {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Appends `text` to the file at `path`, creating it if needed.
///
/// Each call is its own open/write/close cycle: no handle outlives the call and
/// existing content is never truncated.
pub fn append_text(path: &Path, text: &str) -> Result<()> {
    let to_write_error = |source| InstallerError::FileWrite {
        path: path.to_path_buf(),
        source,
    };

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(to_write_error)?;
    file.write_all(text.as_bytes()).map_err(to_write_error)?;
    file.sync_all().map_err(to_write_error)?;

    log_debug!(
        "[Files] Appended {} bytes to {}",
        text.len(),
        path.display().to_string().yellow()
    );
    Ok(())
}

/// Replaces the whole content of `path`, used for in-place rewrites of managed regions.
pub fn rewrite_text(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text).map_err(|source| InstallerError::FileWrite {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes `bytes` to `path` exactly as given, creating missing parent directories.
/// On Unix the file mode is set to `mode` so other tools and IDEs can read it.
pub fn write_file(path: &Path, bytes: &[u8], mode: u32) -> Result<()> {
    let to_write_error = |source| InstallerError::FileWrite {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(to_write_error)?;
    }
    fs::write(path, bytes).map_err(to_write_error)?;

    #[cfg(unix)]
    fs::set_permissions(path, fs::Permissions::from_mode(mode)).map_err(to_write_error)?;
    #[cfg(not(unix))]
    let _ = mode;

    Ok(())
}

/// Checks whether the lines of `needle` appear consecutively in `haystack`.
/// Lines are compared with surrounding whitespace trimmed, blank lines at either end of
/// the needle are ignored.
pub fn contains_multiline_block(haystack: &str, needle: &str) -> bool {
    let haystack_lines: Vec<&str> = haystack.lines().map(str::trim).collect();
    let needle_lines: Vec<&str> = needle.trim_matches('\n').lines().map(str::trim).collect();

    if needle_lines.is_empty() {
        return true;
    }
    if haystack_lines.len() < needle_lines.len() {
        return false;
    }

    haystack_lines
        .windows(needle_lines.len())
        .any(|window| window == needle_lines.as_slice())
}

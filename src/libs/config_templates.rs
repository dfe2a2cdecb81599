// Copies the configuration files bundled with the installer into the project.
// The bytes are compiled into the binary and written as they are, straight to the host
// project directory; no shell is involved, so template content never needs escaping.

use colored::Colorize;
use std::path::{Path, PathBuf};

use crate::libs::utilities::file_operations::write_file;
use crate::schemas::errors::{InstallerError, Result};
use crate::{log_info, log_warn};

/// Mode given to copied configuration files.
pub const CONFIG_FILE_MODE: u32 = 0o644;

/// A configuration file shipped inside the binary.
#[derive(Debug, Clone, Copy)]
pub struct ConfigTemplate {
    /// Destination relative to the project root, e.g. `build/console.php`.
    pub destination: &'static str,
    pub bytes: &'static [u8],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    Written(PathBuf),
    /// The file already had exactly the template's content.
    Unchanged(PathBuf),
    /// The file exists with other content and overwriting was not requested.
    KeptExisting(PathBuf),
}

/// Writes `template` below `project_root`.
///
/// An existing file with different content is only replaced when `overwrite` is set.
pub fn copy_template(project_root: &Path, template: &ConfigTemplate, overwrite: bool) -> Result<CopyOutcome> {
    let destination = project_root.join(template.destination);

    if destination.exists() {
        let current = std::fs::read(&destination).map_err(|source| InstallerError::FileRead {
            path: destination.clone(),
            source,
        })?;
        if current == template.bytes {
            log_info!(
                "[Config] {} is already up to date",
                template.destination.green()
            );
            return Ok(CopyOutcome::Unchanged(destination));
        }
        if !overwrite {
            log_warn!(
                "[Config] {} already exists, keeping it (use --overwrite-configs to replace it)",
                template.destination.yellow()
            );
            return Ok(CopyOutcome::KeptExisting(destination));
        }
    }

    write_file(&destination, template.bytes, CONFIG_FILE_MODE)?;
    log_info!(
        "[Config] Wrote {}",
        destination.display().to_string().green()
    );
    Ok(CopyOutcome::Written(destination))
}

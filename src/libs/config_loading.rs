use colored::Colorize;
use std::fs;
use std::path::Path;

use crate::libs::utilities::path_helpers::expand_tilde;
use crate::log_debug;
use crate::schemas::errors::{InstallerError, Result};
use crate::schemas::install_config::Answers;

/// Loads a YAML answers file.
///
/// Every key is optional; keys the installer does not know are rejected so a typo does
/// not silently fall back to a default. `~` in the path is expanded.
pub fn load_answers(path: &Path) -> Result<Answers> {
    let path = Path::new(&expand_tilde(&path.to_string_lossy())).to_path_buf();
    log_debug!(
        "[Config] Loading answers from {}",
        path.display().to_string().cyan()
    );

    let contents = fs::read_to_string(&path).map_err(|source| InstallerError::AnswersRead {
        path: path.clone(),
        source,
    })?;
    if contents.trim().is_empty() {
        return Ok(Answers::default());
    }

    let answers: Answers =
        serde_yaml::from_str(&contents).map_err(|source| InstallerError::AnswersParse {
            path: path.clone(),
            source,
        })?;
    log_debug!("[Config] Answers from file: {:?}", answers);
    Ok(answers)
}

// This module detects whether the project runs on Docker Compose. It looks for a compose
// file in the project root and, if one exists, reads the names of the services it declares
// so the form can offer them as choices.

use colored::Colorize;
use serde_yaml::Value;
use std::fs;
use std::path::{Path, PathBuf};

use crate::schemas::errors::{InstallerError, Result};
use crate::{log_debug, log_info};

/// Compose file names, checked in this order. The first one found wins.
pub const COMPOSE_FILE_CANDIDATES: [&str; 4] = [
    "docker-compose.yml",
    "docker-compose.yaml",
    "compose.yml",
    "compose.yaml",
];

/// A compose file found in the project, with its services.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposeProject {
    /// Full path of the detected compose file.
    pub file: PathBuf,
    /// Service names, sorted alphabetically, without duplicates.
    pub services: Vec<String>,
}

/// Looks for a compose file in `project_root` and parses its services.
///
/// # Returns
/// * `Ok(None)` if none of the candidate files exist.
/// * `Ok(Some(project))` for the first candidate found.
/// * `Err(..)` if that file cannot be read or does not have the expected shape.
pub fn detect(project_root: &Path) -> Result<Option<ComposeProject>> {
    let Some(file) = find_compose_file(project_root) else {
        log_debug!(
            "[Probe] No compose file in {}",
            project_root.display().to_string().cyan()
        );
        return Ok(None);
    };

    log_info!(
        "[Probe] Found compose file: {}",
        file.display().to_string().green()
    );

    let services = read_services(&file)?;
    log_debug!("[Probe] Compose services: {:?}", services);

    Ok(Some(ComposeProject { file, services }))
}

fn find_compose_file(project_root: &Path) -> Option<PathBuf> {
    COMPOSE_FILE_CANDIDATES
        .iter()
        .map(|name| project_root.join(name))
        .find(|candidate| candidate.is_file())
}

/// Reads and parses `file`, returning the keys of its top-level `services` mapping.
pub fn read_services(file: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(file).map_err(|source| InstallerError::ComposeRead {
        path: file.to_path_buf(),
        source,
    })?;
    parse_services(file, &content)
}

/// A missing `services` key (or `services: ~`) is read as zero services. Anything other
/// than a mapping under `services` is an error.
fn parse_services(file: &Path, content: &str) -> Result<Vec<String>> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    let document: Value = serde_yaml::from_str(content).map_err(|source| {
        InstallerError::ComposeParse {
            path: file.to_path_buf(),
            source,
        }
    })?;

    let services = match &document {
        Value::Null => return Ok(Vec::new()),
        Value::Mapping(root) => root.get("services"),
        _ => {
            return Err(InstallerError::ComposeNotMapping {
                path: file.to_path_buf(),
            });
        }
    };

    let mapping = match services {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Mapping(mapping)) => mapping,
        Some(_) => {
            return Err(InstallerError::ComposeServicesNotMapping {
                path: file.to_path_buf(),
            });
        }
    };

    let mut names = mapping
        .keys()
        .map(|key| {
            key.as_str()
                .map(str::to_string)
                .ok_or_else(|| InstallerError::ComposeServiceName {
                    path: file.to_path_buf(),
                })
        })
        .collect::<Result<Vec<String>>>()?;

    names.sort();
    names.dedup();
    Ok(names)
}

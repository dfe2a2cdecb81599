// This file contains the logic for the `php-tooling services` command: it runs the same
// compose-file detection the installer uses and prints what it found.

use anyhow::Context;
use colored::Colorize;
use serde::Serialize;
use std::path::PathBuf;

use crate::libs::environment_probe::{self, ComposeProject};
use crate::libs::working_directory::current_dir;
use crate::log_warn;

/// Machine-readable output of `services --json`.
#[derive(Debug, Serialize, PartialEq, Eq)]
struct ServicesOutput {
    compose_file: Option<PathBuf>,
    services: Vec<String>,
}

impl From<Option<ComposeProject>> for ServicesOutput {
    fn from(project: Option<ComposeProject>) -> Self {
        match project {
            Some(project) => Self {
                compose_file: Some(project.file),
                services: project.services,
            },
            None => Self {
                compose_file: None,
                services: Vec::new(),
            },
        }
    }
}

pub fn run(project_dir: Option<PathBuf>, json: bool) -> anyhow::Result<()> {
    let root = match project_dir {
        Some(dir) => dir,
        None => current_dir()?,
    };
    let output = ServicesOutput::from(
        environment_probe::detect(&root).context("could not read the project's compose file")?,
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    match &output.compose_file {
        Some(file) => {
            println!("{}", file.display().to_string().bold());
            for service in &output.services {
                println!("  {}", service.green());
            }
        }
        None => log_warn!(
            "[Probe] No compose file found in {}",
            root.display().to_string().yellow()
        ),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_shape_lists_file_and_services() {
        let output = ServicesOutput::from(Some(ComposeProject {
            file: PathBuf::from("/p/compose.yaml"),
            services: vec!["app".into(), "db".into()],
        }));

        let json: serde_json::Value = serde_json::to_value(&output).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "compose_file": "/p/compose.yaml",
                "services": ["app", "db"],
            })
        );
    }

    #[test]
    fn missing_compose_file_serializes_as_null() {
        let json = serde_json::to_value(ServicesOutput::from(None)).unwrap();
        assert_eq!(json, serde_json::json!({ "compose_file": null, "services": [] }));
    }

    #[test]
    fn run_reports_projects_without_compose_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(run(Some(dir.path().to_path_buf()), true).is_ok());
    }
}

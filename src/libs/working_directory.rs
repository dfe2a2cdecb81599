// Resolves the directory commands effectively run in. On the host that is the project
// root; inside a container it is whatever `pwd` reports there, which usually differs
// (e.g. `/var/www/html`).

use colored::Colorize;
use std::path::{Path, PathBuf};

use crate::libs::command_executor::{Executor, tokens};
use crate::libs::utilities::path_helpers::{expand_tilde, join_clean};
use crate::log_debug;
use crate::schemas::errors::Result;

pub struct WorkingDirectoryResolver<'a> {
    executor: &'a Executor<'a>,
    project_root: PathBuf,
}

impl<'a> WorkingDirectoryResolver<'a> {
    pub fn new(executor: &'a Executor<'a>, project_root: &Path) -> Self {
        Self {
            executor,
            project_root: project_root.to_path_buf(),
        }
    }

    /// The logical working directory.
    ///
    /// In container mode every call runs `pwd` in the container again; nothing is cached.
    pub fn resolve(&self) -> Result<PathBuf> {
        if !self.executor.mode().uses_container() {
            return Ok(self.project_root.clone());
        }

        let output = self.executor.capture(&tokens(["pwd"]))?;
        let working_dir = PathBuf::from(output.trim());
        log_debug!(
            "[WorkDir] Container working directory: {}",
            working_dir.display().to_string().cyan()
        );
        Ok(working_dir)
    }

    /// Absolute tools root: the working directory joined with `tools_dir` (`~` expanded).
    pub fn tools_root(&self, tools_dir: &str) -> Result<PathBuf> {
        Ok(join_clean(&self.resolve()?, &expand_tilde(tools_dir)))
    }
}

/// Returns the directory the installer was started from.
pub fn current_dir() -> Result<PathBuf> {
    std::env::current_dir().map_err(crate::schemas::errors::InstallerError::WorkingDirectory)
}

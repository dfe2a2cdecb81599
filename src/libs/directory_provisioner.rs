// Creates the tools root and the per-tool directories below it. Directories are made with
// `mkdir -p` through the executor so they appear wherever commands run (host or container).

use std::path::PathBuf;

use crate::libs::command_executor::{Executor, tokens};
use crate::libs::utilities::path_helpers::{display, expand_tilde, join_clean};
use crate::libs::working_directory::WorkingDirectoryResolver;
use crate::schemas::errors::Result;

/// What a relative path passed to [`DirectoryProvisioner::provision`] is relative to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryKind {
    /// Relative to the working directory (used for the tools root itself).
    Parent,
    /// Relative to the tools root (used for one tool's directory).
    Tool,
}

pub struct DirectoryProvisioner<'a> {
    executor: &'a Executor<'a>,
    resolver: &'a WorkingDirectoryResolver<'a>,
    tools_dir: String,
}

impl<'a> DirectoryProvisioner<'a> {
    pub fn new(
        executor: &'a Executor<'a>,
        resolver: &'a WorkingDirectoryResolver<'a>,
        tools_dir: &str,
    ) -> Self {
        Self {
            executor,
            resolver,
            tools_dir: tools_dir.to_string(),
        }
    }

    /// Creates `relative` (recursively, existing directories are fine) and returns its
    /// absolute path.
    pub fn provision(&self, kind: DirectoryKind, relative: &str) -> Result<PathBuf> {
        let base = match kind {
            DirectoryKind::Parent => self.resolver.resolve()?,
            DirectoryKind::Tool => self.resolver.tools_root(&self.tools_dir)?,
        };
        let full_path = join_clean(&base, &expand_tilde(relative));

        self.executor
            .run(&tokens(["mkdir".to_string(), "-p".to_string(), display(&full_path)]))?;

        Ok(full_path)
    }
}

//! # Install Configuration
//!
//! The user's answers come from up to three places: an answers file, command-line flags
//! and the interactive form. [`Answers`] is the partial, mergeable shape shared by all of
//! them; [`InstallConfig`] is the complete value built once from the merged answers and
//! handed to every component afterwards. Nothing mutates it once it exists.
//!
//! ## Answers file
//!
//! ```yaml
//! docker: true
//! service: app
//! variant: exec
//! tools_dir: ./tools
//! tools: [phpcs, phpstan]
//! overwrite_configs: false
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::schemas::errors::{InstallerError, Result};
use crate::schemas::execution::{CommandVariant, ExecutionMode};
use crate::schemas::tools::{Tool, dedup_in_order};

/// Tools root used when nobody says otherwise.
pub const DEFAULT_TOOLS_DIR: &str = "./tools";

/// A possibly incomplete set of answers. Later sources override earlier ones field by field.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Answers {
    pub docker: Option<bool>,
    pub service: Option<String>,
    pub variant: Option<CommandVariant>,
    pub tools_dir: Option<String>,
    pub tools: Option<Vec<Tool>>,
    pub overwrite_configs: Option<bool>,
}

impl Answers {
    /// Field-wise overlay: every answer present in `other` wins.
    pub fn merge(self, other: Answers) -> Answers {
        Answers {
            docker: other.docker.or(self.docker),
            service: other.service.or(self.service),
            variant: other.variant.or(self.variant),
            tools_dir: other.tools_dir.or(self.tools_dir),
            tools: other.tools.or(self.tools),
            overwrite_configs: other.overwrite_configs.or(self.overwrite_configs),
        }
    }

    /// Completes the answers into an [`InstallConfig`], falling back to defaults.
    ///
    /// `docker_default` is what to assume when nobody answered the Docker question,
    /// normally whether a compose file was detected.
    pub fn into_config(self, project_root: PathBuf, docker_default: bool) -> Result<InstallConfig> {
        let execution = if self.docker.unwrap_or(docker_default) {
            let service = self
                .service
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .ok_or(InstallerError::MissingService)?;
            ExecutionMode::Container {
                service,
                variant: self.variant.unwrap_or_default(),
            }
        } else {
            ExecutionMode::Host
        };

        let tools_dir = self
            .tools_dir
            .map(|dir| dir.trim().to_string())
            .filter(|dir| !dir.is_empty())
            .unwrap_or_else(|| DEFAULT_TOOLS_DIR.to_string());

        // `~` is expanded on the host, so it cannot name a directory inside a container.
        if execution.uses_container() && (tools_dir == "~" || tools_dir.starts_with("~/")) {
            return Err(InstallerError::HomeDirInContainer { tools_dir });
        }

        Ok(InstallConfig {
            project_root,
            execution,
            tools_dir,
            tools: dedup_in_order(self.tools.unwrap_or_default()),
            overwrite_configs: self.overwrite_configs.unwrap_or(false),
        })
    }
}

/// Everything an installation run needs, fixed before the first command runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstallConfig {
    /// Host directory holding the project (compose file, recipe file, ignore file, configs).
    pub project_root: PathBuf,
    /// Host or container execution.
    pub execution: ExecutionMode,
    /// Tools root as the user entered it, relative to the working directory or absolute.
    pub tools_dir: String,
    /// Tools to install, in selection order, without duplicates.
    pub tools: Vec<Tool>,
    /// Replace configuration files that already exist in the project.
    pub overwrite_configs: bool,
}

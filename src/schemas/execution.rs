//! # Execution Mode
//!
//! Describes *where* external commands run: directly on the host, or inside a compose
//! service container. The mode is chosen once, before anything is installed, and every
//! command and every generated recipe derives its prefix from it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Program used for every container invocation.
pub const CONTAINER_CLI: &str = "docker";

/// How commands reach the service container.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandVariant {
    /// `docker compose exec <service>`: run inside the already running container.
    #[default]
    Exec,
    /// `docker compose run --rm <service>`: start a throwaway container per command.
    Run,
}

impl CommandVariant {
    pub const ALL: [CommandVariant; 2] = [CommandVariant::Exec, CommandVariant::Run];
}

impl FromStr for CommandVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "exec" => Ok(CommandVariant::Exec),
            "run" => Ok(CommandVariant::Run),
            _ => Err(format!(
                "Invalid command variant '{s}'. Must be one of: exec, run"
            )),
        }
    }
}

impl fmt::Display for CommandVariant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CommandVariant::Exec => write!(f, "exec"),
            CommandVariant::Run => write!(f, "run"),
        }
    }
}

/// Where commands run. The service and variant only exist in container mode, so the
/// type cannot express a service name without Docker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum ExecutionMode {
    Host,
    Container {
        service: String,
        variant: CommandVariant,
    },
}

impl ExecutionMode {
    pub fn uses_container(&self) -> bool {
        matches!(self, ExecutionMode::Container { .. })
    }

    /// Arguments placed between the container CLI and the wrapped command.
    ///
    /// * `exec` → `compose exec <service>`
    /// * `run`  → `compose run --rm <service>`
    ///
    /// Returns `None` in host mode.
    pub fn container_prefix(&self) -> Option<Vec<String>> {
        match self {
            ExecutionMode::Host => None,
            ExecutionMode::Container { service, variant } => {
                let prefix = match variant {
                    CommandVariant::Exec => vec!["compose", "exec", service.as_str()],
                    CommandVariant::Run => vec!["compose", "run", "--rm", service.as_str()],
                };
                Some(prefix.into_iter().map(String::from).collect())
            }
        }
    }

    /// The string a recipe uses to invoke `program`, e.g. `composer` on the host or
    /// `docker compose exec app composer` in a container.
    pub fn alias_for(&self, program: &str) -> String {
        match self.container_prefix() {
            None => program.to_string(),
            Some(prefix) => format!("{CONTAINER_CLI} {} {program}", prefix.join(" ")),
        }
    }
}

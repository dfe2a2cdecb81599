//! # Installer Errors
//!
//! Every failure the installer can hit, grouped the same way the run is:
//!
//! - **Configuration / read errors**: compose files and answers files that cannot be read or
//!   do not have the expected shape, or answers that contradict each other.
//! - **Process errors**: an external command could not be spawned or exited unsuccessfully.
//! - **File errors**: reading or writing the recipe file, the ignore file or a configuration
//!   template failed.
//!
//! None of these are recovered from. They bubble up to `main`, get logged, and end the run.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for the installer.
#[derive(Error, Debug)]
pub enum InstallerError {
    /// The compose file exists but could not be read.
    #[error("failed to read compose file `{path}`")]
    ComposeRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The compose file is not valid YAML.
    #[error("failed to parse compose file `{path}`")]
    ComposeParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The compose file parsed, but its top level is not a mapping.
    #[error("compose file `{path}` is not a mapping of top-level keys")]
    ComposeNotMapping { path: PathBuf },

    /// `services` is present in the compose file but is not a mapping.
    #[error("`services` in compose file `{path}` is not a mapping")]
    ComposeServicesNotMapping { path: PathBuf },

    /// A service declared in the compose file has a non-string name.
    #[error("compose file `{path}` declares a service with a non-string name")]
    ComposeServiceName { path: PathBuf },

    /// The answers file could not be read.
    #[error("failed to read answers file `{path}`")]
    AnswersRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The answers file is not valid YAML or contains unknown keys.
    #[error("failed to parse answers file `{path}`")]
    AnswersParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// Container mode was requested without naming the service to run commands in.
    #[error("docker mode requires a compose service (use --service or answer the prompt)")]
    MissingService,

    /// `~` would expand to the host's home directory, which does not exist in the container.
    #[error("tools directory `{tools_dir}` uses `~`, which only works without docker; use a path relative to the project or an absolute container path")]
    HomeDirInContainer { tools_dir: String },

    /// The external program could not be started at all.
    #[error("failed to spawn `{command}`")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    /// The external program ran but reported failure.
    #[error("command `{command}` failed with {}", exit_code_label(.code))]
    CommandFailed { command: String, code: Option<i32> },

    /// The host working directory could not be determined.
    #[error("failed to determine the current working directory")]
    WorkingDirectory(#[source] io::Error),

    /// A file the installer reads (recipe file, ignore file) could not be read.
    #[error("failed to read `{path}`")]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A file the installer writes could not be opened, written or closed.
    #[error("failed to write `{path}`")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An interactive prompt failed (no terminal, interrupted input).
    #[error("failed to interact with the user")]
    Prompt(#[from] dialoguer::Error),
}

fn exit_code_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

pub type Result<T, E = InstallerError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_failure_mentions_command_and_code() {
        let err = InstallerError::CommandFailed {
            command: "composer require --dev phpmd/phpmd".to_string(),
            code: Some(2),
        };
        assert_eq!(
            err.to_string(),
            "command `composer require --dev phpmd/phpmd` failed with exit code 2"
        );
    }

    #[test]
    fn signal_termination_has_readable_message() {
        let err = InstallerError::CommandFailed {
            command: "docker compose exec app pwd".to_string(),
            code: None,
        };
        assert!(err.to_string().contains("terminated by signal"));
    }
}

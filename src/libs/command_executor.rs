//! # Command Executor
//!
//! Runs external commands for the installer, either directly on the host or inside the
//! selected compose service. Callers always pass the command as they would type it on the
//! host (`["composer", "require", ...]`); the executor decides whether it must be wrapped
//! as `docker compose exec <service> composer require ...`.
//!
//! Spawning itself sits behind [`ProcessRunner`] so the wrapping, logging and error
//! handling can be exercised without Docker or Composer on the machine.
//!
//! Every failure is returned as an [`InstallerError`]; nothing is retried.

use colored::Colorize;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::log_info;
use crate::schemas::errors::{InstallerError, Result};
use crate::schemas::execution::{CONTAINER_CLI, ExecutionMode};

/// Spawns processes. Implementations receive the already composed program and arguments.
pub trait ProcessRunner {
    /// Runs the program with stdin, stdout and stderr connected to the terminal, so tools
    /// that ask questions can do so. Fails unless the program exits successfully.
    fn run_interactive(&self, program: &str, args: &[String]) -> Result<()>;

    /// Runs the program and returns what it printed on stdout.
    /// Fails unless the program exits successfully.
    fn run_captured(&self, program: &str, args: &[String]) -> Result<String>;
}

/// [`ProcessRunner`] backed by `std::process::Command`.
///
/// Processes start in `current_dir` when one is set, otherwise in the installer's own
/// working directory. `docker compose` looks up the compose file from there, so an
/// installation run must point it at the project root.
#[derive(Debug, Default, Clone)]
pub struct SystemRunner {
    current_dir: Option<PathBuf>,
}

impl SystemRunner {
    /// A runner whose processes start in `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            current_dir: Some(dir.to_path_buf()),
        }
    }

    fn command(&self, program: &str, args: &[String]) -> Command {
        let mut command = Command::new(program);
        command.args(args);
        // Relative paths and `docker compose` both resolve against this directory.
        if let Some(dir) = &self.current_dir {
            command.current_dir(dir);
        }
        command
    }
}

impl ProcessRunner for SystemRunner {
    fn run_interactive(&self, program: &str, args: &[String]) -> Result<()> {
        let status = self
            .command(program, args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| InstallerError::Spawn {
                command: command_line(program, args),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(InstallerError::CommandFailed {
                command: command_line(program, args),
                code: status.code(),
            })
        }
    }

    fn run_captured(&self, program: &str, args: &[String]) -> Result<String> {
        let output = self
            .command(program, args)
            .stdin(Stdio::null())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|source| InstallerError::Spawn {
                command: command_line(program, args),
                source,
            })?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            Err(InstallerError::CommandFailed {
                command: command_line(program, args),
                code: output.status.code(),
            })
        }
    }
}

/// Runs commands according to the [`ExecutionMode`] chosen for this run.
pub struct Executor<'r> {
    mode: ExecutionMode,
    runner: &'r dyn ProcessRunner,
}

impl<'r> Executor<'r> {
    pub fn new(mode: ExecutionMode, runner: &'r dyn ProcessRunner) -> Self {
        Self { mode, runner }
    }

    pub fn mode(&self) -> &ExecutionMode {
        &self.mode
    }

    /// Turns host-style command tokens into the program and arguments actually spawned.
    ///
    /// # Examples
    /// * host: `["mkdir", "-p", "/p/tools"]` → `mkdir` `["-p", "/p/tools"]`
    /// * exec on `app`: `["pwd"]` → `docker` `["compose", "exec", "app", "pwd"]`
    pub fn compose(&self, command: &[String]) -> (String, Vec<String>) {
        match self.mode.container_prefix() {
            Some(mut prefix) => {
                prefix.extend(command.iter().cloned());
                (CONTAINER_CLI.to_string(), prefix)
            }
            None => match command.split_first() {
                Some((program, args)) => (program.clone(), args.to_vec()),
                None => (String::new(), Vec::new()),
            },
        }
    }

    /// Runs `command` interactively; see [`ProcessRunner::run_interactive`].
    pub fn run(&self, command: &[String]) -> Result<()> {
        let (program, args) = self.compose(command);
        log_info!(
            "[Exec] Running command: {}",
            command_line(&program, &args).cyan()
        );
        self.runner.run_interactive(&program, &args)
    }

    /// Runs `command` and returns its stdout; see [`ProcessRunner::run_captured`].
    pub fn capture(&self, command: &[String]) -> Result<String> {
        let (program, args) = self.compose(command);
        log_info!(
            "[Exec] Running command: {}",
            command_line(&program, &args).cyan()
        );
        self.runner.run_captured(&program, &args)
    }
}

/// Builds owned command tokens from string slices.
pub fn tokens<I, S>(parts: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    parts.into_iter().map(Into::into).collect()
}

/// Renders a command for logs and error messages, single-quoting arguments that contain
/// whitespace or quotes.
pub fn command_line(program: &str, args: &[String]) -> String {
    std::iter::once(program)
        .chain(args.iter().map(String::as_str))
        .map(|part| {
            if part.is_empty() || part.contains(|c: char| c.is_whitespace() || c == '\'' || c == '"') {
                format!("'{}'", part.replace('\'', r"'\''"))
            } else {
                part.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}


#[cfg(test)]
mod tests {
    use super::testing::RecordingRunner;
    use super::*;
    use crate::schemas::execution::CommandVariant;

    fn container(variant: CommandVariant) -> ExecutionMode {
        ExecutionMode::Container {
            service: "app".to_string(),
            variant,
        }
    }

    #[test]
    fn host_commands_run_as_given() {
        let runner = RecordingRunner::default();
        let executor = Executor::new(ExecutionMode::Host, &runner);

        executor.run(&tokens(["mkdir", "-p", "/p/tools"])).unwrap();

        assert_eq!(runner.lines(), vec!["mkdir -p /p/tools"]);
    }

    #[test]
    fn container_commands_are_wrapped() {
        let runner = RecordingRunner::default();
        let executor = Executor::new(container(CommandVariant::Exec), &runner);

        executor.run(&tokens(["composer", "install"])).unwrap();

        assert_eq!(runner.lines(), vec!["docker compose exec app composer install"]);
    }

    #[test]
    fn run_variant_uses_throwaway_containers() {
        let runner = RecordingRunner::with_stdout("/var/www/html\n");
        let executor = Executor::new(container(CommandVariant::Run), &runner);

        let out = executor.capture(&tokens(["pwd"])).unwrap();

        assert_eq!(out, "/var/www/html\n");
        assert_eq!(runner.lines(), vec!["docker compose run --rm app pwd"]);
    }

    #[test]
    fn failures_are_returned() {
        let runner = RecordingRunner::failing_on("composer");
        let executor = Executor::new(ExecutionMode::Host, &runner);

        let err = executor
            .run(&tokens(["composer", "require", "--dev", "phpmd/phpmd"]))
            .unwrap_err();

        assert!(matches!(err, InstallerError::CommandFailed { code: Some(1), .. }));
    }

    #[test]
    fn command_line_quotes_awkward_arguments() {
        let args = tokens(["-c", "echo it's done", ""]);
        assert_eq!(command_line("bash", &args), r"bash -c 'echo it'\''s done' ''");
    }

    #[cfg(unix)]
    #[test]
    fn system_runner_reports_exit_codes() {
        let err = SystemRunner::default()
            .run_captured("sh", &tokens(["-c", "exit 3"]))
            .unwrap_err();
        assert!(matches!(err, InstallerError::CommandFailed { code: Some(3), .. }));
    }

    #[cfg(unix)]
    #[test]
    fn system_runner_captures_stdout() {
        let out = SystemRunner::default()
            .run_captured("sh", &tokens(["-c", "echo hello"]))
            .unwrap();
        assert_eq!(out, "hello\n");
    }

    #[cfg(unix)]
    #[test]
    fn system_runner_starts_processes_in_the_project_root() {
        let project = tempfile::tempdir().unwrap();
        let runner = SystemRunner::in_dir(project.path());

        let captured = runner.run_captured("pwd", &[]).unwrap();
        assert_eq!(
            PathBuf::from(captured.trim()).canonicalize().unwrap(),
            project.path().canonicalize().unwrap()
        );

        // Interactive runs start there too: a relative path lands inside the project.
        runner
            .run_interactive("mkdir", &tokens(["-p", "tools"]))
            .unwrap();
        assert!(project.path().join("tools").is_dir());
    }

    #[test]
    fn system_runner_reports_missing_programs() {
        let err = SystemRunner::default()
            .run_captured("php-tooling-no-such-program", &[])
            .unwrap_err();
        assert!(matches!(err, InstallerError::Spawn { .. }));
    }
}

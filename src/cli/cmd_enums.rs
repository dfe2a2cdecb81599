use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::schemas::execution::CommandVariant;
use crate::schemas::install_config::Answers;
use crate::schemas::tools::Tool;

/// Scaffolds static-analysis and code-quality tooling for a PHP project.
#[derive(Parser, Debug)]
#[command(name = "php-tooling", version)]
pub struct Cli {
    /// Enables detailed debug output for troubleshooting.
    #[arg(short, long, global = true)]
    pub(crate) debug: bool,

    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Installs the selected tools, generates their recipes and copies their configuration.
    Install(InstallArgs),
    /// Lists the services of the project's compose file.
    Services {
        /// Project root (defaults to the current directory).
        #[arg(long)]
        project_dir: Option<PathBuf>,
        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug, Default)]
pub struct InstallArgs {
    /// Project root (defaults to the current directory).
    #[arg(long)]
    pub project_dir: Option<PathBuf>,

    /// YAML file answering some or all of the questions.
    #[arg(long, env = "PHP_TOOLING_ANSWERS")]
    pub answers: Option<PathBuf>,

    /// Run commands inside a compose service.
    #[arg(long, conflicts_with = "no_docker")]
    pub docker: bool,

    /// Run commands directly on this machine.
    #[arg(long)]
    pub no_docker: bool,

    /// Compose service to run commands in.
    #[arg(long)]
    pub service: Option<String>,

    /// `exec` into the running container or `run` a throwaway one.
    #[arg(long)]
    pub variant: Option<CommandVariant>,

    /// Directory the tools are installed into, relative to the project (default `./tools`).
    #[arg(long)]
    pub tools_dir: Option<String>,

    /// Tool to install; repeat for several (phpcsfixer, phpstan, phpcs, phpmd, phpcpd,
    /// composer-require-checker).
    #[arg(long = "tool")]
    pub tools: Vec<Tool>,

    /// Replace configuration files that already exist in the project.
    #[arg(long)]
    pub overwrite_configs: bool,

    /// Do not ask anything; use the answers file, flags and defaults.
    #[arg(short, long)]
    pub yes: bool,
}

impl InstallArgs {
    /// The answers given on the command line. Flags that were not passed stay unanswered so
    /// they do not override the answers file.
    pub fn answers(&self) -> Answers {
        let docker = match (self.docker, self.no_docker) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        };
        Answers {
            docker,
            service: self.service.clone(),
            variant: self.variant,
            tools_dir: self.tools_dir.clone(),
            tools: (!self.tools.is_empty()).then(|| self.tools.clone()),
            overwrite_configs: self.overwrite_configs.then_some(true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn install_flags_become_answers() {
        let cli = Cli::parse_from([
            "php-tooling",
            "install",
            "--docker",
            "--service",
            "app",
            "--variant",
            "run",
            "--tool",
            "phpcs",
            "--tool",
            "phpstan",
            "-y",
        ]);
        let Commands::Install(args) = cli.command else {
            panic!("expected the install command");
        };

        assert!(args.yes);
        let answers = args.answers();
        assert_eq!(answers.docker, Some(true));
        assert_eq!(answers.service.as_deref(), Some("app"));
        assert_eq!(answers.variant, Some(CommandVariant::Run));
        assert_eq!(answers.tools, Some(vec![Tool::PhpCs, Tool::PhpStan]));
        assert_eq!(answers.tools_dir, None);
        assert_eq!(answers.overwrite_configs, None);
    }

    #[test]
    fn absent_flags_leave_questions_open() {
        assert_eq!(InstallArgs::default().answers(), Answers::default());
    }

    #[test]
    fn no_docker_answers_no() {
        let cli = Cli::parse_from(["php-tooling", "install", "--no-docker"]);
        let Commands::Install(args) = cli.command else {
            panic!("expected the install command");
        };
        assert_eq!(args.answers().docker, Some(false));
    }

    #[test]
    fn docker_flags_conflict() {
        assert!(Cli::try_parse_from(["php-tooling", "install", "--docker", "--no-docker"]).is_err());
    }

    #[test]
    fn unknown_tools_are_rejected() {
        assert!(Cli::try_parse_from(["php-tooling", "install", "--tool", "phpunit"]).is_err());
    }
}

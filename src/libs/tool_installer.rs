// This module installs the selected tools one after another. For each tool it:
// - creates the tool's own directory under the tools root,
// - runs `composer require --dev` there so every tool gets an isolated vendor tree,
// - appends the tool's recipe block to the justfile,
// - copies the tool's configuration templates into the project.
//
// Tools do not depend on each other, but the first failure stops the whole run: the
// remaining tools are not attempted and the error is handed back to the caller.

use colored::Colorize;
use std::path::{Path, PathBuf};

use crate::installers::installer_for;
use crate::libs::command_executor::Executor;
use crate::libs::config_templates::{CopyOutcome, copy_template};
use crate::libs::directory_provisioner::{DirectoryKind, DirectoryProvisioner};
use crate::libs::recipe_writer::{AppendOutcome, COMPOSER, RecipeWriter};
use crate::libs::utilities::path_helpers::display;
use crate::schemas::errors::Result;
use crate::schemas::tools::Tool;
use crate::{log_debug, log_info};

/// What installing one tool produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolReport {
    pub tool: Tool,
    /// Absolute directory the tool's dependencies were installed into.
    pub directory: PathBuf,
    pub recipe: AppendOutcome,
    pub configs: Vec<CopyOutcome>,
}

pub struct ToolSetInstaller<'a> {
    executor: &'a Executor<'a>,
    provisioner: &'a DirectoryProvisioner<'a>,
    recipes: &'a RecipeWriter,
    project_root: PathBuf,
    overwrite_configs: bool,
}

impl<'a> ToolSetInstaller<'a> {
    pub fn new(
        executor: &'a Executor<'a>,
        provisioner: &'a DirectoryProvisioner<'a>,
        recipes: &'a RecipeWriter,
        project_root: &Path,
        overwrite_configs: bool,
    ) -> Self {
        Self {
            executor,
            provisioner,
            recipes,
            project_root: project_root.to_path_buf(),
            overwrite_configs,
        }
    }

    /// Installs every tool in `tools`, in order, stopping at the first error.
    pub fn install_all(&self, tools: &[Tool]) -> Result<Vec<ToolReport>> {
        log_info!("[Tools] Installing {} tool(s)...", tools.len().to_string().bold());
        tools.iter().map(|tool| self.install(*tool)).collect()
    }

    pub fn install(&self, tool: Tool) -> Result<ToolReport> {
        // Look up the static description: packages, recipe and templates for this tool.
        let installer = installer_for(tool);
        log_info!("[Tools] Installing {}", installer.tool.label().bold().cyan());
        log_debug!(
            "[Tools] {} packages: {}",
            installer.tool.slug(),
            installer.packages.join(" ")
        );

        // Give the tool its own directory so its dependencies never mix with the project's.
        let directory = self.provisioner.provision(DirectoryKind::Tool, tool.slug())?;

        // Build `composer require --dev <packages...> --working-dir <directory>`.
        let mut command = vec![COMPOSER.to_string(), "require".to_string(), "--dev".to_string()];
        command.extend(installer.packages.iter().map(|package| package.to_string()));
        command.push("--working-dir".to_string());
        command.push(display(&directory));
        // Composer may ask questions, so this runs interactively. Failure aborts the run.
        self.executor.run(&command)?;

        // Append the tool's recipe only after the install succeeded.
        let recipe = self.recipes.append_with(installer.recipe)?;

        // Copy the configuration files, if the tool ships any.
        let configs = installer
            .templates
            .iter()
            .map(|template| copy_template(&self.project_root, template, self.overwrite_configs))
            .collect::<Result<Vec<_>>>()?;
        log_debug!("[Tools] {} configuration outcome(s): {:?}", tool.slug(), configs);

        log_info!("[Tools] {} installed", tool.label().green());
        Ok(ToolReport {
            tool,
            directory,
            recipe,
            configs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::command_executor::testing::RecordingRunner;
    use crate::libs::working_directory::WorkingDirectoryResolver;
    use crate::schemas::errors::InstallerError;
    use crate::schemas::execution::ExecutionMode;
    use std::fs;

    #[test]
    fn installs_into_isolated_directory_and_copies_configs() {
        let dir = tempfile::tempdir().unwrap();
        let runner = RecordingRunner::default();
        let executor = Executor::new(ExecutionMode::Host, &runner);
        let resolver = WorkingDirectoryResolver::new(&executor, dir.path());
        let provisioner = DirectoryProvisioner::new(&executor, &resolver, "./tools");
        let recipes = RecipeWriter::new(dir.path(), &ExecutionMode::Host, "./tools");
        let installer = ToolSetInstaller::new(&executor, &provisioner, &recipes, dir.path(), false);

        let report = installer.install(Tool::PhpMd).unwrap();

        let tool_dir = dir.path().join("tools").join("phpmd");
        assert_eq!(report.directory, tool_dir);
        assert_eq!(report.recipe, AppendOutcome::Appended);
        assert_eq!(
            runner.lines(),
            vec![
                format!("mkdir -p {}", tool_dir.display()),
                format!("composer require --dev phpmd/phpmd --working-dir {}", tool_dir.display()),
            ]
        );
        assert!(dir.path().join(".phpmd.xml").is_file());
        let justfile = fs::read_to_string(recipes.path()).unwrap();
        assert!(justfile.contains("php ./tools/phpmd/vendor/bin/phpmd {{paths}} text .phpmd.xml"));
    }

    #[test]
    fn first_failure_stops_the_remaining_tools() {
        let dir = tempfile::tempdir().unwrap();
        let runner = RecordingRunner::failing_on("phpstan/phpstan");
        let executor = Executor::new(ExecutionMode::Host, &runner);
        let resolver = WorkingDirectoryResolver::new(&executor, dir.path());
        let provisioner = DirectoryProvisioner::new(&executor, &resolver, "./tools");
        let recipes = RecipeWriter::new(dir.path(), &ExecutionMode::Host, "./tools");
        let installer = ToolSetInstaller::new(&executor, &provisioner, &recipes, dir.path(), false);

        let err = installer
            .install_all(&[Tool::PhpStan, Tool::PhpCpd])
            .unwrap_err();

        assert!(matches!(err, InstallerError::CommandFailed { .. }));
        assert!(runner.lines().iter().all(|line| !line.contains("phpcpd")));
        assert!(!recipes.path().exists());
        assert!(!dir.path().join("phpstan.neon").exists());
    }
}

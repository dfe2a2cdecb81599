// This file contains the logic for the `php-tooling install` command.
// It settles the configuration first (answers file, flags, then the form) and only then
// touches the project: tools root, `install-php` recipe, every selected tool, and
// finally the `.gitignore` region.

use anyhow::Context;
use colored::Colorize;
use std::path::{Path, PathBuf};

use crate::cli::cmd_enums::InstallArgs;
use crate::installers::install_task;
use crate::libs::command_executor::{Executor, ProcessRunner, SystemRunner};
use crate::libs::config_loading::load_answers;
use crate::libs::configuration_form;
use crate::libs::directory_provisioner::{DirectoryKind, DirectoryProvisioner};
use crate::libs::environment_probe;
use crate::libs::ignore_updater::{IgnoreUpdate, update_ignore_file};
use crate::libs::recipe_writer::{AppendOutcome, RecipeWriter};
use crate::libs::tool_installer::{ToolReport, ToolSetInstaller};
use crate::libs::working_directory::{WorkingDirectoryResolver, current_dir};
use crate::schemas::errors::Result;
use crate::schemas::install_config::{Answers, InstallConfig};
use crate::{log_debug, log_info, log_warn};

/// Everything an installation changed, for the summary.
#[derive(Debug)]
pub struct InstallReport {
    pub tools_root: PathBuf,
    pub install_task: AppendOutcome,
    pub tools: Vec<ToolReport>,
    pub ignore: IgnoreUpdate,
}

/// Main entry point for the `install` command.
pub fn run(args: InstallArgs) -> anyhow::Result<()> {
    // Settle every answer before anything on disk or in a container is touched.
    let config = resolve_config(&args)?;

    // Show the exact configuration in debug mode; handy when an answers file is involved.
    match serde_json::to_string_pretty(&config) {
        Ok(json) => log_debug!("[Install] Configuration:\n{}", json),
        Err(err) => log_debug!("[Install] Configuration could not be rendered: {}", err),
    }

    if config.tools.is_empty() {
        log_warn!("[Install] No tools selected; only the base recipe and ignore patterns will be written");
    }

    // Spawned processes start in the project root, so `docker compose` finds the same
    // compose file the probe read, even when `--project-dir` points elsewhere.
    let runner = SystemRunner::in_dir(&config.project_root);
    let report = execute(&config, &runner).context("installation aborted")?;
    print_summary(&report);
    Ok(())
}

/// Builds the one configuration the run uses. The form is skipped with `--yes`.
pub fn resolve_config(args: &InstallArgs) -> anyhow::Result<InstallConfig> {
    let project_root = project_root(args.project_dir.as_deref())?;

    // Look for a compose file first: its presence decides the Docker default and its
    // services are what the form offers.
    let compose = environment_probe::detect(&project_root)
        .context("could not read the project's compose file")?;
    let services = compose
        .as_ref()
        .map(|project| project.services.clone())
        .unwrap_or_default();
    let docker_default = compose.is_some();

    // Layer the answers: file first, then whatever was passed on the command line.
    let mut answers = match &args.answers {
        Some(path) => load_answers(path)?,
        None => Answers::default(),
    };
    answers = answers.merge(args.answers());

    // The form gets the last word, using the layered answers as its defaults.
    if !args.yes {
        answers = configuration_form::ask(answers, &services, docker_default)?;
    }

    Ok(answers.into_config(project_root, docker_default)?)
}

/// Performs the installation described by `config`, spawning processes through `runner`.
/// The first error stops the run.
pub fn execute(config: &InstallConfig, runner: &dyn ProcessRunner) -> Result<InstallReport> {
    // One executor for the whole run; the execution mode never changes halfway.
    let executor = Executor::new(config.execution.clone(), runner);
    let resolver = WorkingDirectoryResolver::new(&executor, &config.project_root);
    let provisioner = DirectoryProvisioner::new(&executor, &resolver, &config.tools_dir);

    // The tools root comes first; every tool gets its own directory below it.
    let tools_root = provisioner.provision(DirectoryKind::Parent, &config.tools_dir)?;

    // The base `install-php` recipe goes in before any tool recipe.
    let recipes = RecipeWriter::new(&config.project_root, &config.execution, &config.tools_dir);
    log_info!(
        "[Install] Writing recipes to {}",
        recipes.path().display().to_string().cyan()
    );
    let base_task = recipes.append_with(|ctx| install_task(ctx, &config.tools))?;

    // Install the selected tools in order. The first failure ends the run.
    let installer = ToolSetInstaller::new(
        &executor,
        &provisioner,
        &recipes,
        &config.project_root,
        config.overwrite_configs,
    );
    let tools = installer.install_all(&config.tools)?;

    // Only a fully successful run touches `.gitignore`.
    let ignore = update_ignore_file(&config.project_root)?;

    Ok(InstallReport {
        tools_root,
        install_task: base_task,
        tools,
        ignore,
    })
}

fn project_root(dir: Option<&Path>) -> anyhow::Result<PathBuf> {
    let cwd = current_dir()?;
    Ok(match dir {
        Some(dir) if dir.is_absolute() => dir.to_path_buf(),
        Some(dir) => cwd.join(dir),
        None => cwd,
    })
}

fn print_summary(report: &InstallReport) {
    eprintln!();
    log_info!(
        "[Install] Tools root: {}",
        report.tools_root.display().to_string().cyan()
    );
    for tool in &report.tools {
        log_info!(
            "[Install] {} {} ({})",
            "✓".green(),
            tool.tool.label().bold(),
            tool.directory.display()
        );
    }
    // Let the user know what happened to the ignore patterns.
    match report.ignore {
        IgnoreUpdate::Appended => log_info!("[Install] Ignore patterns added to .gitignore"),
        IgnoreUpdate::Rewritten => log_info!("[Install] Ignore patterns refreshed in .gitignore"),
        IgnoreUpdate::Unchanged => log_debug!("[Install] .gitignore already up to date"),
    }
    // A kept `install-php` task may not mention tools added in this run.
    if let AppendOutcome::Conflict(tasks) = &report.install_task {
        log_warn!(
            "[Install] Existing {} task kept; remove it and re-run to list every selected tool",
            tasks.join(", ").yellow()
        );
    }
    log_info!(
        "[Install] Done. Run {} to install everything again later.",
        "just install-php".bold().green()
    );
}

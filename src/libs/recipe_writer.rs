//! # Recipe File Writer
//!
//! Appends generated task-runner recipes to the project's `justfile`.
//!
//! Every append is self-contained: the writer works out how `composer` and `php` have to be
//! invoked for the current execution mode and hands those aliases, together with the tools
//! root, to the function that renders the block. The file is opened in append mode, written
//! and closed again for every block; existing content is never truncated.
//!
//! ## Re-runs
//!
//! Before appending, the task names the block declares are looked up in the file:
//!
//! - none of them exist → the block is appended as is
//! - the identical block is already there → nothing is written
//! - a task with that name exists with other content → nothing is written and a warning
//!   tells the user which tasks were kept

use colored::Colorize;
use std::path::{Path, PathBuf};

use crate::libs::utilities::file_operations::{append_text, contains_multiline_block, read_if_exists};
use crate::libs::utilities::path_helpers::recipe_path;
use crate::schemas::errors::Result;
use crate::schemas::execution::ExecutionMode;
use crate::{log_debug, log_info, log_warn};

/// Name of the recipe file, relative to the project root.
pub const RECIPE_FILE: &str = "justfile";

/// Dependency manager invoked by the recipes.
pub const COMPOSER: &str = "composer";

/// PHP runtime invoked by the recipes.
pub const PHP: &str = "php";

/// Everything a recipe block needs to reference the tools correctly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeContext {
    /// How to call the dependency manager, e.g. `composer` or `docker compose exec app composer`.
    pub composer: String,
    /// How to call the PHP runtime.
    pub php: String,
    /// Tools root as recipes refer to it, e.g. `./tools`.
    pub tools_dir: String,
}

/// What happened to a block handed to the writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppendOutcome {
    Appended,
    AlreadyPresent,
    /// Tasks with these names already exist with different content and were kept.
    Conflict(Vec<String>),
}

pub struct RecipeWriter {
    path: PathBuf,
    mode: ExecutionMode,
    tools_dir: String,
}

impl RecipeWriter {
    pub fn new(project_root: &Path, mode: &ExecutionMode, tools_dir: &str) -> Self {
        Self {
            path: project_root.join(RECIPE_FILE),
            mode: mode.clone(),
            tools_dir: tools_dir.to_string(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Computes the aliases and tools root for the current execution mode.
    pub fn context(&self) -> RecipeContext {
        RecipeContext {
            composer: self.mode.alias_for(COMPOSER),
            php: self.mode.alias_for(PHP),
            tools_dir: recipe_path(&self.tools_dir),
        }
    }

    /// Renders a block with the current [`RecipeContext`] and appends it.
    pub fn append_with<F>(&self, render: F) -> Result<AppendOutcome>
    where
        F: FnOnce(&RecipeContext) -> String,
    {
        let block = render(&self.context());
        self.append(&block)
    }

    /// Appends `block` unless its tasks are already defined (see the module docs).
    pub fn append(&self, block: &str) -> Result<AppendOutcome> {
        let existing = read_if_exists(&self.path)?.unwrap_or_default();
        let defined = task_names(&existing);
        let clashing: Vec<String> = task_names(block)
            .into_iter()
            .filter(|name| defined.contains(name))
            .collect();

        if clashing.is_empty() {
            append_text(&self.path, block)?;
            log_debug!(
                "[Recipe] Appended block to {}:{}",
                self.path.display().to_string().yellow(),
                block
            );
            return Ok(AppendOutcome::Appended);
        }

        if contains_multiline_block(&existing, block) {
            log_info!(
                "[Recipe] Task(s) {} already present in {}, skipping",
                clashing.join(", ").bold(),
                RECIPE_FILE
            );
            return Ok(AppendOutcome::AlreadyPresent);
        }

        log_warn!(
            "[Recipe] Task(s) {} already defined differently in {}. Keeping the existing definition; remove it and re-run to regenerate.",
            clashing.join(", ").yellow().bold(),
            RECIPE_FILE
        );
        Ok(AppendOutcome::Conflict(clashing))
    }
}

/// Names of the recipes declared in `text`, in order of appearance.
///
/// A recipe header starts at column 0 and has the form `name [params]:`. Comments,
/// attributes and `set`/`alias`/`export`/`import`/`mod` statements or `:=` assignments
/// are not recipes.
pub fn task_names(text: &str) -> Vec<String> {
    const STATEMENTS: [&str; 5] = ["set ", "alias ", "export ", "import ", "mod "];

    text.lines()
        .filter(|line| !line.is_empty() && !line.starts_with(char::is_whitespace))
        .filter(|line| !line.starts_with('#') && !line.starts_with('['))
        .filter(|line| !STATEMENTS.iter().any(|statement| line.starts_with(statement)))
        .filter(|line| !line.contains(":="))
        .filter_map(|line| {
            let (header, _) = line.split_once(':')?;
            let name = header.split_whitespace().next()?.trim_start_matches('@');
            (!name.is_empty()).then(|| name.to_string())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::execution::CommandVariant;
    use std::fs;

    fn block(name: &str, body: &str) -> String {
        format!("\n# Launch {name}\n{name}:\n    {body}\n")
    }

    #[test]
    fn host_context_uses_bare_programs() {
        let writer = RecipeWriter::new(Path::new("/p"), &ExecutionMode::Host, "tools");
        assert_eq!(
            writer.context(),
            RecipeContext {
                composer: "composer".into(),
                php: "php".into(),
                tools_dir: "./tools".into(),
            }
        );
    }

    #[test]
    fn container_context_wraps_programs() {
        let mode = ExecutionMode::Container {
            service: "app".into(),
            variant: CommandVariant::Exec,
        };
        let writer = RecipeWriter::new(Path::new("/p"), &mode, "./tools");
        let context = writer.context();
        assert_eq!(context.composer, "docker compose exec app composer");
        assert_eq!(context.php, "docker compose exec app php");
    }

    #[test]
    fn appends_concatenate_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let writer = RecipeWriter::new(dir.path(), &ExecutionMode::Host, "./tools");
        let first = block("install-php", "composer install");
        let second = block("phpmd", "php ./tools/phpmd/vendor/bin/phpmd src text .phpmd.xml");

        assert_eq!(writer.append(&first).unwrap(), AppendOutcome::Appended);
        assert_eq!(writer.append(&second).unwrap(), AppendOutcome::Appended);

        let content = fs::read_to_string(writer.path()).unwrap();
        assert_eq!(content, format!("{first}{second}"));
    }

    #[test]
    fn existing_content_is_preserved() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(RECIPE_FILE), "default:\n    just --list\n").unwrap();
        let writer = RecipeWriter::new(dir.path(), &ExecutionMode::Host, "./tools");

        writer.append(&block("phpcs", "php phpcs")).unwrap();

        let content = fs::read_to_string(writer.path()).unwrap();
        assert!(content.starts_with("default:\n    just --list\n"));
        assert!(content.ends_with("phpcs:\n    php phpcs\n"));
    }

    #[test]
    fn identical_block_is_not_duplicated() {
        let dir = tempfile::tempdir().unwrap();
        let writer = RecipeWriter::new(dir.path(), &ExecutionMode::Host, "./tools");
        let phpcs = block("phpcs", "php phpcs");

        writer.append(&phpcs).unwrap();
        assert_eq!(writer.append(&phpcs).unwrap(), AppendOutcome::AlreadyPresent);

        let content = fs::read_to_string(writer.path()).unwrap();
        assert_eq!(content.matches("phpcs:").count(), 1);
    }

    #[test]
    fn differing_definition_is_kept() {
        let dir = tempfile::tempdir().unwrap();
        let writer = RecipeWriter::new(dir.path(), &ExecutionMode::Host, "./tools");
        writer.append(&block("phpcs", "php phpcs")).unwrap();

        let outcome = writer
            .append(&block("phpcs", "docker compose exec app php phpcs"))
            .unwrap();

        assert_eq!(outcome, AppendOutcome::Conflict(vec!["phpcs".into()]));
        let content = fs::read_to_string(writer.path()).unwrap();
        assert!(!content.contains("docker compose"));
    }

    #[test]
    fn append_with_passes_the_context() {
        let dir = tempfile::tempdir().unwrap();
        let writer = RecipeWriter::new(dir.path(), &ExecutionMode::Host, "qa");

        writer
            .append_with(|ctx| format!("\nlint:\n    {} {}/bin/lint\n", ctx.php, ctx.tools_dir))
            .unwrap();

        let content = fs::read_to_string(writer.path()).unwrap();
        assert_eq!(content, "\nlint:\n    php ./qa/bin/lint\n");
    }

    #[test]
    fn task_names_skip_non_recipes() {
        let text = "set shell := [\"bash\", \"-c\"]\nversion := \"1\"\n# phpcs: comment\n[private]\n@quiet:\n    echo\nphpcs *paths='src/':\n    php x {{paths}}\nalias s := phpcs\n";
        assert_eq!(task_names(text), vec!["quiet", "phpcs"]);
    }
}

//! # Configuration Form
//!
//! Asks the installation questions in the terminal with `dialoguer`:
//!
//! 1. Use Docker? (confirm)
//! 2. Which compose service? (select from the detected services, free text if none were
//!    found; only asked when Docker is used)
//! 3. Exec into the running container or run a throwaway one? (select; Docker only)
//! 4. Where should the tools go? (text, `./tools` by default)
//! 5. Which tools? (multi-select)
//!
//! Whatever the answers file and flags already said is offered as the default. The form
//! returns a complete set of [`Answers`]; it never builds the configuration itself.

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, MultiSelect, Select};

use crate::log_debug;
use crate::schemas::errors::Result;
use crate::schemas::execution::CommandVariant;
use crate::schemas::install_config::{Answers, DEFAULT_TOOLS_DIR};
use crate::schemas::tools::Tool;

/// Runs the form. `services` are the compose services offered for selection and
/// `docker_default` answers the Docker question when `prefill` does not.
pub fn ask(prefill: Answers, services: &[String], docker_default: bool) -> Result<Answers> {
    let theme = ColorfulTheme::default();

    let docker = Confirm::with_theme(&theme)
        .with_prompt("Do you use Docker?")
        .default(prefill.docker.unwrap_or(docker_default))
        .interact()?;

    let (service, variant) = if docker {
        let service = ask_service(&theme, services, prefill.service.as_deref())?;

        let labels = [
            "exec (run inside the running container)",
            "run (start a throwaway container)",
        ];
        let current = prefill.variant.unwrap_or_default();
        let index = Select::with_theme(&theme)
            .with_prompt("How should commands reach the container?")
            .items(&labels)
            .default(position_of(&CommandVariant::ALL, &current).unwrap_or(0))
            .interact()?;
        (Some(service), Some(CommandVariant::ALL[index]))
    } else {
        (prefill.service, prefill.variant)
    };

    let tools_dir: String = Input::with_theme(&theme)
        .with_prompt("Where should the tools be installed?")
        .default(prefill.tools_dir.unwrap_or_else(|| DEFAULT_TOOLS_DIR.to_string()))
        .interact_text()?;

    let labels: Vec<&str> = Tool::ALL.iter().map(|tool| tool.label()).collect();
    let checked = checked_tools(prefill.tools.as_deref().unwrap_or_default());
    let picked = MultiSelect::with_theme(&theme)
        .with_prompt("Which tools do you want to install? (space to toggle)")
        .items(&labels)
        .defaults(&checked)
        .interact()?;
    let tools: Vec<Tool> = picked.into_iter().map(|index| Tool::ALL[index]).collect();

    let answers = Answers {
        docker: Some(docker),
        service,
        variant,
        tools_dir: Some(tools_dir),
        tools: Some(tools),
        overwrite_configs: prefill.overwrite_configs,
    };
    log_debug!("[Form] Answers: {:?}", answers);
    Ok(answers)
}

/// Selection among the detected services, or free text when there are none.
fn ask_service(theme: &ColorfulTheme, services: &[String], current: Option<&str>) -> Result<String> {
    if services.is_empty() {
        let mut input = Input::<String>::with_theme(theme)
            .with_prompt("Which compose service runs PHP?")
            .validate_with(|value: &String| -> std::result::Result<(), &str> {
                if value.trim().is_empty() {
                    Err("a service name is required")
                } else {
                    Ok(())
                }
            });
        if let Some(current) = current {
            input = input.default(current.to_string());
        }
        return Ok(input.interact_text()?.trim().to_string());
    }

    let default = current
        .and_then(|name| services.iter().position(|service| service == name))
        .unwrap_or(0);
    let index = Select::with_theme(theme)
        .with_prompt("Which compose service runs PHP?")
        .items(services)
        .default(default)
        .interact()?;
    Ok(services[index].clone())
}

fn position_of<T: PartialEq>(items: &[T], value: &T) -> Option<usize> {
    items.iter().position(|item| item == value)
}

/// One flag per entry of [`Tool::ALL`]: whether it starts out checked.
fn checked_tools(selected: &[Tool]) -> Vec<bool> {
    Tool::ALL.iter().map(|tool| selected.contains(tool)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefilled_tools_start_checked() {
        let checked = checked_tools(&[Tool::PhpCs, Tool::PhpCsFixer]);
        assert_eq!(checked.len(), Tool::ALL.len());
        for (tool, flag) in Tool::ALL.iter().zip(&checked) {
            assert_eq!(*flag, matches!(tool, Tool::PhpCs | Tool::PhpCsFixer));
        }
    }

    #[test]
    fn nothing_checked_without_prefill() {
        assert!(checked_tools(&[]).iter().all(|flag| !flag));
    }

    #[test]
    fn variant_default_follows_prefill() {
        assert_eq!(position_of(&CommandVariant::ALL, &CommandVariant::Run), Some(1));
        assert_eq!(position_of(&CommandVariant::ALL, &CommandVariant::Exec), Some(0));
    }
}

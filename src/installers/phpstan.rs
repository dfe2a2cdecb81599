//! # PHPStan
//!
//! Static analysis with the Symfony and Doctrine extensions. Besides `phpstan.neon`, the
//! extensions need two bootstrap scripts that expose the application kernel and the
//! object manager; those go to `build/` so they stay out of the project's source tree.

use crate::installers::{ToolInstaller, vendor_bin};
use crate::libs::config_templates::ConfigTemplate;
use crate::libs::recipe_writer::RecipeContext;
use crate::schemas::tools::Tool;

pub static INSTALLER: ToolInstaller = ToolInstaller {
    tool: Tool::PhpStan,
    packages: &[
        "phpstan/phpstan",
        "phpstan/phpstan-symfony",
        "phpstan/phpstan-doctrine",
    ],
    recipe,
    templates: &[
        ConfigTemplate {
            destination: "phpstan.neon",
            bytes: include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/phpstan/phpstan.neon")),
        },
        ConfigTemplate {
            destination: "build/console.php",
            bytes: include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/phpstan/console.php")),
        },
        ConfigTemplate {
            destination: "build/doctrine.php",
            bytes: include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/phpstan/doctrine.php")),
        },
    ],
};

fn recipe(ctx: &RecipeContext) -> String {
    format!(
        "\n# Launch PHPStan (see https://phpstan.org/)\nphpstan *paths='src':\n    {} {} analyse -c phpstan.neon {{{{paths}}}}\n",
        ctx.php,
        vendor_bin(ctx, Tool::PhpStan, "phpstan")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_placeholder_survives_formatting() {
        let ctx = RecipeContext {
            composer: "composer".into(),
            php: "docker compose exec app php".into(),
            tools_dir: "./tools".into(),
        };
        let block = recipe(&ctx);
        assert!(block.contains("phpstan *paths='src':\n"));
        assert!(block.contains(
            "    docker compose exec app php ./tools/phpstan/vendor/bin/phpstan analyse -c phpstan.neon {{paths}}\n"
        ));
    }

    #[test]
    fn bootstrap_scripts_go_to_build() {
        let destinations: Vec<_> = INSTALLER.templates.iter().map(|t| t.destination).collect();
        assert_eq!(destinations, vec!["phpstan.neon", "build/console.php", "build/doctrine.php"]);
        assert!(INSTALLER.templates.iter().all(|t| !t.bytes.is_empty()));
    }
}

// This module is the catalogue of installable tools. Each submodule describes one tool:
// the Composer packages that make it up, the recipe block it contributes to the justfile,
// and the configuration templates it ships. `installer_for` maps the `Tool` enum onto
// these descriptions with an exhaustive match, so every tool is guaranteed to have one.

use crate::libs::config_templates::ConfigTemplate;
use crate::libs::recipe_writer::RecipeContext;
use crate::schemas::tools::Tool;

/// Composer Require Checker (dependency checker).
pub(crate) mod composer_require_checker;
/// PHP CS Fixer (formatter).
pub(crate) mod php_cs_fixer;
/// PHP_CodeSniffer (style checker, plus the phpcbf beautifier).
pub(crate) mod phpcs;
/// PHP Copy/Paste Detector (duplication detector).
pub(crate) mod phpcpd;
/// PHP Mess Detector.
pub(crate) mod phpmd;
/// PHPStan (static analyzer).
pub(crate) mod phpstan;

/// Static description of how one tool is installed.
#[derive(Debug, Clone, Copy)]
pub struct ToolInstaller {
    pub tool: Tool,
    /// Composer packages required as dev dependencies in the tool's own directory.
    pub packages: &'static [&'static str],
    /// Renders the justfile block for this tool.
    pub recipe: fn(&RecipeContext) -> String,
    /// Configuration files copied into the project.
    pub templates: &'static [ConfigTemplate],
}

/// Returns the installer description for `tool`.
pub fn installer_for(tool: Tool) -> &'static ToolInstaller {
    match tool {
        Tool::PhpCsFixer => &php_cs_fixer::INSTALLER,
        Tool::PhpStan => &phpstan::INSTALLER,
        Tool::PhpCs => &phpcs::INSTALLER,
        Tool::PhpMd => &phpmd::INSTALLER,
        Tool::PhpCpd => &phpcpd::INSTALLER,
        Tool::ComposerRequireChecker => &composer_require_checker::INSTALLER,
    }
}

/// The base `install-php` task: installs the project's own dependencies, then each
/// selected tool's dependencies from its directory under the tools root.
pub fn install_task(ctx: &RecipeContext, tools: &[Tool]) -> String {
    let mut block = format!(
        "\n# Install php dependencies\ninstall-php:\n    {} install\n",
        ctx.composer
    );
    for tool in tools {
        block.push_str(&format!(
            "    {} install --working-dir={}/{}\n",
            ctx.composer,
            ctx.tools_dir,
            tool.slug()
        ));
    }
    block
}

/// Path of an executable installed by Composer for `tool`, as recipes reference it.
pub(crate) fn vendor_bin(ctx: &RecipeContext, tool: Tool, binary: &str) -> String {
    format!("{}/{}/vendor/bin/{binary}", ctx.tools_dir, tool.slug())
}

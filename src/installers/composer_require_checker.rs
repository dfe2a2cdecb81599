// Composer Require Checker verifies that every symbol the code uses comes from a package
// declared in `composer.json`. Needs no configuration file.

use crate::installers::{ToolInstaller, vendor_bin};
use crate::libs::recipe_writer::RecipeContext;
use crate::schemas::tools::Tool;

pub static INSTALLER: ToolInstaller = ToolInstaller {
    tool: Tool::ComposerRequireChecker,
    packages: &["maglnet/composer-require-checker"],
    recipe,
    templates: &[],
};

fn recipe(ctx: &RecipeContext) -> String {
    format!(
        "\n# Launch Composer Require Checker (see https://github.com/maglnet/ComposerRequireChecker/)\ncheck-deps:\n    {} {} check composer.json\n",
        ctx.php,
        vendor_bin(ctx, Tool::ComposerRequireChecker, "composer-require-checker")
    )
}

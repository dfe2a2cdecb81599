// PHP Copy/Paste Detector. Needs no configuration file.

use crate::installers::{ToolInstaller, vendor_bin};
use crate::libs::recipe_writer::RecipeContext;
use crate::schemas::tools::Tool;

pub static INSTALLER: ToolInstaller = ToolInstaller {
    tool: Tool::PhpCpd,
    packages: &["sebastian/phpcpd"],
    recipe,
    templates: &[],
};

fn recipe(ctx: &RecipeContext) -> String {
    format!(
        "\n# Launch PHP Copy/Paste Detector (see https://github.com/sebastianbergmann/phpcpd)\nphpcpd *paths='src/':\n    {} {} {{{{paths}}}}\n",
        ctx.php,
        vendor_bin(ctx, Tool::PhpCpd, "phpcpd")
    )
}

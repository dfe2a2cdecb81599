// PHP Mess Detector, driven by the `.phpmd.xml` ruleset.

use crate::installers::{ToolInstaller, vendor_bin};
use crate::libs::config_templates::ConfigTemplate;
use crate::libs::recipe_writer::RecipeContext;
use crate::schemas::tools::Tool;

pub static INSTALLER: ToolInstaller = ToolInstaller {
    tool: Tool::PhpMd,
    packages: &["phpmd/phpmd"],
    recipe,
    templates: &[ConfigTemplate {
        destination: ".phpmd.xml",
        bytes: include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/phpmd/.phpmd.xml")),
    }],
};

fn recipe(ctx: &RecipeContext) -> String {
    format!(
        "\n# Launch PHP Mess Detector (see https://phpmd.org/)\nphpmd *paths='src/':\n    {} {} {{{{paths}}}} text .phpmd.xml\n",
        ctx.php,
        vendor_bin(ctx, Tool::PhpMd, "phpmd")
    )
}

// PHP CS Fixer rewrites source files to match a coding standard. Its configuration lives in
// `.php-cs-fixer.dist.php` at the project root; the cache it writes there is ignored through
// the managed `.gitignore` region.

use crate::installers::{ToolInstaller, vendor_bin};
use crate::libs::config_templates::ConfigTemplate;
use crate::libs::recipe_writer::RecipeContext;
use crate::schemas::tools::Tool;

pub static INSTALLER: ToolInstaller = ToolInstaller {
    tool: Tool::PhpCsFixer,
    packages: &["friendsofphp/php-cs-fixer"],
    recipe,
    templates: &[ConfigTemplate {
        destination: ".php-cs-fixer.dist.php",
        bytes: include_bytes!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/templates/phpcsfixer/.php-cs-fixer.dist.php"
        )),
    }],
};

fn recipe(ctx: &RecipeContext) -> String {
    format!(
        "\n# Launch PHP CS Fixer (see https://github.com/PHP-CS-Fixer/PHP-CS-Fixer)\nphpcsfixer:\n    {} {} fix\n",
        ctx.php,
        vendor_bin(ctx, Tool::PhpCsFixer, "php-cs-fixer")
    )
}

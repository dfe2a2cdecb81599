// PHP_CodeSniffer reports coding-standard violations; phpcbf, shipped in the same package,
// fixes the ones it can. Both read the ruleset from `phpcs.xml.dist`, which pulls in the
// Symfony standard installed alongside.

use crate::installers::{ToolInstaller, vendor_bin};
use crate::libs::config_templates::ConfigTemplate;
use crate::libs::recipe_writer::RecipeContext;
use crate::schemas::tools::Tool;

pub static INSTALLER: ToolInstaller = ToolInstaller {
    tool: Tool::PhpCs,
    packages: &["squizlabs/php_codesniffer", "escapestudios/symfony2-coding-standard"],
    recipe,
    templates: &[ConfigTemplate {
        destination: "phpcs.xml.dist",
        bytes: include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/phpcs/phpcs.xml.dist")),
    }],
};

fn recipe(ctx: &RecipeContext) -> String {
    let mut block = format!(
        "\n# Launch PHP_CodeSniffer (see https://github.com/squizlabs/PHP_CodeSniffer)\nphpcs:\n    {} {} -s --standard=phpcs.xml.dist\n",
        ctx.php,
        vendor_bin(ctx, Tool::PhpCs, "phpcs")
    );
    block.push_str(&format!(
        "\n# Launch PHP_CodeBeautifier (see https://github.com/squizlabs/PHP_CodeSniffer/wiki/Fixing-Errors-Automatically)\nphpcbf *paths='./src ./tests':\n    {} {} --standard=phpcs.xml.dist {{{{paths}}}}\n",
        ctx.php,
        vendor_bin(ctx, Tool::PhpCs, "phpcbf")
    ));
    block
}

// Command-line definitions for `php-tooling`.

// Top-level parser, subcommands and their arguments.
pub mod cmd_enums;

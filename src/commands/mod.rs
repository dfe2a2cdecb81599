// Register application subcommands.
// Each module corresponds to one `php-tooling` command-line action.

// Settles the configuration and installs the selected tools.
pub mod install;
// Lists the services of the project's compose file.
pub mod services;

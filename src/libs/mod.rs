// Building blocks of an installation run, roughly in the order they are used.

// Finds the compose file and lists its services.
pub mod environment_probe;
// Reads the optional YAML answers file.
pub mod config_loading;
// Interactive questions.
pub mod configuration_form;
// Runs external commands on the host or in a container.
pub mod command_executor;
// Works out where commands effectively run.
pub mod working_directory;
// Creates the tools root and per-tool directories.
pub mod directory_provisioner;
// Appends recipes to the justfile.
pub mod recipe_writer;
// Installs the selected tools.
pub mod tool_installer;
// Copies bundled configuration files into the project.
pub mod config_templates;
// Maintains the managed region of `.gitignore`.
pub mod ignore_updater;
// Shared path and file helpers.
pub mod utilities;

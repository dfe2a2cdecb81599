// This is the main module file for the `utilities` directory.
// It declares the helper submodules used by the installer components.

// Reading, appending and writing project files.
pub mod file_operations;
// Joining, cleaning and rendering tools-root paths.
pub mod path_helpers;

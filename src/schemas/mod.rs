// Typed data model shared by every part of the installer.

// Errors for every failure category of a run.
pub mod errors;
// Host vs. container execution and the container-invocation prefix.
pub mod execution;
// Answers merging and the frozen install configuration.
pub mod install_config;
// The closed catalogue of installable tools.
pub mod tools;

// This file implements the application's logging system.
// It provides macros for the different log levels (INFO, WARN, ERROR, DEBUG)
// on top of `tracing`, and installs the subscriber that renders them on stderr.

use tracing::Level;

/// Provides convenient logging macros.
/// `#[macro_export]` makes these macros globally available within the crate.

// `log_info!` for general progress messages.
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => (tracing::info!("{}", format!($($arg)*)));
}

// `log_warn!` for non-critical issues or noteworthy conditions.
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => (tracing::warn!("{}", format!($($arg)*)));
}

// `log_error!` for failures that end the run.
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => (tracing::error!("{}", format!($($arg)*)));
}

// `log_debug!` for detailed internal tracing.
// Only rendered when the logger was initialized with `debug = true`.
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => (tracing::debug!("{}", format!($($arg)*)));
}

/// Initializes the logger.
/// This function should be called once at application startup; later calls are ignored.
///
/// # Arguments
/// * `debug`: If `true`, enables debug logging; otherwise only info, warn, and error messages are printed.
pub fn init(debug: bool) {
    let level = if debug { Level::DEBUG } else { Level::INFO };

    // Output goes to stderr so it never mixes with what the invoked tools print on stdout.
    let installed = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok();

    if installed {
        log_debug!("Logger initialized in DEBUG mode");
    }
}

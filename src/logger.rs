//! Logging setup on top of `env_logger`.

use log::LevelFilter;

/// Initialize the logger with the specified level.
///
/// `RUST_LOG` is read first; the explicit level then overrides the global
/// filter. Panics if a logger is already installed.
pub fn init_logger(level: LevelFilter) {
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp_millis()
        .format_target(false)
        .init();
}

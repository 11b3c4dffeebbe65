//! Logging utilities and structured logging support

pub use log::{debug, info, warn, error, trace};

/// Initialize the logging system with the default filter (`RUST_LOG` or `info`)
pub fn init() {
    init_with_level("info");
}

/// Initialize the logging system with a fallback level
///
/// `RUST_LOG` still wins when it is set, so configured levels only apply to
/// runs without an explicit environment filter. Calling this more than once
/// is harmless; later calls are ignored.
pub fn init_with_level(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    if env_logger::Builder::from_env(env).try_init().is_err() {
        log::debug!("Logger already initialized, keeping existing configuration");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_late_init_keeps_first_logger() {
        init_with_level("warn");
        init();
        init_with_level("debug");
        log::error!("still routed through the first logger");
    }
}

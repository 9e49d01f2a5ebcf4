//! Logger initialization for tests.
use env_logger::Builder;
use log::LevelFilter;
use std::sync::Once;

static INIT: Once = Once::new();

/// Initializes `env_logger` once per process.
///
/// Defaults to the `Info` level, `RUST_LOG` overrides it.
pub fn init_logger() {
    INIT.call_once_force(|_| {
        let mut builder = Builder::new();

        builder
            .filter_level(LevelFilter::Info)
            .filter_module("collide", LevelFilter::Info)
            .format_timestamp_millis()
            .is_test(true)
            .parse_default_env();

        let _ = builder.try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::{debug, info};

    #[test]
    fn test_init_logger_twice() {
        init_logger();
        init_logger();
        debug!("Debug message in test");
        info!("Info message in test");
    }
}

//! Subscriber installation for tests and small embedders.
//!
//! The library itself only emits `tracing` events and spans.  With the
//! `subscriber` feature enabled, [`init_tracing`] installs a `fmt` subscriber
//! that writes through the test harness; without it, [`init_tracing`] does
//! nothing.

/// Environment variable naming the maximum level to print.
pub const LOG_LEVEL_VAR: &str = "GRAPHLIB_LOG";

#[cfg(feature = "subscriber")]
mod enabled {
    use std::sync::Once;

    use tracing::Level;

    use super::LOG_LEVEL_VAR;

    /// Installs the global subscriber once per process.  Later calls, and
    /// calls made after another subscriber was installed, are ignored.
    pub fn init_tracing() {
        static INIT: Once = Once::new();
        INIT.call_once(|| {
            let _ = tracing_subscriber::fmt()
                .with_test_writer()
                .with_target(false)
                .with_max_level(max_level())
                .try_init();
        });
    }

    fn max_level() -> Level {
        std::env::var(LOG_LEVEL_VAR)
            .ok()
            .and_then(|level| level.parse().ok())
            .unwrap_or(Level::WARN)
    }
}

#[cfg(not(feature = "subscriber"))]
mod disabled {
    pub fn init_tracing() {
        // No-op without the subscriber feature
    }
}

#[cfg(feature = "subscriber")]
pub use enabled::*;

#[cfg(not(feature = "subscriber"))]
pub use disabled::*;

//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::{DEFAULT_LOG_FILTER, ENV_LOG};

static INIT: Once = Once::new();

/// Initialize the Vigil tracing/logging system.
///
/// Reads `VIGIL_LOG` for per-target log levels.
/// Format: `VIGIL_LOG=vigil_engine::overrides=debug,vigil_engine::report=warn`
///
/// Falls back to `vigil=info` if `VIGIL_LOG` is not set or is invalid.
/// Calling it more than once is a no-op, and a subscriber installed by the
/// host beforehand is left in place.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(ENV_LOG)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_thread_ids(true),
            )
            .with(filter)
            .try_init();
    });
}

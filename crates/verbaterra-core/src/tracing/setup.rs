//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::{DEFAULT_LOG_FILTER, LOG_ENV_VAR};

static INIT: Once = Once::new();

/// Initialize the VerbaTerra tracing/logging system.
///
/// Reads `VERBATERRA_LOG` for per-crate log levels, e.g.
/// `VERBATERRA_LOG=verbaterra_analysis=debug,verbaterra_cli=info`.
///
/// Falls back to `verbaterra=info` if `VERBATERRA_LOG` is not set or is
/// invalid. Output goes to stderr so stdout stays free for command output.
///
/// Idempotent. If another global subscriber is already installed, this
/// leaves it in place.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}

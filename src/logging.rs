//! # Logging
//!
//! Installation of a `tracing` subscriber for the binaries. The library itself only emits events.
use std::io;
use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the filter directives, for example `lpquad=debug`.
pub const LOG_ENV: &str = "LPQUAD_LOG";
/// Directives used when `LOG_ENV` is unset or invalid.
pub const DEFAULT_DIRECTIVES: &str = "lpquad=warn";

static INIT: Once = Once::new();

/// Install a global subscriber that writes to standard error.
///
/// Standard output is reserved for the results. Calling this more than once has no effect.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(io::stderr)
                    .with_target(true)
                    .with_line_number(true),
            )
            .with(filter)
            .init();
    });
}

//! Logging initialization.
//!
//! Structured logging via `tracing`, written to stderr so stdout carries only
//! the created path. Verbosity comes from `MKPOST_LOG` (an `EnvFilter`
//! directive such as `debug` or `mkpost=trace`) and defaults to `warn`.

use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the filter directive
pub const LOG_ENV: &str = "MKPOST_LOG";

/// Directive used when `MKPOST_LOG` is unset or unparsable
pub const DEFAULT_DIRECTIVE: &str = "warn";

/// Initializes the global tracing subscriber.
///
/// Uses `try_init()` so calling this more than once (e.g. in tests) is safe.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    let use_ansi = std::io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(use_ansi)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "TOKENAUDIT_LOG";

/// Filter used when `TOKENAUDIT_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "tokenaudit=info";

/// Initialize the tracing/logging system.
///
/// Reads `TOKENAUDIT_LOG` for per-subsystem log levels.
/// Format: `TOKENAUDIT_LOG=tokenaudit_analysis::scanner=debug,tokenaudit_analysis::schema=warn`
///
/// Events go to stderr so stdout stays free for reports. Idempotent.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .init();
    });
}

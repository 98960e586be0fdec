//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::defaults;

static INIT: Once = Once::new();

/// Initialize the prank tracing/logging system.
///
/// Reads the `PRANK_LOG` environment variable for filtering.
/// Format: `PRANK_LOG=prank_engine=debug,prank_core=warn`
///
/// Falls back to `prank=info` if `PRANK_LOG` is not set or is invalid.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(defaults::LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(defaults::DEFAULT_LOG_FILTER));
    install(filter);
}

/// Initialize tracing with a custom filter string (for embedding or tests).
pub fn init_tracing_with_filter(filter: &str) {
    install(EnvFilter::new(filter));
}

fn install(filter: EnvFilter) {
    INIT.call_once(|| {
        // A host application may already own the global subscriber.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}

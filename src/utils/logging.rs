#![cfg(feature = "desktop")]

use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt, EnvFilter};

/// Desktop builds log to stderr, filtered by `RUST_LOG` (default `info`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .try_init();
}

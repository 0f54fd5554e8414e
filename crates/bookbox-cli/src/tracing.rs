//! Logging setup with Bookbox segment prefixes.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize tracing with a custom default filter.
///
/// Sets up tracing-subscriber with:
/// - Environment filter (RUST_LOG), falling back to `default_filter`
/// - Compact format on stderr, keeping stdout for the menus
pub fn init_with_filter(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

/// Segment prefixes for log lines.
pub mod prefix {
    /// Session startup prefix
    pub const OPEN: &str = "✿";
    /// Session shutdown prefix
    pub const CLOSE: &str = "❀";
    /// Database operations prefix
    pub const DB: &str = "⊔";
}

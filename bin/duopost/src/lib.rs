//! duopost CLI Library
//!
//! Command implementations for the duopost binary, exposed as a library so
//! they can be tested and reused.
//!
//! # Modules
//!
//! - [`cmd`] - Command implementations (sitemap, url)
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use duopost::cmd::{self, sitemap::SitemapOptions};
//!
//! cmd::sitemap::run(Path::new("duopost.toml"), SitemapOptions::default()).unwrap();
//! ```

pub mod cmd;

pub use duopost_core::{Config, Locale};
pub use duopost_sitemap::{SitemapDates, SitemapScanner, SitemapWriter};

/// Initialize tracing with the specified verbosity level.
///
/// # Arguments
///
/// * `verbose` - Verbosity level (0 = WARN, 1 = INFO, 2 = DEBUG, 3+ = TRACE)
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}

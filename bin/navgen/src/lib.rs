//! navgen CLI library
//!
//! This library provides the functionality behind the navgen CLI. It is used
//! by the binary entry point while also exposing public APIs for integration
//! purposes.
//!
//! # Modules
//!
//! - [`cmd`] - Command implementations (generate, check)
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use navgen::cmd;
//!
//! // Regenerate the sidebar module
//! cmd::generate::run(Path::new("navgen.toml"), None, None).unwrap();
//! ```

pub mod cmd;

// Re-export core types for convenience
pub use navgen_core::{Config, SidebarEntry};
pub use navgen_generator::{GenerateStats, Generator};

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
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}

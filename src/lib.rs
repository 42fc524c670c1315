//! opgrid - graphical editor for custom FM operator algorithms.
//!
//! [`app::Editor`] drives the window; [`ui`] holds the panels and the
//! input handling they share with the headless tests.

pub mod app;
pub mod ui;

/// Install the `tracing` subscriber. `RUST_LOG` overrides the default
/// `info` level.
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

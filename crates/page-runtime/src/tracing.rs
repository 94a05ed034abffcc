//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the global `tracing` subscriber used by every
//! binary in the workspace.
//!
//! The format is compact and hides the module path (`with_target(false)`);
//! the dispatcher tags its records with a `component` field instead.
//!
//! ```bash
//! RUST_LOG=info cargo run -p flavor-menu     # startup statistics, one line per event
//! RUST_LOG=debug cargo run -p flavor-menu    # full event payloads
//! ```
//!
//! With `RUST_LOG=info` a short session looks like:
//!
//! ```text
//! INFO Quantities initialized flavors=8
//! INFO Average price average_price="1.67"
//! INFO Cheap flavors cheap_flavors=["Vanilla Bean costs $1.25", "Mint Chip costs $1.45"]
//! INFO Dispatcher started component="MenuPage"
//! INFO Event handled component="MenuPage" outcome=Order(Applied { flavor: "Mint Chip", remaining: 4 })
//! INFO Shutdown component="MenuPage" handled=1
//! ```
//!
//! Client wrappers are `#[instrument]`ed, so with `RUST_LOG=debug` each
//! request shows up inside a span named after the client method.

/// Installs a compact, `RUST_LOG`-driven subscriber. Call once per process.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}

//! Tracing setup shared by binaries built on the store actors.

/// Initializes structured logging for the whole process.
///
/// Filtering is driven by `RUST_LOG` (e.g. `RUST_LOG=info`,
/// `RUST_LOG=marketplace=debug`). Call once, from `main`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}

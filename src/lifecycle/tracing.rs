//! # Logging
//!
//! Structured logging through `tracing`, filtered by `RUST_LOG`.
//!
//! ```bash
//! RUST_LOG=info cargo run
//! # per-stage result counts of the filter chain and full request payloads
//! RUST_LOG=debug cargo run
//! RUST_LOG=course_resources::search=trace cargo run
//! ```
//!
//! Entry points log their full payload once at `debug`:
//!
//! ```rust,ignore
//! debug!(?form, "upload called");
//! ```
//!
//! With `debug` enabled an advanced search logs the rows left after each
//! filter stage:
//!
//! ```text
//! DEBUG advanced_search: Filtering rows=12
//! DEBUG advanced_search: state rows=7
//! DEBUG advanced_search: tags rows=2
//! INFO advanced_search: Advanced search results=2
//! ```

/// Installs the global subscriber. Call once, at startup.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}

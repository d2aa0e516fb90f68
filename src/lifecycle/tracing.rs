//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing_subscriber` formatter driven by `RUST_LOG`.
//!
//! Every contract call opens a span carrying the resource path (and, on the live backend, the API
//! version), so log lines read as a request path:
//!
//! ```text
//! INFO seeding: Created entity_type="Player" id=6f0c… size=1
//! DEBUG list{resource="players"}: List entity_type="Player" total=2 filtered=1 returned=1
//! WARN get{resource="players" version=v1}:execute{method=GET path=v1/players/…}: Request failed status=500
//! ```
//!
//! ## Levels
//!
//! - `info`: successful mutations with `entity_type`, `id` and store `size`.
//! - `debug`: payloads on entry (`?input`, `?edit`, `?query`), cache hits and evictions.
//! - `warn`: failed live requests with method, path and status. `NotFound` is not logged as a
//!   failure.
//!
//! ```bash
//! RUST_LOG=info cargo run
//! RUST_LOG=debug cargo run
//! RUST_LOG=resource_framework=debug cargo run
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // entity_type and resource fields identify the source
        .compact()
        .init();
}

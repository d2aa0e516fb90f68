//! Wiring for the in-memory backend and process-wide setup.

pub mod fake;
pub mod fake_store;
pub mod tracing;

pub use fake::FakeRepositoryApi;
pub use fake_store::FakeDataStore;

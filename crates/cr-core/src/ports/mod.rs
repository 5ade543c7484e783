//! Port interfaces for the application layer
//!
//! Ports define the contract between the review use cases and their
//! infrastructure implementations. Use cases receive them as
//! `Arc<dyn Port>` so storage, randomness and time can be swapped in tests.

mod clock;
pub mod errors;
mod metrics;
pub mod submission_store;

pub use clock::ClockPort;
pub use errors::SubmissionStoreError;
pub use metrics::MetricsGeneratorPort;
pub use submission_store::SubmissionStorePort;

//! ClipReview
//!
//! Bootstrap for the clip review workflow: configuration loading, tracing
//! setup and wiring of storage adapters into the review use cases.

pub mod bootstrap;

pub use bootstrap::{init_tracing_subscriber, load_config, wire_review_app};
pub use cr_app::ReviewUseCases;
pub use cr_core::{
    ClipSubmission, CollectionName, Decision, PerformanceSummary, ReviewConfig, ReviewError,
    StatusPartitions, SubmissionId, SubmissionRecord, SubmissionStatus,
};

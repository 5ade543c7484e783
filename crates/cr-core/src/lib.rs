//! # cr-core
//!
//! Core domain models and business rules for ClipReview.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

pub mod config;
pub mod ids;
pub mod ports;
pub mod submission;

// Re-export commonly used types at the crate root
pub use config::ReviewConfig;
pub use ids::{CollectionName, SubmissionId};
pub use submission::{
    partition_by_status, ClipSubmission, Decision, PerformanceMetrics, PerformanceSummary,
    Resolution, ReviewError, StatusPartitions, SubmissionRecord, SubmissionStatus,
};

//! Clip submission domain: the record, its review lifecycle and read-side projections.

pub mod decision;
pub mod error;
pub mod model;
pub mod partition;
pub mod record;
pub mod summary;

pub use decision::{Decision, PerformanceMetrics, Resolution};
pub use error::ReviewError;
pub use model::{ClipSubmission, NewClipSubmission, SubmissionStatus};
pub use partition::{partition_by_status, StatusPartitions};
pub use record::SubmissionRecord;
pub use summary::PerformanceSummary;

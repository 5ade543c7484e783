//! Review workflow use cases
//!
//! SubmitClip            → editor uploads, record lands Pending in every collection
//!         ↓
//! ListReviewPartitions  → reviewer lists (pending / approved / rejected)
//!         ↓
//! ApplyDecision         → approve or reject, written to every collection
//!         ↓
//! GetPerformanceSummary → dashboard totals

pub mod apply_decision;
pub mod get_performance_summary;
mod internal;
pub mod list_review_partitions;
pub mod submit_clip;

pub use apply_decision::ApplyDecision;
pub use get_performance_summary::GetPerformanceSummary;
pub use list_review_partitions::ListReviewPartitions;
pub use submit_clip::SubmitClip;

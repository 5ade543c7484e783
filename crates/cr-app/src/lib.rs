//! ClipReview application layer
//!
//! Use cases for the clip review workflow. Presentation code calls these and
//! never touches collection contents directly.

pub mod deps;
pub mod usecase_factory;
pub mod usecases;

pub use deps::AppDeps;
pub use usecase_factory::ReviewUseCases;
pub use usecases::{ApplyDecision, GetPerformanceSummary, ListReviewPartitions, SubmitClip};

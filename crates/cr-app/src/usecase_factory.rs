//! Builds use cases from [`AppDeps`] and the configured collection layout.

use std::sync::Arc;

use cr_core::{CollectionName, ReviewConfig};

use crate::deps::AppDeps;
use crate::usecases::{ApplyDecision, GetPerformanceSummary, ListReviewPartitions, SubmitClip};

pub struct ReviewUseCases {
    deps: AppDeps,
    tracked: Vec<CollectionName>,
    review: CollectionName,
    editor: CollectionName,
}

impl ReviewUseCases {
    pub fn new(deps: AppDeps, config: &ReviewConfig) -> Self {
        Self {
            deps,
            tracked: config.tracked_collections.clone(),
            review: config.review_collection.clone(),
            editor: config.editor_collection.clone(),
        }
    }

    pub fn apply_decision(&self) -> ApplyDecision {
        ApplyDecision::from_ports(
            Arc::clone(&self.deps.store),
            Arc::clone(&self.deps.metrics),
            self.tracked.clone(),
        )
    }

    pub fn submit_clip(&self) -> SubmitClip {
        SubmitClip::from_ports(
            Arc::clone(&self.deps.store),
            Arc::clone(&self.deps.clock),
            self.tracked.clone(),
        )
    }

    /// Reviewer-facing lists.
    pub fn review_partitions(&self) -> ListReviewPartitions {
        ListReviewPartitions::new(Arc::clone(&self.deps.store), self.review.clone())
    }

    /// Editor-facing lists.
    pub fn editor_partitions(&self) -> ListReviewPartitions {
        ListReviewPartitions::new(Arc::clone(&self.deps.store), self.editor.clone())
    }

    pub fn editor_summary(&self) -> GetPerformanceSummary {
        GetPerformanceSummary::new(Arc::clone(&self.deps.store), self.editor.clone())
    }

    pub fn review_summary(&self) -> GetPerformanceSummary {
        GetPerformanceSummary::new(Arc::clone(&self.deps.store), self.review.clone())
    }
}

use std::sync::Arc;

use cr_core::ports::SubmissionStorePort;
use cr_core::{partition_by_status, CollectionName, ReviewError, StatusPartitions};
use tracing::debug;

use super::internal::load_or_empty;

/// Snapshot of one collection split into pending, approved and rejected lists.
///
/// Not a subscription: call again after every decision.
pub struct ListReviewPartitions {
    store: Arc<dyn SubmissionStorePort>,
    collection: CollectionName,
}

impl ListReviewPartitions {
    pub fn new(store: Arc<dyn SubmissionStorePort>, collection: CollectionName) -> Self {
        Self { store, collection }
    }

    #[tracing::instrument(
        name = "usecase.list_review_partitions.execute",
        skip(self),
        fields(collection = %self.collection)
    )]
    pub fn execute(&self) -> Result<StatusPartitions, ReviewError> {
        let clips = load_or_empty(self.store.as_ref(), &self.collection)?;
        let partitions = partition_by_status(clips);
        debug!(
            pending = partitions.pending.len(),
            approved = partitions.approved.len(),
            rejected = partitions.rejected.len(),
            "partitions loaded"
        );
        Ok(partitions)
    }
}

use std::sync::Arc;

use cr_core::ports::SubmissionStorePort;
use cr_core::{CollectionName, PerformanceSummary, ReviewError};

use super::internal::load_or_empty;

/// Dashboard totals (views, earnings, per-status counts) for one collection.
pub struct GetPerformanceSummary {
    store: Arc<dyn SubmissionStorePort>,
    collection: CollectionName,
}

impl GetPerformanceSummary {
    pub fn new(store: Arc<dyn SubmissionStorePort>, collection: CollectionName) -> Self {
        Self { store, collection }
    }

    #[tracing::instrument(
        name = "usecase.get_performance_summary.execute",
        skip(self),
        fields(collection = %self.collection)
    )]
    pub fn execute(&self) -> Result<PerformanceSummary, ReviewError> {
        let clips = load_or_empty(self.store.as_ref(), &self.collection)?;
        Ok(PerformanceSummary::from_submissions(&clips))
    }
}

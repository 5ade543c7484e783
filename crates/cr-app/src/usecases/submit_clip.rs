use std::sync::Arc;

use cr_core::ports::{ClockPort, SubmissionStoreError, SubmissionStorePort};
use cr_core::submission::NewClipSubmission;
use cr_core::{ClipSubmission, CollectionName, ReviewError, SubmissionId, SubmissionRecord};
use tracing::info;

/// Records an editor's clip as `Pending` in every tracked collection.
pub struct SubmitClip {
    store: Arc<dyn SubmissionStorePort>,
    clock: Arc<dyn ClockPort>,
    collections: Vec<CollectionName>,
}

impl SubmitClip {
    pub fn from_ports(
        store: Arc<dyn SubmissionStorePort>,
        clock: Arc<dyn ClockPort>,
        collections: Vec<CollectionName>,
    ) -> Self {
        Self {
            store,
            clock,
            collections,
        }
    }

    /// Validates the input, then appends the new record to each collection.
    ///
    /// Every collection is read before any is written, so a corrupt or
    /// unreadable collection aborts the submission with nothing persisted.
    /// Existing entries are written back as they were read.
    #[tracing::instrument(
        name = "usecase.submit_clip.execute",
        skip(self, input),
        fields(video_id = %input.video_id)
    )]
    pub fn execute(&self, input: NewClipSubmission) -> Result<ClipSubmission, ReviewError> {
        let submission = input.into_pending(SubmissionId::new(), self.clock.today())?;
        let record = SubmissionRecord::from_submission(&submission)
            .map_err(|e| SubmissionStoreError::Serialize(e.to_string()))?;

        let mut loaded = Vec::with_capacity(self.collections.len());
        for name in &self.collections {
            loaded.push((name, self.store.load_collection(name)?));
        }

        for (name, mut records) in loaded {
            records.push(record.clone());
            self.store.save_collection(name, &records)?;
        }

        info!(submission_id = %submission.id, "Clip submitted for review");
        Ok(submission)
    }
}

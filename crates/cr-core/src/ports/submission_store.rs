use crate::ids::CollectionName;
use crate::ports::errors::SubmissionStoreError;
use crate::submission::SubmissionRecord;

/// Keyed, whole-collection persistence of clip submissions.
///
/// Reads reflect the last completed write. A write replaces the entire
/// collection and is never observable half-done. Entries are handed over as
/// [`SubmissionRecord`]s so a rewrite keeps them as they were stored.
pub trait SubmissionStorePort: Send + Sync {
    /// All entries under `name`, in stored order.
    ///
    /// A collection that was never written is empty, not an error.
    /// Content that is not a JSON array of objects yields
    /// [`SubmissionStoreError::Malformed`].
    fn load_collection(
        &self,
        name: &CollectionName,
    ) -> Result<Vec<SubmissionRecord>, SubmissionStoreError>;

    /// Replace the contents of `name` with `records`.
    fn save_collection(
        &self,
        name: &CollectionName,
        records: &[SubmissionRecord],
    ) -> Result<(), SubmissionStoreError>;
}

#[cfg(test)]
mockall::mock! {
    pub SubmissionStore {}

    impl SubmissionStorePort for SubmissionStore {
        fn load_collection(
            &self,
            name: &CollectionName,
        ) -> Result<Vec<SubmissionRecord>, SubmissionStoreError>;
        fn save_collection(
            &self,
            name: &CollectionName,
            records: &[SubmissionRecord],
        ) -> Result<(), SubmissionStoreError>;
    }
}

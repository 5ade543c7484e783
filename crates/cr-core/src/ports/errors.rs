use thiserror::Error;

#[derive(Debug, Error)]
pub enum SubmissionStoreError {
    /// Persisted content exists but is not a sequence of submissions.
    #[error("collection {collection} is malformed: {reason}")]
    Malformed { collection: String, reason: String },

    #[error("collection {collection} storage failure: {reason}")]
    Io { collection: String, reason: String },

    #[error("serialize submissions failed: {0}")]
    Serialize(String),

    #[error("invalid collection name: {0:?}")]
    InvalidCollectionName(String),
}

impl SubmissionStoreError {
    pub fn is_malformed(&self) -> bool {
        matches!(self, SubmissionStoreError::Malformed { .. })
    }
}

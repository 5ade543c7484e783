use thiserror::Error;

use crate::ids::SubmissionId;
use crate::ports::SubmissionStoreError;
use crate::submission::model::SubmissionStatus;

#[derive(Debug, Error)]
pub enum ReviewError {
    #[error("submission not found in any tracked collection: {0}")]
    NotFound(SubmissionId),

    #[error("submission {id} was already decided (status: {status})")]
    AlreadyDecided {
        id: SubmissionId,
        status: SubmissionStatus,
    },

    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error(transparent)]
    Store(#[from] SubmissionStoreError),
}

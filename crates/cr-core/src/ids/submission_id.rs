use serde::{Deserialize, Serialize};

/// Opaque identifier of a clip submission.
///
/// Stable across every collection that tracks the same logical submission.
/// Serialized as a bare JSON string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmissionId(String);

impl_id!(SubmissionId);

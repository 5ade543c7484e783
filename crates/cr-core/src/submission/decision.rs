use serde::{Deserialize, Serialize};

use crate::submission::model::SubmissionStatus;

/// Simulated performance of an approved clip.
///
/// Synthesized at approval time. Nothing here is measured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    pub views: u64,
    pub earnings: u64,
}

/// A reviewer's verdict on a pending submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Approve,
    Reject { feedback: Option<String> },
}

impl Decision {
    pub fn reject(feedback: impl Into<String>) -> Self {
        Decision::Reject {
            feedback: Some(feedback.into()),
        }
    }

    pub fn target_status(&self) -> SubmissionStatus {
        match self {
            Decision::Approve => SubmissionStatus::Approved,
            Decision::Reject { .. } => SubmissionStatus::Rejected,
        }
    }

    /// Fixes every value the decision will write.
    ///
    /// `generate` runs at most once, and only for approvals. The returned
    /// resolution is applied verbatim to each copy of the submission.
    pub fn resolve(self, generate: impl FnOnce() -> PerformanceMetrics) -> Resolution {
        match self {
            Decision::Approve => Resolution::Approved(generate()),
            Decision::Reject { feedback } => Resolution::Rejected { feedback },
        }
    }
}

/// A decision with its derived fields already computed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Approved(PerformanceMetrics),
    Rejected { feedback: Option<String> },
}

impl Resolution {
    pub fn status(&self) -> SubmissionStatus {
        match self {
            Resolution::Approved(_) => SubmissionStatus::Approved,
            Resolution::Rejected { .. } => SubmissionStatus::Rejected,
        }
    }
}

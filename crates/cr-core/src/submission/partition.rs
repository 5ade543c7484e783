use serde::Serialize;

use crate::submission::model::{ClipSubmission, SubmissionStatus};

/// Submissions of one collection grouped by status, in collection order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StatusPartitions {
    pub pending: Vec<ClipSubmission>,
    pub approved: Vec<ClipSubmission>,
    pub rejected: Vec<ClipSubmission>,
}

impl StatusPartitions {
    pub fn len(&self) -> usize {
        self.pending.len() + self.approved.len() + self.rejected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, status: SubmissionStatus) -> &[ClipSubmission] {
        match status {
            SubmissionStatus::Pending => &self.pending,
            SubmissionStatus::Approved => &self.approved,
            SubmissionStatus::Rejected => &self.rejected,
        }
    }
}

/// Splits `submissions` into pending, approved and rejected.
///
/// Every record lands in exactly one partition, chosen by its `status`.
/// Relative order within a partition matches the input.
pub fn partition_by_status(submissions: Vec<ClipSubmission>) -> StatusPartitions {
    let mut partitions = StatusPartitions::default();
    for submission in submissions {
        match submission.status {
            SubmissionStatus::Pending => partitions.pending.push(submission),
            SubmissionStatus::Approved => partitions.approved.push(submission),
            SubmissionStatus::Rejected => partitions.rejected.push(submission),
        }
    }
    partitions
}

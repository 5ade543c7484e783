use serde::Serialize;

use crate::submission::model::{ClipSubmission, SubmissionStatus};

/// Dashboard totals over one collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PerformanceSummary {
    pub total_views: u64,
    pub total_earnings: f64,
    pub total: usize,
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
}

impl PerformanceSummary {
    pub fn from_submissions<'a>(submissions: impl IntoIterator<Item = &'a ClipSubmission>) -> Self {
        submissions
            .into_iter()
            .fold(Self::default(), |mut summary, clip| {
                summary.total += 1;
                summary.total_views = summary.total_views.saturating_add(clip.views);
                summary.total_earnings += clip.earnings;
                match clip.status {
                    SubmissionStatus::Pending => summary.pending += 1,
                    SubmissionStatus::Approved => summary.approved += 1,
                    SubmissionStatus::Rejected => summary.rejected += 1,
                }
                summary
            })
    }
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::ids::SubmissionId;
use crate::submission::error::ReviewError;

/// Review lifecycle state of a submission.
///
/// `Pending` moves exactly once to `Approved` or `Rejected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubmissionStatus {
    Pending,
    Approved,
    Rejected,
}

impl SubmissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionStatus::Pending => "Pending",
            SubmissionStatus::Approved => "Approved",
            SubmissionStatus::Rejected => "Rejected",
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, SubmissionStatus::Pending)
    }
}

impl Display for SubmissionStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubmissionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(SubmissionStatus::Pending),
            "Approved" => Ok(SubmissionStatus::Approved),
            "Rejected" => Ok(SubmissionStatus::Rejected),
            other => Err(format!("unknown submission status: {other}")),
        }
    }
}

/// An editor-produced clip tracked through review.
///
/// Field names follow the persisted JSON layout (`videoId`, `submittedDate`, ...).
/// Only `id` and `status` are required when reading. Entries written by other
/// clients may omit the descriptive fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClipSubmission {
    pub id: SubmissionId,
    #[serde(default)]
    pub title: String,
    /// Raw source content the clip was cut from. Relation only.
    #[serde(default)]
    pub video_id: String,
    #[serde(default)]
    pub creator_name: String,
    #[serde(default)]
    pub editor_name: String,
    #[serde(default)]
    pub clip_url: String,
    #[serde(default)]
    pub hashtags: String,
    #[serde(default)]
    pub thumbnail_url: String,
    pub status: SubmissionStatus,
    /// Zero unless approved.
    #[serde(default)]
    pub views: u64,
    /// Currency amount. Zero unless approved.
    #[serde(default, serialize_with = "serialize_amount")]
    pub earnings: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
    #[serde(default)]
    pub file_size: String,
    #[serde(default)]
    pub duration: String,
}

/// Whole amounts are written as integers, the way the web client stores them.
fn serialize_amount<S: Serializer>(amount: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if amount.fract() == 0.0 && *amount >= 0.0 {
        serializer.serialize_u64(*amount as u64)
    } else {
        serializer.serialize_f64(*amount)
    }
}

/// Editor input for a new submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewClipSubmission {
    pub title: String,
    pub video_id: String,
    pub creator_name: String,
    pub editor_name: String,
    pub clip_url: String,
    pub hashtags: String,
    pub thumbnail_url: String,
    pub file_size: String,
    pub duration: String,
}

impl NewClipSubmission {
    /// Turns the input into a fresh `Pending` record.
    ///
    /// Title, clip URL and hashtags are required; blank values are rejected.
    pub fn into_pending(
        self,
        id: SubmissionId,
        submitted_date: NaiveDate,
    ) -> Result<ClipSubmission, ReviewError> {
        if self.title.trim().is_empty() {
            return Err(ReviewError::MissingField("title"));
        }
        if self.clip_url.trim().is_empty() {
            return Err(ReviewError::MissingField("clipUrl"));
        }
        if self.hashtags.trim().is_empty() {
            return Err(ReviewError::MissingField("hashtags"));
        }

        Ok(ClipSubmission {
            id,
            title: self.title,
            video_id: self.video_id,
            creator_name: self.creator_name,
            editor_name: self.editor_name,
            clip_url: self.clip_url,
            hashtags: self.hashtags,
            thumbnail_url: self.thumbnail_url,
            status: SubmissionStatus::Pending,
            views: 0,
            earnings: 0.0,
            submitted_date: Some(submitted_date),
            feedback: None,
            file_size: self.file_size,
            duration: self.duration,
        })
    }
}

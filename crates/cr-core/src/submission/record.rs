use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::ids::SubmissionId;
use crate::submission::decision::Resolution;
use crate::submission::model::ClipSubmission;

/// One stored entry of a collection, kept as the JSON object it was read as.
///
/// Keys keep their stored order and fields this crate does not know about
/// survive a rewrite. Only [`SubmissionRecord::apply`] changes the content,
/// and only the review fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmissionRecord(Map<String, Value>);

impl SubmissionRecord {
    /// Stored form of a typed submission.
    pub fn from_submission(clip: &ClipSubmission) -> Result<Self, serde_json::Error> {
        serde_json::to_value(clip).and_then(serde_json::from_value)
    }

    /// Typed view of the record.
    ///
    /// Only `id` and `status` are required. Absent descriptive fields read as
    /// empty, unknown fields are ignored.
    pub fn to_submission(&self) -> Result<ClipSubmission, serde_json::Error> {
        serde_json::from_value(Value::Object(self.0.clone()))
    }

    pub fn id(&self) -> Option<&str> {
        self.0.get("id").and_then(Value::as_str)
    }

    pub fn has_id(&self, id: &SubmissionId) -> bool {
        self.id() == Some(id.as_str())
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Writes an already-resolved decision into the review fields.
    ///
    /// Existing keys are updated in place. Every other key is left as is.
    pub fn apply(&mut self, resolution: &Resolution) {
        let status = resolution.status();
        self.0
            .insert("status".to_string(), Value::from(status.as_str()));
        match resolution {
            Resolution::Approved(metrics) => {
                self.0.insert("views".to_string(), Value::from(metrics.views));
                self.0
                    .insert("earnings".to_string(), Value::from(metrics.earnings));
                self.0.shift_remove("feedback");
            }
            Resolution::Rejected { feedback } => {
                self.0.insert("views".to_string(), Value::from(0u64));
                self.0.insert("earnings".to_string(), Value::from(0u64));
                match feedback {
                    Some(text) => {
                        self.0
                            .insert("feedback".to_string(), Value::from(text.as_str()));
                    }
                    None => {
                        self.0.shift_remove("feedback");
                    }
                }
            }
        }
    }
}

impl TryFrom<Value> for SubmissionRecord {
    type Error = serde_json::Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        serde_json::from_value(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::submission::decision::PerformanceMetrics;
    use crate::submission::model::test_support::pending;
    use crate::submission::model::SubmissionStatus;
    use serde_json::json;

    fn record(raw: &str) -> SubmissionRecord {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn approval_updates_review_fields_in_place() {
        let mut rec = record(
            r#"{"id":"b2","status":"Pending","views":0,"earnings":0,"feedback":"old","campaignId":"c9"}"#,
        );

        rec.apply(&Resolution::Approved(PerformanceMetrics {
            views: 1234,
            earnings: 56,
        }));

        assert_eq!(
            serde_json::to_string(&rec).unwrap(),
            r#"{"id":"b2","status":"Approved","views":1234,"earnings":56,"campaignId":"c9"}"#
        );
    }

    #[test]
    fn rejection_zeroes_metrics_and_appends_feedback() {
        let mut rec = record(r#"{"id":"a1","status":"Pending","views":0,"earnings":0}"#);

        rec.apply(&Resolution::Rejected {
            feedback: Some("blurry footage".to_string()),
        });

        assert_eq!(
            serde_json::to_value(&rec).unwrap(),
            json!({"id":"a1","status":"Rejected","views":0,"earnings":0,"feedback":"blurry footage"})
        );
        let clip = rec.to_submission().unwrap();
        assert_eq!(clip.status, SubmissionStatus::Rejected);
        assert_eq!(clip.feedback.as_deref(), Some("blurry footage"));
        assert_eq!(clip.title, "");
    }

    #[test]
    fn rejection_without_feedback_leaves_it_absent() {
        let mut rec = record(r#"{"id":"a1","status":"Pending","views":0,"earnings":0}"#);

        rec.apply(&Resolution::Rejected { feedback: None });

        assert!(rec.get("feedback").is_none());
        assert_eq!(rec.get("status"), Some(&json!("Rejected")));
    }

    #[test]
    fn fractional_earnings_are_readable() {
        let rec = record(r#"{"id":"x","status":"Approved","views":10,"earnings":12.5}"#);

        let clip = rec.to_submission().unwrap();

        assert_eq!(clip.earnings, 12.5);
        assert_eq!(serde_json::to_string(&rec).unwrap(), r#"{"id":"x","status":"Approved","views":10,"earnings":12.5}"#);
    }

    #[test]
    fn typed_submission_converts_both_ways() {
        let clip = pending("a1");

        let rec = SubmissionRecord::from_submission(&clip).unwrap();

        assert!(rec.has_id(&SubmissionId::from("a1")));
        assert_eq!(rec.get("videoId"), Some(&json!("1")));
        assert_eq!(rec.to_submission().unwrap(), clip);
    }

    #[test]
    fn record_without_status_has_no_typed_view() {
        let rec = SubmissionRecord::try_from(json!({"id":"a1"})).unwrap();

        assert_eq!(rec.id(), Some("a1"));
        assert!(rec.to_submission().is_err());
        assert!(SubmissionRecord::try_from(json!(["a1"])).is_err());
    }
}

use std::sync::Arc;

use cr_core::ports::{MetricsGeneratorPort, SubmissionStorePort};
use cr_core::{
    ClipSubmission, CollectionName, Decision, ReviewError, SubmissionId, SubmissionRecord,
};
use tracing::{info, warn};

use super::internal::typed;

/// Approves or rejects a pending submission in every tracked collection.
///
/// Each collection is read, updated and written back whole. Metrics for an
/// approval are generated once and the same values go to every copy. Entries
/// with another id are written back exactly as they were read.
///
/// There is no lock around the read-modify-write cycle: two decisions racing on
/// one collection can lose a write, and a save failing midway leaves earlier
/// collections updated. Callers disable the action as soon as it is invoked.
pub struct ApplyDecision {
    store: Arc<dyn SubmissionStorePort>,
    metrics: Arc<dyn MetricsGeneratorPort>,
    collections: Vec<CollectionName>,
}

impl ApplyDecision {
    pub fn from_ports(
        store: Arc<dyn SubmissionStorePort>,
        metrics: Arc<dyn MetricsGeneratorPort>,
        collections: Vec<CollectionName>,
    ) -> Self {
        Self {
            store,
            metrics,
            collections,
        }
    }

    /// Applies `decision` to submission `id` and returns the updated record.
    ///
    /// # Errors
    /// - [`ReviewError::NotFound`] when no readable tracked collection holds `id`.
    ///   Nothing is written.
    /// - [`ReviewError::AlreadyDecided`] when any copy has left `Pending`.
    ///   Nothing is written.
    /// - [`ReviewError::Store`] when a read or write fails, or when a copy of
    ///   `id` has no valid status. A collection whose content is corrupt is
    ///   skipped with a warning and left untouched.
    #[tracing::instrument(
        name = "usecase.apply_decision.execute",
        skip(self, id, decision),
        fields(submission_id = %id, decision = %decision.target_status())
    )]
    pub fn execute(
        &self,
        id: &SubmissionId,
        decision: Decision,
    ) -> Result<ClipSubmission, ReviewError> {
        // 1. Load every tracked collection and keep those holding the submission
        let mut holders: Vec<(&CollectionName, Vec<SubmissionRecord>)> = Vec::new();
        for name in &self.collections {
            let records = match self.store.load_collection(name) {
                Ok(records) => records,
                Err(e) if e.is_malformed() => {
                    warn!(collection = %name, error = %e, "skipping corrupt collection");
                    continue;
                }
                Err(e) => return Err(e.into()),
            };
            if records.iter().any(|record| record.has_id(id)) {
                holders.push((name, records));
            }
        }

        if holders.is_empty() {
            return Err(ReviewError::NotFound(id.clone()));
        }

        // 2. A submission is decided once
        for (name, records) in &holders {
            for record in records.iter().filter(|record| record.has_id(id)) {
                let current = typed(name, record)?;
                if !current.status.is_pending() {
                    return Err(ReviewError::AlreadyDecided {
                        id: id.clone(),
                        status: current.status,
                    });
                }
            }
        }

        // 3. Fix the derived values before touching any collection
        let resolution = decision.resolve(|| self.metrics.generate());

        // 4. Write the same resolution into every copy
        let mut updated = None;
        for (name, mut records) in holders {
            for record in records.iter_mut().filter(|record| record.has_id(id)) {
                record.apply(&resolution);
                if updated.is_none() {
                    updated = Some(typed(name, record)?);
                }
            }
            self.store.save_collection(name, &records)?;
        }

        let updated = updated.ok_or_else(|| ReviewError::NotFound(id.clone()))?;
        info!(
            status = %updated.status,
            views = updated.views,
            earnings = updated.earnings,
            "Decision applied"
        );
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cr_core::ports::SubmissionStoreError;
    use cr_core::{PerformanceMetrics, SubmissionStatus};
    use cr_infra::{FixedMetricsGenerator, InMemorySubmissionStore};
    use std::sync::atomic::{AtomicUsize, Ordering};

    mockall::mock! {
        Store {}

        impl SubmissionStorePort for Store {
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

    struct CountingMetrics {
        calls: AtomicUsize,
    }

    impl MetricsGeneratorPort for CountingMetrics {
        fn generate(&self) -> PerformanceMetrics {
            let n = self.calls.fetch_add(1, Ordering::SeqCst) as u64;
            PerformanceMetrics {
                views: 10_000 + n,
                earnings: 500 + n,
            }
        }
    }

    fn clip(id: &str, status: SubmissionStatus) -> ClipSubmission {
        ClipSubmission {
            id: SubmissionId::from(id),
            title: format!("Clip {id}"),
            video_id: "3".to_string(),
            creator_name: "DesignPro".to_string(),
            editor_name: "CutMaster".to_string(),
            clip_url: format!("https://clips.example/{id}"),
            hashtags: "#design".to_string(),
            thumbnail_url: format!("https://clips.example/{id}.jpg"),
            status,
            views: 0,
            earnings: 0.0,
            submitted_date: chrono::NaiveDate::from_ymd_opt(2024, 7, 31),
            feedback: None,
            file_size: "5 MB".to_string(),
            duration: "0:30".to_string(),
        }
    }

    fn records(clips: &[ClipSubmission]) -> Vec<SubmissionRecord> {
        clips
            .iter()
            .map(|clip| SubmissionRecord::from_submission(clip).unwrap())
            .collect()
    }

    fn load(store: &InMemorySubmissionStore, name: &CollectionName) -> Vec<ClipSubmission> {
        store
            .load_collection(name)
            .unwrap()
            .iter()
            .map(|record| record.to_submission().unwrap())
            .collect()
    }

    fn tracked() -> Vec<CollectionName> {
        vec![
            CollectionName::creator_clips(),
            CollectionName::editor_submissions(),
        ]
    }

    fn seeded(clips: &[ClipSubmission]) -> Arc<InMemorySubmissionStore> {
        let store = Arc::new(InMemorySubmissionStore::new());
        for name in tracked() {
            store.save_collection(&name, &records(clips)).unwrap();
        }
        store
    }

    fn fixed(views: u64, earnings: u64) -> Arc<FixedMetricsGenerator> {
        Arc::new(FixedMetricsGenerator(PerformanceMetrics { views, earnings }))
    }

    #[test]
    fn metrics_are_generated_once_for_all_collections() {
        let store = seeded(&[clip("b2", SubmissionStatus::Pending)]);
        let metrics = Arc::new(CountingMetrics {
            calls: AtomicUsize::new(0),
        });
        let uc = ApplyDecision::from_ports(store.clone(), metrics.clone(), tracked());

        uc.execute(&SubmissionId::from("b2"), Decision::Approve)
            .unwrap();

        assert_eq!(metrics.calls.load(Ordering::SeqCst), 1);
        let creator = load(&store, &CollectionName::creator_clips());
        let editor = load(&store, &CollectionName::editor_submissions());
        assert_eq!((creator[0].views, creator[0].earnings), (10_000, 500.0));
        assert_eq!(creator[0], editor[0]);
    }

    #[test]
    fn other_entries_keep_their_stored_text() {
        let store = Arc::new(InMemorySubmissionStore::new());
        let kept = r##"{"status":"Approved","id":"x9","hashtags":"#ux","views":321,"earnings":12.5,"campaignId":"c9"}"##;
        let pending = r#"{"id":"a1","title":"Clip a1","status":"Pending","views":0,"earnings":0}"#;
        for name in tracked() {
            store
                .put_raw(&name, format!("[{kept},{pending}]"))
                .unwrap();
        }
        let uc = ApplyDecision::from_ports(store.clone(), fixed(700, 70), tracked());

        uc.execute(&SubmissionId::from("a1"), Decision::Approve)
            .unwrap();

        for name in tracked() {
            let raw = store.raw(&name).unwrap();
            assert!(raw.starts_with(&format!("[{kept},")), "{name}: {raw}");
            assert!(raw.ends_with(
                r#"{"id":"a1","title":"Clip a1","status":"Approved","views":700,"earnings":70}]"#
            ));
        }
    }

    #[test]
    fn rejects_entry_that_carries_only_review_fields() {
        let store = Arc::new(InMemorySubmissionStore::new());
        let name = CollectionName::creator_clips();
        store
            .put_raw(&name, r#"[{"id":"a1","status":"Pending","views":0,"earnings":0}]"#)
            .unwrap();
        let uc = ApplyDecision::from_ports(store.clone(), fixed(1, 1), tracked());

        let updated = uc
            .execute(&SubmissionId::from("a1"), Decision::reject("blurry footage"))
            .unwrap();

        assert_eq!(updated.status, SubmissionStatus::Rejected);
        assert_eq!(
            store.raw(&name).as_deref(),
            Some(r#"[{"id":"a1","status":"Rejected","views":0,"earnings":0,"feedback":"blurry footage"}]"#)
        );
    }

    #[test]
    fn second_decision_is_refused_without_writing() {
        let store = seeded(&[clip("a1", SubmissionStatus::Pending)]);
        let uc = ApplyDecision::from_ports(store.clone(), fixed(900, 90), tracked());
        let id = SubmissionId::from("a1");
        uc.execute(&id, Decision::Approve).unwrap();
        let before = store.raw(&CollectionName::creator_clips());

        let err = uc
            .execute(&id, Decision::reject("changed my mind"))
            .expect_err("already approved");

        assert!(matches!(
            err,
            ReviewError::AlreadyDecided {
                status: SubmissionStatus::Approved,
                ..
            }
        ));
        assert_eq!(store.raw(&CollectionName::creator_clips()), before);
    }

    #[test]
    fn divergent_copy_that_was_decided_blocks_the_decision() {
        let store = Arc::new(InMemorySubmissionStore::new());
        store
            .save_collection(
                &CollectionName::creator_clips(),
                &records(&[clip("d1", SubmissionStatus::Pending)]),
            )
            .unwrap();
        store
            .save_collection(
                &CollectionName::editor_submissions(),
                &records(&[clip("d1", SubmissionStatus::Rejected)]),
            )
            .unwrap();
        let uc = ApplyDecision::from_ports(store.clone(), fixed(0, 0), tracked());

        let err = uc
            .execute(&SubmissionId::from("d1"), Decision::Approve)
            .expect_err("editor copy already rejected");

        assert!(matches!(err, ReviewError::AlreadyDecided { .. }));
        let creator = load(&store, &CollectionName::creator_clips());
        assert_eq!(creator[0].status, SubmissionStatus::Pending);
    }

    #[test]
    fn copy_without_a_valid_status_aborts_before_writing() {
        let store = Arc::new(InMemorySubmissionStore::new());
        let raw = r#"[{"id":"s1","status":"Archived"}]"#;
        store
            .put_raw(&CollectionName::creator_clips(), raw)
            .unwrap();
        let uc = ApplyDecision::from_ports(store.clone(), fixed(0, 0), tracked());

        let err = uc
            .execute(&SubmissionId::from("s1"), Decision::Approve)
            .expect_err("unknown status");

        assert!(matches!(err, ReviewError::Store(ref e) if e.is_malformed()));
        assert_eq!(store.raw(&CollectionName::creator_clips()).as_deref(), Some(raw));
    }

    #[test]
    fn submission_present_in_one_collection_only_updates_that_one() {
        let store = Arc::new(InMemorySubmissionStore::new());
        store
            .save_collection(
                &CollectionName::creator_clips(),
                &records(&[clip("c1", SubmissionStatus::Pending)]),
            )
            .unwrap();
        let uc = ApplyDecision::from_ports(store.clone(), fixed(1, 1), tracked());

        uc.execute(&SubmissionId::from("c1"), Decision::Approve)
            .unwrap();

        assert_eq!(store.raw(&CollectionName::editor_submissions()), None);
    }

    #[test]
    fn corrupt_collection_is_skipped_and_preserved() {
        let store = seeded(&[clip("a1", SubmissionStatus::Pending)]);
        store
            .put_raw(&CollectionName::editor_submissions(), "not json")
            .unwrap();
        let uc = ApplyDecision::from_ports(store.clone(), fixed(0, 0), tracked());

        let updated = uc
            .execute(&SubmissionId::from("a1"), Decision::reject("too long"))
            .unwrap();

        assert_eq!(updated.status, SubmissionStatus::Rejected);
        assert_eq!(
            store
                .raw(&CollectionName::editor_submissions())
                .as_deref(),
            Some("not json")
        );
    }

    #[test]
    fn read_failure_propagates_before_any_write() {
        let mut store = MockStore::new();
        store.expect_load_collection().returning(|name| {
            Err(SubmissionStoreError::Io {
                collection: name.to_string(),
                reason: "disk unplugged".to_string(),
            })
        });
        store.expect_save_collection().never();
        let uc = ApplyDecision::from_ports(Arc::new(store), fixed(0, 0), tracked());

        let err = uc
            .execute(&SubmissionId::from("a1"), Decision::Approve)
            .expect_err("io failure");

        assert!(matches!(err, ReviewError::Store(SubmissionStoreError::Io { .. })));
    }
}

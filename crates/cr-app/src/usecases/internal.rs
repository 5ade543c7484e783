use cr_core::ports::{SubmissionStoreError, SubmissionStorePort};
use cr_core::{ClipSubmission, CollectionName, SubmissionRecord};
use tracing::warn;

/// Typed view of a stored entry. An entry without one makes its collection malformed.
pub(crate) fn typed(
    name: &CollectionName,
    record: &SubmissionRecord,
) -> Result<ClipSubmission, SubmissionStoreError> {
    record
        .to_submission()
        .map_err(|e| SubmissionStoreError::Malformed {
            collection: name.to_string(),
            reason: format!("entry {}: {e}", record.id().unwrap_or("<no id>")),
        })
}

/// Load a collection for display, reading corrupt content as empty.
///
/// Corruption is logged so it does not go unnoticed. Other store failures
/// still propagate.
pub(crate) fn load_or_empty(
    store: &dyn SubmissionStorePort,
    name: &CollectionName,
) -> Result<Vec<ClipSubmission>, SubmissionStoreError> {
    let loaded = store.load_collection(name).and_then(|records| {
        records
            .iter()
            .map(|record| typed(name, record))
            .collect::<Result<Vec<_>, _>>()
    });
    match loaded {
        Ok(clips) => Ok(clips),
        Err(e) if e.is_malformed() => {
            warn!(collection = %name, error = %e, "collection data is corrupt, showing it as empty");
            Ok(Vec::new())
        }
        Err(e) => Err(e),
    }
}

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use cr_core::ports::{SubmissionStoreError, SubmissionStorePort};
use cr_core::{CollectionName, SubmissionRecord};

/// In-process store holding each collection as a raw JSON string.
///
/// Mirrors a browser key/value storage: values are opaque text until read, so
/// corrupted entries can be seeded with [`InMemorySubmissionStore::put_raw`].
#[derive(Default)]
pub struct InMemorySubmissionStore {
    entries: Mutex<HashMap<String, String>>,
}

impl InMemorySubmissionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw stored text of a collection, if it was ever written.
    pub fn raw(&self, name: &CollectionName) -> Option<String> {
        self.lock(name).ok()?.get(name.as_str()).cloned()
    }

    /// Store raw text under `name`, bypassing serialization.
    pub fn put_raw(
        &self,
        name: &CollectionName,
        content: impl Into<String>,
    ) -> Result<(), SubmissionStoreError> {
        self.lock(name)?
            .insert(name.as_str().to_string(), content.into());
        Ok(())
    }

    fn lock(
        &self,
        name: &CollectionName,
    ) -> Result<MutexGuard<'_, HashMap<String, String>>, SubmissionStoreError> {
        self.entries.lock().map_err(|_| SubmissionStoreError::Io {
            collection: name.to_string(),
            reason: "in-memory store lock poisoned".to_string(),
        })
    }
}

impl SubmissionStorePort for InMemorySubmissionStore {
    fn load_collection(
        &self,
        name: &CollectionName,
    ) -> Result<Vec<SubmissionRecord>, SubmissionStoreError> {
        let entries = self.lock(name)?;
        match entries.get(name.as_str()) {
            None => Ok(Vec::new()),
            Some(content) => {
                serde_json::from_str(content).map_err(|e| SubmissionStoreError::Malformed {
                    collection: name.to_string(),
                    reason: e.to_string(),
                })
            }
        }
    }

    fn save_collection(
        &self,
        name: &CollectionName,
        records: &[SubmissionRecord],
    ) -> Result<(), SubmissionStoreError> {
        let content = serde_json::to_string(records)
            .map_err(|e| SubmissionStoreError::Serialize(e.to_string()))?;
        self.put_raw(name, content)
    }
}

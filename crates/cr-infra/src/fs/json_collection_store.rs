use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use cr_core::ports::{SubmissionStoreError, SubmissionStorePort};
use cr_core::{CollectionName, SubmissionRecord};
use tracing::{debug, warn};

/// File-backed store keeping each collection in `<root>/<name>.json`.
pub struct JsonFileSubmissionStore {
    root: PathBuf,
}

impl JsonFileSubmissionStore {
    /// Create a store rooted at `root`. The directory is created on first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &std::path::Path {
        &self.root
    }

    fn path_for(&self, name: &CollectionName) -> PathBuf {
        self.root.join(format!("{}.json", name.as_str()))
    }

    /// Write `content` to a sibling temp file, then rename it over the target.
    ///
    /// Readers see either the previous file or the complete new one. A failed
    /// write removes the temp file.
    fn atomic_write(&self, name: &CollectionName, content: &[u8]) -> Result<(), SubmissionStoreError> {
        let io_err = |e: std::io::Error| SubmissionStoreError::Io {
            collection: name.to_string(),
            reason: e.to_string(),
        };

        fs::create_dir_all(&self.root).map_err(io_err)?;

        let path = self.path_for(name);
        let tmp_path = path.with_extension("json.tmp");
        if let Err(e) = fs::write(&tmp_path, content).and_then(|_| fs::rename(&tmp_path, &path)) {
            if let Err(cleanup) = fs::remove_file(&tmp_path) {
                if cleanup.kind() != ErrorKind::NotFound {
                    warn!(path = %tmp_path.display(), error = %cleanup, "failed to remove temp file");
                }
            }
            return Err(io_err(e));
        }

        Ok(())
    }
}

impl SubmissionStorePort for JsonFileSubmissionStore {
    fn load_collection(
        &self,
        name: &CollectionName,
    ) -> Result<Vec<SubmissionRecord>, SubmissionStoreError> {
        let path = self.path_for(name);
        let content = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(collection = %name, "collection file absent, treating as empty");
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(SubmissionStoreError::Io {
                    collection: name.to_string(),
                    reason: format!("read {} failed: {e}", path.display()),
                })
            }
        };

        serde_json::from_slice(&content).map_err(|e| SubmissionStoreError::Malformed {
            collection: name.to_string(),
            reason: e.to_string(),
        })
    }

    fn save_collection(
        &self,
        name: &CollectionName,
        records: &[SubmissionRecord],
    ) -> Result<(), SubmissionStoreError> {
        let content = serde_json::to_vec(records)
            .map_err(|e| SubmissionStoreError::Serialize(e.to_string()))?;

        self.atomic_write(name, &content)?;
        debug!(collection = %name, count = records.len(), "collection saved");
        Ok(())
    }
}

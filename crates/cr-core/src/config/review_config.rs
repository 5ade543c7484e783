use std::path::PathBuf;
use thiserror::Error;

use crate::ids::CollectionName;
use crate::ports::SubmissionStoreError;

pub const DEFAULT_MAX_VIEWS: u64 = 50_000;
pub const DEFAULT_MAX_EARNINGS: u64 = 2_000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid collection in [collections] {key}: {source}")]
    Collection {
        key: &'static str,
        #[source]
        source: SubmissionStoreError,
    },

    #[error("invalid value for {key}: {reason}")]
    InvalidValue { key: &'static str, reason: String },
}

/// Review workflow configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewConfig {
    /// Directory holding one JSON file per collection.
    /// Empty means "use the platform data directory".
    pub data_dir: PathBuf,

    /// Every collection that mirrors submissions. Decisions and new
    /// submissions are written to all of them.
    pub tracked_collections: Vec<CollectionName>,

    /// Collection read by the reviewer-facing surface.
    pub review_collection: CollectionName,

    /// Collection read by the editor dashboard.
    pub editor_collection: CollectionName,

    /// Exclusive upper bound of generated views.
    pub max_views: u64,

    /// Exclusive upper bound of generated earnings.
    pub max_earnings: u64,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::new(),
            tracked_collections: vec![
                CollectionName::creator_clips(),
                CollectionName::editor_submissions(),
            ],
            review_collection: CollectionName::creator_clips(),
            editor_collection: CollectionName::editor_submissions(),
            max_views: DEFAULT_MAX_VIEWS,
            max_earnings: DEFAULT_MAX_EARNINGS,
        }
    }
}

impl ReviewConfig {
    /// Defaults rooted at the given data directory.
    pub fn with_system_defaults(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            ..Self::default()
        }
    }

    /// Map a parsed TOML document onto the config.
    ///
    /// Missing keys keep their default. Present keys must have the right type.
    /// At least two collections must be tracked, and the review and editor
    /// collections must be among them.
    ///
    /// ```toml
    /// [storage]
    /// data_dir = "/var/lib/clipreview"
    ///
    /// [collections]
    /// tracked = ["creatorClips", "editorSubmissions"]
    /// review = "creatorClips"
    /// editor = "editorSubmissions"
    ///
    /// [metrics]
    /// max_views = 50000
    /// max_earnings = 2000
    /// ```
    pub fn from_toml(value: &toml::Value) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(dir) = str_at(value, "storage", "data_dir", "storage.data_dir")? {
            config.data_dir = PathBuf::from(dir);
        }

        if let Some(tracked) = value.get("collections").and_then(|c| c.get("tracked")) {
            let items = tracked.as_array().ok_or_else(|| ConfigError::InvalidValue {
                key: "collections.tracked",
                reason: "expected an array of strings".to_string(),
            })?;
            config.tracked_collections = items
                .iter()
                .map(|item| {
                    let name = item.as_str().ok_or_else(|| ConfigError::InvalidValue {
                        key: "collections.tracked",
                        reason: format!("expected a string, got {item}"),
                    })?;
                    collection("tracked", name)
                })
                .collect::<Result<_, _>>()?;
        }

        if let Some(name) = str_at(value, "collections", "review", "collections.review")? {
            config.review_collection = collection("review", name)?;
        }
        if let Some(name) = str_at(value, "collections", "editor", "collections.editor")? {
            config.editor_collection = collection("editor", name)?;
        }

        if let Some(max) = u64_at(value, "metrics", "max_views", "metrics.max_views")? {
            config.max_views = max;
        }
        if let Some(max) = u64_at(value, "metrics", "max_earnings", "metrics.max_earnings")? {
            config.max_earnings = max;
        }

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.tracked_collections.len() < 2 {
            return Err(ConfigError::InvalidValue {
                key: "collections.tracked",
                reason: format!(
                    "at least two collections must be tracked, got {}",
                    self.tracked_collections.len()
                ),
            });
        }
        for (key, name) in [
            ("collections.review", &self.review_collection),
            ("collections.editor", &self.editor_collection),
        ] {
            if !self.tracked_collections.contains(name) {
                return Err(ConfigError::InvalidValue {
                    key,
                    reason: format!("{name} is not listed in collections.tracked"),
                });
            }
        }
        Ok(())
    }
}

fn collection(key: &'static str, name: &str) -> Result<CollectionName, ConfigError> {
    CollectionName::parse(name).map_err(|source| ConfigError::Collection { key, source })
}

fn str_at<'a>(
    value: &'a toml::Value,
    table: &str,
    field: &str,
    key: &'static str,
) -> Result<Option<&'a str>, ConfigError> {
    match value.get(table).and_then(|t| t.get(field)) {
        None => Ok(None),
        Some(v) => v.as_str().map(Some).ok_or_else(|| ConfigError::InvalidValue {
            key,
            reason: format!("expected a string, got {v}"),
        }),
    }
}

fn u64_at(
    value: &toml::Value,
    table: &str,
    field: &str,
    key: &'static str,
) -> Result<Option<u64>, ConfigError> {
    match value.get(table).and_then(|t| t.get(field)) {
        None => Ok(None),
        Some(v) => v
            .as_integer()
            .and_then(|i| u64::try_from(i).ok())
            .map(Some)
            .ok_or_else(|| ConfigError::InvalidValue {
                key,
                reason: format!("expected a non-negative integer, got {v}"),
            }),
    }
}

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::ports::SubmissionStoreError;

/// Key of a persisted submission collection, e.g. `creatorClips`.
///
/// Restricted to ASCII alphanumerics, `-` and `_` so the name can double as a
/// file stem for file-backed stores.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CollectionName(String);

impl CollectionName {
    pub const CREATOR_CLIPS: &'static str = "creatorClips";
    pub const EDITOR_SUBMISSIONS: &'static str = "editorSubmissions";

    pub fn parse(name: impl Into<String>) -> Result<Self, SubmissionStoreError> {
        let name = name.into();
        let valid = !name.is_empty()
            && name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(SubmissionStoreError::InvalidCollectionName(name));
        }
        Ok(Self(name))
    }

    pub fn creator_clips() -> Self {
        Self(Self::CREATOR_CLIPS.to_string())
    }

    pub fn editor_submissions() -> Self {
        Self(Self::EDITOR_SUBMISSIONS.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for CollectionName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CollectionName {
    type Err = SubmissionStoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CollectionName {
    type Error = SubmissionStoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<CollectionName> for String {
    fn from(value: CollectionName) -> Self {
        value.0
    }
}

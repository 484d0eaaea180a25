use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Identifier of an entry inside its collection, e.g. `2024/hello-world`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

#[derive(Debug, Error)]
pub enum EntryIdError {
    #[error("Entry id is empty")]
    Empty,
}

impl EntryId {
    pub fn new(id: impl Into<String>) -> Result<Self, EntryIdError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(EntryIdError::Empty);
        }
        Ok(EntryId(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Content hash of an entry's data.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryVersion(String);

impl EntryVersion {
    pub fn from_content(content: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(content);

        let hash = hasher.finalize();
        let hex = hex::encode(hash);

        EntryVersion(format!("sha256:{hex}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::data::EntryData;
use crate::types::identifiers::{EntryId, EntryVersion};

#[derive(Debug, Error)]
pub enum EntryError {
    #[error("Frontmatter must be valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
    #[error("Invalid frontmatter: {0}")]
    Frontmatter(#[source] serde_json::Error),
    #[error("Failed to encode entry data: {0}")]
    Encoding(#[source] serde_json::Error),
}

/// Content collection an entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    Blog,
    Techwatch,
}

impl Collection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Blog => "blog",
            Collection::Techwatch => "techwatch",
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single content item with its publish metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    pub collection: Collection,
    pub version: EntryVersion,
    pub data: EntryData,
}

impl Entry {
    /// Build an entry from already-typed data. The version is the hash
    /// of the data's canonical JSON encoding.
    pub fn new(id: EntryId, collection: Collection, data: EntryData) -> Result<Self, EntryError> {
        let version = Self::compute_version(&data)?;

        Ok(Entry {
            id,
            collection,
            version,
            data,
        })
    }

    /// Parse raw JSON frontmatter into an entry.
    ///
    /// Unparseable timestamps fail here, so nothing downstream ever sees
    /// a malformed date.
    pub fn ingest(
        id: EntryId,
        collection: Collection,
        raw_frontmatter: Vec<u8>,
    ) -> Result<Self, EntryError> {
        let text = String::from_utf8(raw_frontmatter)?;
        let data: EntryData = serde_json::from_str(&text).map_err(EntryError::Frontmatter)?;

        Self::new(id, collection, data)
    }

    pub fn compute_version(data: &EntryData) -> Result<EntryVersion, EntryError> {
        let canonical = serde_json::to_vec(data).map_err(EntryError::Encoding)?;
        Ok(EntryVersion::from_content(&canonical))
    }

    pub fn effective_datetime(&self) -> chrono::DateTime<chrono::Utc> {
        self.data.effective_datetime()
    }
}

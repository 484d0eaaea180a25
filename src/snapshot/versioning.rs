use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::entry::Collection;
use crate::types::identifiers::{EntryId, EntryVersion};

// Serializable, comparable, explicit defaults.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SnapshotConfig {
    pub version: String,
    pub hash_algorithm: String,
}

impl SnapshotConfig {
    pub fn v0() -> Self {
        Self {
            version: "1".into(),
            hash_algorithm: "sha256".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ManifestEntry {
    pub collection: Collection,
    pub id: EntryId,
    pub version: EntryVersion,
    pub file: String,
}

impl ManifestEntry {
    /// `<collection>/<id>`, the key used by the index.
    pub fn key(&self) -> String {
        index_key(self.collection, &self.id)
    }
}

pub(crate) fn index_key(collection: Collection, id: &EntryId) -> String {
    format!("{}/{}", collection.as_str(), id.as_str())
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SnapshotManifest {
    pub snapshot_version: String,
    pub build_config: SnapshotConfig,
    pub created_at: DateTime<Utc>, // informational only
    pub entry_count: usize,
    pub entries: Vec<ManifestEntry>,
}

impl SnapshotManifest {
    pub fn entries_in(&self, collection: Collection) -> impl Iterator<Item = &ManifestEntry> {
        self.entries.iter().filter(move |e| e.collection == collection)
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct SnapshotIndex {
    entries: BTreeMap<String, String>,
}

impl SnapshotIndex {
    pub fn new(entries: BTreeMap<String, String>) -> Self {
        Self { entries }
    }
}

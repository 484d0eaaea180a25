// Read side of a snapshot: no mutation, no update methods.

use std::path::{Path, PathBuf};

use thiserror::Error;

use super::versioning::{ManifestEntry, SnapshotManifest};
use crate::entry::{Collection, Entry, EntryError};

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed snapshot file: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error(transparent)]
    Entry(#[from] EntryError),
    #[error("Entry mismatch: manifest says {expected}, file holds {found}")]
    IdMismatch { expected: String, found: String },
    #[error("Entry version mismatch for {key}: manifest says {manifest}, content hashes to {computed}")]
    VersionMismatch {
        key: String,
        manifest: String,
        computed: String,
    },
}

#[derive(Debug)]
pub struct ContentSnapshot {
    pub root: PathBuf,
    pub manifest: SnapshotManifest,
}

impl ContentSnapshot {
    pub fn open(root: &Path) -> Result<Self, SnapshotError> {
        let f = std::fs::File::open(root.join("manifest.json"))?;
        let manifest: SnapshotManifest = serde_json::from_reader(f)?;

        tracing::info!(
            path = %root.display(),
            entries = manifest.entry_count,
            version = %manifest.snapshot_version,
            "opened content snapshot"
        );

        Ok(Self {
            root: root.to_path_buf(),
            manifest,
        })
    }

    /// Every entry listed in the manifest, in manifest order.
    pub fn load_entries(&self) -> Result<Vec<Entry>, SnapshotError> {
        self.load_listed(self.manifest.entries.iter())
    }

    /// Entries of one collection, in manifest (id) order.
    pub fn load_collection(&self, collection: Collection) -> Result<Vec<Entry>, SnapshotError> {
        self.load_listed(self.manifest.entries_in(collection))
    }

    fn load_listed<'m, I>(&self, listed: I) -> Result<Vec<Entry>, SnapshotError>
    where
        I: Iterator<Item = &'m ManifestEntry>,
    {
        let mut loaded = Vec::new();
        for manifest_entry in listed {
            let f = std::fs::File::open(self.root.join(&manifest_entry.file))?;
            let entry: Entry = serde_json::from_reader(f)?;

            let expected_key = manifest_entry.key();
            let found_key = format!("{}/{}", entry.collection.as_str(), entry.id.as_str());
            if found_key != expected_key {
                return Err(SnapshotError::IdMismatch {
                    expected: expected_key,
                    found: found_key,
                });
            }

            // The stored version is not trusted; recompute from the data.
            let computed = Entry::compute_version(&entry.data)?;
            if computed != manifest_entry.version || entry.version != manifest_entry.version {
                return Err(SnapshotError::VersionMismatch {
                    key: expected_key,
                    manifest: manifest_entry.version.as_str().to_string(),
                    computed: computed.as_str().to_string(),
                });
            }

            loaded.push(entry);
        }
        Ok(loaded)
    }
}

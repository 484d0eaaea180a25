use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use sha2::{Digest, Sha256};
use thiserror::Error;

use super::store::ContentSnapshot;
use super::versioning::{index_key, ManifestEntry, SnapshotConfig, SnapshotIndex, SnapshotManifest};
use crate::entry::{Entry, EntryError};

#[derive(Debug, Error)]
pub enum SnapshotBuildError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Output directory already exists: {0}")]
    OutputExists(PathBuf),
    #[error("Filename collision detected for hash fragment: {0}")]
    FilenameCollision(String),
    #[error("Duplicate entry ID: {0}")]
    DuplicateEntryId(String),
    #[error(transparent)]
    Entry(#[from] EntryError),
    #[error("Entry version mismatch for {key}: entry says {stored}, data hashes to {computed}")]
    VersionMismatch {
        key: String,
        stored: String,
        computed: String,
    },
}

/// Writes an immutable snapshot of content entries. Single-threaded and
/// non-reentrant.
pub struct SnapshotBuilder {
    config: SnapshotConfig,
}

impl SnapshotBuilder {
    pub fn new(config: SnapshotConfig) -> Self {
        Self { config }
    }

    pub fn build(
        &self,
        entries: Vec<Entry>,
        output_dir: &Path,
    ) -> Result<ContentSnapshot, SnapshotBuildError> {
        if output_dir.exists() {
            return Err(SnapshotBuildError::OutputExists(output_dir.to_path_buf()));
        }

        // Sort by (collection, id); duplicates end up adjacent.
        let mut sorted = entries;
        sorted.sort_by(|a, b| (a.collection, &a.id).cmp(&(b.collection, &b.id)));

        for pair in sorted.windows(2) {
            if pair[0].collection == pair[1].collection && pair[0].id == pair[1].id {
                return Err(SnapshotBuildError::DuplicateEntryId(index_key(
                    pair[0].collection,
                    &pair[0].id,
                )));
            }
        }

        // Data edited after construction would leave a stale version that
        // the store rejects on load.
        for entry in &sorted {
            let computed = Entry::compute_version(&entry.data)?;
            if computed != entry.version {
                return Err(SnapshotBuildError::VersionMismatch {
                    key: index_key(entry.collection, &entry.id),
                    stored: entry.version.as_str().to_string(),
                    computed: computed.as_str().to_string(),
                });
            }
        }

        let mut placed = Vec::with_capacity(sorted.len());
        let mut index_entries = BTreeMap::new();
        let mut seen_stems = BTreeSet::new();

        // snapshot_version = sha256(config_json + "collection/id:version"...)
        let mut version_hasher = Sha256::new();
        version_hasher.update(serde_json::to_vec(&self.config)?);

        for entry in &sorted {
            let key = index_key(entry.collection, &entry.id);
            let line = format!("{}:{}", key, entry.version.as_str());
            version_hasher.update(line.as_bytes());

            // The file name hashes the key as well, so identical data in two
            // entries still gets two files.
            let stem = hex::encode(Sha256::digest(line.as_bytes()))[..12].to_string();
            if !seen_stems.insert(stem.clone()) {
                return Err(SnapshotBuildError::FilenameCollision(stem));
            }

            let file = format!("entries/{stem}.json");
            index_entries.insert(key, file.clone());
            placed.push((
                entry,
                ManifestEntry {
                    collection: entry.collection,
                    id: entry.id.clone(),
                    version: entry.version.clone(),
                    file,
                },
            ));
        }

        let snapshot_version = format!("sha256:{}", hex::encode(version_hasher.finalize()));

        let manifest = SnapshotManifest {
            snapshot_version: snapshot_version.clone(),
            build_config: self.config.clone(),
            created_at: Utc::now(),
            entry_count: sorted.len(),
            entries: placed.iter().map(|(_, m)| m.clone()).collect(),
        };
        let index = SnapshotIndex::new(index_entries);

        // Temp dir is keyed by the snapshot version so concurrent builds of
        // different content into the same parent do not clash.
        let temp_dir = output_dir.with_extension(format!("tmp.{}", &snapshot_version[7..19]));
        if temp_dir.exists() {
            fs::remove_dir_all(&temp_dir)?;
        }
        fs::create_dir_all(temp_dir.join("entries"))?;

        for (entry, manifest_entry) in &placed {
            let f = fs::File::create(temp_dir.join(&manifest_entry.file))?;
            serde_json::to_writer(&f, entry)?;
            f.sync_all()?;
        }

        let f_idx = fs::File::create(temp_dir.join("index.json"))?;
        serde_json::to_writer_pretty(&f_idx, &index)?;
        f_idx.sync_all()?;

        let f_man = fs::File::create(temp_dir.join("manifest.json"))?;
        serde_json::to_writer_pretty(&f_man, &manifest)?;
        f_man.sync_all()?;

        fs::rename(&temp_dir, output_dir)?;

        tracing::info!(
            path = %output_dir.display(),
            entries = manifest.entry_count,
            version = %manifest.snapshot_version,
            "built content snapshot"
        );

        Ok(ContentSnapshot {
            root: output_dir.to_path_buf(),
            manifest,
        })
    }
}

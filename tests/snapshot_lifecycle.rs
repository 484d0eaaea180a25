use std::fs;

use chrono::{DateTime, Utc};
use content_select::entry::{Collection, Entry, EntryData, EntryId};
use content_select::snapshot::{
    ContentSnapshot, SnapshotBuildError, SnapshotBuilder, SnapshotConfig, SnapshotError,
};
use content_select::types::parse_timestamp;
use tempfile::tempdir;

fn at(s: &str) -> DateTime<Utc> {
    parse_timestamp(s).unwrap()
}

fn make_entry(collection: Collection, id: &str, title: &str) -> Entry {
    let data = EntryData::new(title, at("2024-01-01")).with_tags(["Rust"]);
    Entry::new(EntryId::new(id).unwrap(), collection, data).unwrap()
}

fn fixture() -> Vec<Entry> {
    vec![
        make_entry(Collection::Techwatch, "link", "A link"),
        make_entry(Collection::Blog, "b", "Beta"),
        make_entry(Collection::Blog, "a", "Alpha"),
    ]
}

#[test]
fn build_then_load_round_trips_per_collection() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("snapshot");

    let built = SnapshotBuilder::new(SnapshotConfig::v0())
        .build(fixture(), &out)
        .unwrap();
    assert_eq!(built.manifest.entry_count, 3);

    let opened = ContentSnapshot::open(&out).unwrap();
    assert_eq!(opened.manifest.snapshot_version, built.manifest.snapshot_version);

    let blog = opened.load_collection(Collection::Blog).unwrap();
    let ids: Vec<&str> = blog.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b"]);

    let techwatch = opened.load_collection(Collection::Techwatch).unwrap();
    assert_eq!(techwatch, vec![make_entry(Collection::Techwatch, "link", "A link")]);

    assert_eq!(opened.load_entries().unwrap().len(), 3);
}

#[test]
fn snapshot_version_ignores_input_order() {
    let dir = tempdir().unwrap();
    let builder = SnapshotBuilder::new(SnapshotConfig::v0());

    let mut reversed = fixture();
    reversed.reverse();

    let a = builder.build(fixture(), &dir.path().join("a")).unwrap();
    let b = builder.build(reversed, &dir.path().join("b")).unwrap();

    assert_eq!(a.manifest.snapshot_version, b.manifest.snapshot_version);
    assert_eq!(
        fs::read(dir.path().join("a/index.json")).unwrap(),
        fs::read(dir.path().join("b/index.json")).unwrap()
    );
}

#[test]
fn config_change_changes_version() {
    let dir = tempdir().unwrap();

    let mut other = SnapshotConfig::v0();
    other.version = "2".to_string();

    let a = SnapshotBuilder::new(SnapshotConfig::v0())
        .build(fixture(), &dir.path().join("a"))
        .unwrap();
    let b = SnapshotBuilder::new(other)
        .build(fixture(), &dir.path().join("b"))
        .unwrap();

    assert_ne!(a.manifest.snapshot_version, b.manifest.snapshot_version);
}

#[test]
fn same_id_in_two_collections_is_allowed() {
    let dir = tempdir().unwrap();
    let entries = vec![
        make_entry(Collection::Blog, "same", "Same"),
        make_entry(Collection::Techwatch, "same", "Same"),
    ];

    let snapshot = SnapshotBuilder::new(SnapshotConfig::v0())
        .build(entries, &dir.path().join("snap"))
        .unwrap();

    assert_ne!(snapshot.manifest.entries[0].file, snapshot.manifest.entries[1].file);
}

#[test]
fn duplicate_id_is_fatal() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("dup");
    let entries = vec![
        make_entry(Collection::Blog, "same", "One"),
        make_entry(Collection::Blog, "same", "Two"),
    ];

    match SnapshotBuilder::new(SnapshotConfig::v0()).build(entries, &out) {
        Err(SnapshotBuildError::DuplicateEntryId(key)) => assert_eq!(key, "blog/same"),
        other => panic!("expected duplicate id error, got {other:?}"),
    }
    assert!(!out.exists(), "snapshot must not be created on failure");
}

#[test]
fn existing_output_is_refused() {
    let dir = tempdir().unwrap();
    let result = SnapshotBuilder::new(SnapshotConfig::v0()).build(fixture(), dir.path());
    assert!(matches!(result, Err(SnapshotBuildError::OutputExists(_))));
}

#[test]
fn index_keys_are_sorted() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("snap");
    SnapshotBuilder::new(SnapshotConfig::v0())
        .build(fixture(), &out)
        .unwrap();

    let index = fs::read_to_string(out.join("index.json")).unwrap();
    let a = index.find("\"blog/a\"").expect("missing blog/a");
    let b = index.find("\"blog/b\"").expect("missing blog/b");
    let t = index.find("\"techwatch/link\"").expect("missing techwatch/link");

    assert!(a < b && b < t, "index keys must be sorted lexicographically");
}

#[test]
fn tampered_entry_fails_to_load() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("snap");
    let snapshot = SnapshotBuilder::new(SnapshotConfig::v0())
        .build(fixture(), &out)
        .unwrap();

    let target = snapshot
        .manifest
        .entries
        .iter()
        .find(|e| e.id.as_str() == "a")
        .unwrap();
    let path = out.join(&target.file);

    let mut entry: Entry = serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
    entry.data.draft = true;
    fs::write(&path, serde_json::to_vec(&entry).unwrap()).unwrap();

    match snapshot.load_collection(Collection::Blog) {
        Err(SnapshotError::VersionMismatch { key, .. }) => assert_eq!(key, "blog/a"),
        other => panic!("expected version mismatch, got {other:?}"),
    }

    // The other collection is untouched and still loads.
    assert_eq!(snapshot.load_collection(Collection::Techwatch).unwrap().len(), 1);
}

#[test]
fn entry_edited_after_construction_is_rejected() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("stale");

    let mut edited = make_entry(Collection::Blog, "a", "Alpha");
    edited.data.draft = true;
    let entries = vec![make_entry(Collection::Blog, "b", "Beta"), edited];

    match SnapshotBuilder::new(SnapshotConfig::v0()).build(entries, &out) {
        Err(SnapshotBuildError::VersionMismatch { key, stored, computed }) => {
            assert_eq!(key, "blog/a");
            assert_ne!(stored, computed);
        }
        other => panic!("expected version mismatch, got {other:?}"),
    }
    assert!(!out.exists(), "snapshot must not be created on failure");
}

use chrono::{DateTime, Utc};
use content_select::entry::{Collection, Entry, EntryData, EntryId};
use content_select::selection::{get_posts_by_tag, get_sorted_posts, VisibilityPolicy};
use content_select::types::{parse_timestamp, slugify_all};

fn at(s: &str) -> DateTime<Utc> {
    parse_timestamp(s).unwrap()
}

fn make_entry(id: &str, pub_datetime: &str, tags: &[&str]) -> Entry {
    let data = EntryData::new(id, at(pub_datetime)).with_tags(tags.iter().copied());
    Entry::new(EntryId::new(id).unwrap(), Collection::Blog, data).unwrap()
}

fn ids(entries: &[&Entry]) -> Vec<String> {
    entries.iter().map(|e| e.id.as_str().to_string()).collect()
}

fn fixture() -> Vec<Entry> {
    vec![
        make_entry("intro", "2024-01-01", &["Rust Lang", "Intro"]),
        make_entry("async", "2024-03-01", &["rust-lang", "Async"]),
        make_entry("go", "2024-02-01", &["Go"]),
        make_entry("mixed", "2024-04-01", &["RUST LANG"]),
    ]
}

fn now() -> DateTime<Utc> {
    at("2025-01-01T00:00:00Z")
}

#[test]
fn matches_on_normalized_tags() {
    let entries = fixture();
    let tagged = get_posts_by_tag(&entries, "rust-lang", now(), &VisibilityPolicy::default());

    assert_eq!(ids(&tagged), vec!["mixed", "async", "intro"]);
}

#[test]
fn query_is_not_normalized() {
    let entries = fixture();
    let tagged = get_posts_by_tag(&entries, "Rust Lang", now(), &VisibilityPolicy::default());

    assert!(tagged.is_empty());
}

#[test]
fn unknown_tag_is_empty() {
    let entries = fixture();
    assert!(get_posts_by_tag(&entries, "nonexistent", now(), &VisibilityPolicy::default()).is_empty());
}

#[test]
fn entries_without_tags_never_match() {
    let entries = vec![make_entry("bare", "2024-01-01", &[])];
    assert!(get_posts_by_tag(&entries, "", now(), &VisibilityPolicy::default()).is_empty());
}

#[test]
fn result_is_sorted_subset_of_sorted_posts() {
    let mut entries = fixture();
    let draft = EntryData::new("hidden", at("2024-05-01"))
        .with_tags(["Rust Lang"])
        .with_draft(true);
    entries.push(Entry::new(EntryId::new("hidden").unwrap(), Collection::Blog, draft).unwrap());

    let policy = VisibilityPolicy::default();
    let tagged = get_posts_by_tag(&entries, "rust-lang", now(), &policy);

    let expected: Vec<&Entry> = get_sorted_posts(&entries, now(), &policy)
        .into_iter()
        .filter(|e| slugify_all(&e.data.tags).iter().any(|t| t == "rust-lang"))
        .collect();

    assert_eq!(ids(&tagged), ids(&expected));
    assert!(!ids(&tagged).contains(&"hidden".to_string()));
}

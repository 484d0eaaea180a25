use std::collections::HashSet;

use chrono::{DateTime, Utc};

use super::filters::{post_filter, VisibilityPolicy};
use crate::entry::Entry;
use crate::types::Tag;

/// Tag index of the visible entries, one `Tag` per slug, sorted by slug.
///
/// When several spellings share a slug the first one met (entry order,
/// then tag order within the entry) names the tag.
pub fn get_unique_tags<'a, I>(entries: I, now: DateTime<Utc>, policy: &VisibilityPolicy) -> Vec<Tag>
where
    I: IntoIterator<Item = &'a Entry>,
{
    let raw_tags = entries
        .into_iter()
        .filter(|entry| post_filter(entry, now, policy))
        .flat_map(|entry| entry.data.tags.iter())
        .map(|raw| Tag::from_raw(raw));

    let mut tags = dedup_by_slug(raw_tags);

    // Slugs are ASCII lowercase, where byte order and collation agree.
    tags.sort_by(|a, b| a.tag.cmp(&b.tag));
    tags
}

/// Tag index across the blog and techwatch collections.
///
/// Each collection is indexed on its own, blog first, and the two lists
/// are merged with [`merge_unique_tags`]. The result is NOT re-sorted:
/// techwatch-only tags come after every blog tag.
pub fn get_unique_tags_for_all_posts<'a, B, T>(
    blog_posts: B,
    techwatch_posts: T,
    now: DateTime<Utc>,
    policy: &VisibilityPolicy,
) -> Vec<Tag>
where
    B: IntoIterator<Item = &'a Entry>,
    T: IntoIterator<Item = &'a Entry>,
{
    let mut tags = get_unique_tags(blog_posts, now, policy);
    tags.extend(get_unique_tags(techwatch_posts, now, policy));
    merge_unique_tags(tags)
}

/// Drop later tags whose slug was already seen. Order is otherwise kept.
pub fn merge_unique_tags(tags: Vec<Tag>) -> Vec<Tag> {
    dedup_by_slug(tags)
}

fn dedup_by_slug<I>(tags: I) -> Vec<Tag>
where
    I: IntoIterator<Item = Tag>,
{
    let mut seen = HashSet::new();
    tags.into_iter()
        .filter(|tag| seen.insert(tag.tag.clone()))
        .collect()
}

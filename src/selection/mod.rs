pub mod clock;
pub mod filters;
pub mod ordering;
pub mod tags;

use chrono::{DateTime, Utc};

use crate::config::SiteConfig;
use crate::entry::Entry;
use crate::types::{slugify_str, Tag};
pub use clock::{Clock, FixedClock, SystemClock};
pub use filters::{
    is_publish_time_passed, post_filter, VisibilityPolicy, DEFAULT_SCHEDULED_POST_MARGIN_MS,
};
pub use ordering::{effective_seconds, sort_newest_first};
pub use tags::{get_unique_tags, get_unique_tags_for_all_posts, merge_unique_tags};

/// Visible entries, newest first by effective timestamp.
pub fn get_sorted_posts<'a, I>(
    entries: I,
    now: DateTime<Utc>,
    policy: &VisibilityPolicy,
) -> Vec<&'a Entry>
where
    I: IntoIterator<Item = &'a Entry>,
{
    let mut considered = 0usize;
    let mut visible: Vec<&Entry> = entries
        .into_iter()
        .inspect(|_| considered += 1)
        .filter(|entry| post_filter(entry, now, policy))
        .collect();

    sort_newest_first(&mut visible);

    tracing::debug!(
        considered,
        selected = visible.len(),
        dev_mode = policy.dev_mode,
        "sorted posts"
    );
    visible
}

/// Visible entries carrying a tag whose slug equals `tag_slug`, newest
/// first. `tag_slug` is compared as given; callers pass a slug.
pub fn get_posts_by_tag<'a, I>(
    entries: I,
    tag_slug: &str,
    now: DateTime<Utc>,
    policy: &VisibilityPolicy,
) -> Vec<&'a Entry>
where
    I: IntoIterator<Item = &'a Entry>,
{
    let tagged = entries
        .into_iter()
        .filter(|entry| entry.data.tags.iter().any(|raw| slugify_str(raw) == tag_slug));

    get_sorted_posts(tagged, now, policy)
}

/// Selection operations bound to a visibility policy and a clock.
///
/// The clock is read once per call, never cached across calls.
pub struct PostSelector<C = SystemClock> {
    policy: VisibilityPolicy,
    clock: C,
}

impl Default for PostSelector<SystemClock> {
    fn default() -> Self {
        Self {
            policy: VisibilityPolicy::default(),
            clock: SystemClock,
        }
    }
}

impl PostSelector<SystemClock> {
    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(config.visibility(), SystemClock)
    }
}

impl<C> PostSelector<C>
where
    C: Clock,
{
    pub fn new(policy: VisibilityPolicy, clock: C) -> Self {
        Self { policy, clock }
    }

    pub fn policy(&self) -> &VisibilityPolicy {
        &self.policy
    }

    pub fn is_visible(&self, entry: &Entry) -> bool {
        post_filter(entry, self.clock.now(), &self.policy)
    }

    pub fn sorted_posts<'a, I>(&self, entries: I) -> Vec<&'a Entry>
    where
        I: IntoIterator<Item = &'a Entry>,
    {
        get_sorted_posts(entries, self.clock.now(), &self.policy)
    }

    pub fn posts_by_tag<'a, I>(&self, entries: I, tag_slug: &str) -> Vec<&'a Entry>
    where
        I: IntoIterator<Item = &'a Entry>,
    {
        get_posts_by_tag(entries, tag_slug, self.clock.now(), &self.policy)
    }

    pub fn unique_tags<'a, I>(&self, entries: I) -> Vec<Tag>
    where
        I: IntoIterator<Item = &'a Entry>,
    {
        get_unique_tags(entries, self.clock.now(), &self.policy)
    }

    pub fn unique_tags_for_all_posts<'a, B, T>(&self, blog_posts: B, techwatch_posts: T) -> Vec<Tag>
    where
        B: IntoIterator<Item = &'a Entry>,
        T: IntoIterator<Item = &'a Entry>,
    {
        get_unique_tags_for_all_posts(blog_posts, techwatch_posts, self.clock.now(), &self.policy)
    }
}

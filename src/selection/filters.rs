use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entry::Entry;
use crate::types::timestamp::epoch_millis;

/// 15 minutes.
pub const DEFAULT_SCHEDULED_POST_MARGIN_MS: i64 = 15 * 60 * 1000;

/// Visibility rules applied to every entry before it reaches a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibilityPolicy {
    /// Entries become visible this many milliseconds before `pub_datetime`.
    pub scheduled_post_margin_ms: i64,
    /// Bypasses the schedule check. Drafts stay hidden.
    pub dev_mode: bool,
}

impl VisibilityPolicy {
    pub fn new(scheduled_post_margin_ms: i64, dev_mode: bool) -> Self {
        Self {
            scheduled_post_margin_ms,
            dev_mode,
        }
    }

    pub fn production(scheduled_post_margin_ms: i64) -> Self {
        Self::new(scheduled_post_margin_ms, false)
    }

    pub fn development(scheduled_post_margin_ms: i64) -> Self {
        Self::new(scheduled_post_margin_ms, true)
    }
}

impl Default for VisibilityPolicy {
    fn default() -> Self {
        Self::production(DEFAULT_SCHEDULED_POST_MARGIN_MS)
    }
}

/// `now > pub_datetime - margin`, at millisecond resolution.
pub fn is_publish_time_passed(entry: &Entry, now: DateTime<Utc>, margin_ms: i64) -> bool {
    epoch_millis(&now) > epoch_millis(&entry.data.pub_datetime).saturating_sub(margin_ms)
}

/// Whether an entry may appear in any public listing at `now`.
pub fn post_filter(entry: &Entry, now: DateTime<Utc>, policy: &VisibilityPolicy) -> bool {
    !entry.data.draft
        && (policy.dev_mode || is_publish_time_passed(entry, now, policy.scheduled_post_margin_ms))
}

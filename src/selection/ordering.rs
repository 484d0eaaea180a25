use std::cmp::Reverse;

use crate::entry::Entry;
use crate::types::timestamp::epoch_seconds;

/// Effective timestamp (`mod_datetime ?? pub_datetime`) in whole seconds.
pub fn effective_seconds(entry: &Entry) -> i64 {
    epoch_seconds(&entry.effective_datetime())
}

/// Newest first. The sort is stable, so entries whose effective
/// timestamps share a second keep their input order.
pub fn sort_newest_first(entries: &mut [&Entry]) {
    entries.sort_by_key(|entry| Reverse(effective_seconds(entry)));

    debug_assert!(entries
        .windows(2)
        .all(|w| effective_seconds(w[0]) >= effective_seconds(w[1])));
}

//! Feed item projection. Producing XML is left to the caller.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::SiteConfig;
use crate::entry::Entry;

/// Channel-level fields of a feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedChannel {
    pub title: String,
    pub description: String,
    pub site: String,
}

impl FeedChannel {
    pub fn blog(config: &SiteConfig) -> Self {
        Self {
            title: config.title.clone(),
            description: config.description.clone(),
            site: config.website.clone(),
        }
    }

    pub fn techwatch(config: &SiteConfig) -> Self {
        Self {
            title: format!("{} - Tech Watch", config.title),
            description: "All the articles I've selected".to_string(),
            site: config.website.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedItem {
    pub link: String,
    pub title: String,
    pub description: String,
    pub pub_date: DateTime<Utc>,
}

impl FeedItem {
    /// External `url` when the entry has a non-empty one, else the
    /// entry's own permalink `posts/{id}/`.
    pub fn from_entry(entry: &Entry) -> Self {
        let link = match entry.data.url.as_deref() {
            Some(url) if !url.is_empty() => url.to_string(),
            _ => format!("posts/{}/", entry.id.as_str()),
        };

        Self {
            link,
            title: entry.data.title.clone(),
            description: entry.data.description.clone(),
            pub_date: entry.data.pub_datetime,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feed {
    #[serde(flatten)]
    pub channel: FeedChannel,
    pub items: Vec<FeedItem>,
}

/// Map already-sorted entries to feed items, keeping their order.
pub fn build_feed<'a, I>(channel: FeedChannel, sorted_entries: I) -> Feed
where
    I: IntoIterator<Item = &'a Entry>,
{
    let items: Vec<FeedItem> = sorted_entries.into_iter().map(FeedItem::from_entry).collect();
    tracing::debug!(title = %channel.title, items = items.len(), "built feed");

    Feed { channel, items }
}

//! View models for post cards and tag lists.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::entry::Entry;
use crate::types::slugify_str;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardOptions {
    /// Render the title as a second-level heading instead of third.
    pub sec_heading: bool,
    pub display_author: bool,
}

impl Default for CardOptions {
    fn default() -> Self {
        Self {
            sec_heading: true,
            display_author: false,
        }
    }
}

/// A tag as linked from a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagLink {
    pub name: String,
    pub href: String,
}

impl TagLink {
    /// The raw tag goes into the href unchanged.
    pub fn new(raw: &str) -> Self {
        Self {
            name: raw.to_string(),
            href: format!("/tags/{raw}/"),
        }
    }
}

pub fn tag_links<S: AsRef<str>>(tags: &[S]) -> Vec<TagLink> {
    tags.iter().map(|t| TagLink::new(t.as_ref())).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardView {
    pub href: Option<String>,
    pub title: String,
    pub heading_level: u8,
    pub view_transition_name: String,
    pub pub_datetime: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mod_datetime: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub description: String,
    pub tags: Vec<TagLink>,
}

impl CardView {
    pub fn new(entry: &Entry, href: Option<&str>, options: CardOptions) -> Self {
        let data = &entry.data;

        let author = data
            .author
            .as_ref()
            .filter(|a| options.display_author && !a.is_empty())
            .cloned();

        Self {
            href: href.map(str::to_string),
            title: data.title.clone(),
            heading_level: if options.sec_heading { 2 } else { 3 },
            view_transition_name: slugify_str(&data.title),
            pub_datetime: data.pub_datetime,
            mod_datetime: data.mod_datetime,
            author,
            description: data.description.clone(),
            tags: tag_links(&data.tags),
        }
    }
}

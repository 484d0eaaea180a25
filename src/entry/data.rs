use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::timestamp;

/// Frontmatter fields shared by every collection.
///
/// Optional fields are explicit: a missing `tags` is an empty list, a
/// missing `draft` is `false`, a missing `modDatetime` or `url` is `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryData {
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    #[serde(deserialize_with = "timestamp::deserialize")]
    pub pub_datetime: DateTime<Utc>,

    #[serde(
        default,
        deserialize_with = "timestamp::deserialize_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub mod_datetime: Option<DateTime<Utc>>,

    #[serde(default)]
    pub draft: bool,

    #[serde(default)]
    pub tags: Vec<String>,

    /// External link, used by feeds in place of the generated permalink.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl EntryData {
    pub fn new(title: impl Into<String>, pub_datetime: DateTime<Utc>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            author: None,
            pub_datetime,
            mod_datetime: None,
            draft: false,
            tags: Vec::new(),
            url: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_mod_datetime(mut self, mod_datetime: DateTime<Utc>) -> Self {
        self.mod_datetime = Some(mod_datetime);
        self
    }

    pub fn with_draft(mut self, draft: bool) -> Self {
        self.draft = draft;
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// `mod_datetime` when present, else `pub_datetime`.
    pub fn effective_datetime(&self) -> DateTime<Utc> {
        self.mod_datetime.unwrap_or(self.pub_datetime)
    }
}

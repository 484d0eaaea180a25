use serde::{Deserialize, Serialize};

use super::slugify::slugify_str;

/// A tag as listed on tag index pages.
///
/// Identity is the slug. `tag_name` is whichever raw spelling was seen
/// first and is never merged with later spellings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub tag: String,
    pub tag_name: String,
}

impl Tag {
    pub fn from_raw(raw: &str) -> Self {
        Self {
            tag: slugify_str(raw),
            tag_name: raw.to_string(),
        }
    }
}

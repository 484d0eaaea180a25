pub mod identifiers;
pub mod slugify;
pub mod tag;
pub mod timestamp;

pub use identifiers::{EntryId, EntryIdError, EntryVersion};
pub use slugify::{slugify_all, slugify_str};
pub use tag::Tag;
pub use timestamp::{parse_timestamp, TimestampError};

pub mod data;
pub mod entry;

pub use crate::types::identifiers::{EntryId, EntryVersion};
pub use data::EntryData;
pub use entry::{Collection, Entry, EntryError};

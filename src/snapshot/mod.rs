pub mod builder;
pub mod store;
pub mod versioning;

pub use builder::{SnapshotBuildError, SnapshotBuilder};
pub use store::{ContentSnapshot, SnapshotError};
pub use versioning::{ManifestEntry, SnapshotConfig, SnapshotIndex, SnapshotManifest};

//! Version identifiers, immutable snapshots, change records, and history trees.

pub mod change;
pub mod identifier;
pub mod snapshot;
pub mod tree;

pub use change::ChangeRecord;
pub use identifier::VersionNumber;
pub use snapshot::VersionSnapshot;
pub use tree::{VersionGroup, VersionHistory, VersionNode};

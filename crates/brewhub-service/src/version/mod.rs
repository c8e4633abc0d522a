//! Version allocation, diffing, policy, history, and orchestration.

pub mod allocator;
pub mod diff;
pub mod history;
pub mod policy;
pub mod service;

pub use allocator::VersionAllocator;
pub use diff::diff;
pub use history::build_history;
pub use service::VersionService;

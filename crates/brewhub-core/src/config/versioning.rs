//! Version allocation settings.

use serde::{Deserialize, Serialize};

/// Controls how version identifier races are recovered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersioningConfig {
    /// How many times allocation is retried after a unique-constraint
    /// conflict before the conflict is surfaced to the caller.
    #[serde(default = "default_allocation_retries")]
    pub allocation_retries: u32,
}

impl Default for VersioningConfig {
    fn default() -> Self {
        Self {
            allocation_retries: default_allocation_retries(),
        }
    }
}

fn default_allocation_retries() -> u32 {
    1
}

//! Reactive property configuration.

use serde::{Deserialize, Serialize};

/// Tunables for [`ReactiveProperty`](super::ReactiveProperty).
///
/// Deserializable from any serde format; missing fields take their
/// defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReactiveConfig {
    /// Update the local cache to the written value after a successful
    /// datasource write.
    ///
    /// When false the cache keeps the value it held before the write, so the
    /// next deduplication check compares against that older value. Only
    /// turn this off to stay compatible with stores that expect the legacy
    /// behavior.
    pub refresh_on_write: bool,
}

impl ReactiveConfig {
    /// Configuration reproducing the legacy stale-cache behavior.
    pub fn legacy() -> Self {
        Self {
            refresh_on_write: false,
        }
    }
}

impl Default for ReactiveConfig {
    fn default() -> Self {
        Self {
            refresh_on_write: true,
        }
    }
}

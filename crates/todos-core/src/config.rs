//! App Configuration
//!
//! Read once at startup from the key-value store; every field has a default.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::domain::DomainResult;
use crate::repository::KeyValueStore;

/// Store key holding the JSON configuration
pub const CONFIG_KEY: &str = "todos.config";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TodoConfig {
    /// Store key under which the items live
    pub namespace: String,
    /// Idle time before the "press Enter" hint shows
    pub tooltip_delay_ms: u32,
    /// `log` level name (`error` .. `trace`, or `off`)
    pub log_level: String,
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            namespace: "todos".to_string(),
            tooltip_delay_ms: 1000,
            log_level: "info".to_string(),
        }
    }
}

impl TodoConfig {
    /// Load from [`CONFIG_KEY`], falling back to defaults when absent or unreadable.
    pub fn load<S: KeyValueStore>(store: &S) -> DomainResult<Self> {
        let Some(raw) = store.get_item(CONFIG_KEY)? else {
            return Ok(Self::default());
        };
        match serde_json::from_str(&raw) {
            Ok(config) => Ok(config),
            Err(e) => {
                warn!("[CONFIG] Ignoring unreadable '{}': {}", CONFIG_KEY, e);
                Ok(Self::default())
            }
        }
    }

    /// Parsed log level; unknown names mean `Info`
    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

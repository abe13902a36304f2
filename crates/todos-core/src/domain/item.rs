//! Item Entity
//!
//! A single to-do record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity::Entity;

/// Title given to items created without any text
pub const DEFAULT_TITLE: &str = "empty todo...";

/// A to-do record
///
/// Missing fields in stored data fall back to [`Item::default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Item {
    /// Storage key, unique within a list
    pub id: u32,
    pub title: String,
    /// Display position, unique and increasing in creation order
    pub order: u32,
    pub done: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub modified_at: Option<DateTime<Utc>>,
    /// Free-text notes shown under the title
    pub task_info: String,
}

impl Default for Item {
    fn default() -> Self {
        Self {
            id: 0,
            title: DEFAULT_TITLE.to_string(),
            order: 0,
            done: false,
            created_at: None,
            modified_at: None,
            task_info: String::new(),
        }
    }
}

impl Item {
    /// Create a new, not yet done item
    pub fn new(id: u32, title: String, order: u32, now: DateTime<Utc>) -> Self {
        let title = if title.is_empty() { DEFAULT_TITLE.to_string() } else { title };
        Self {
            id,
            title,
            order,
            created_at: Some(now),
            modified_at: Some(now),
            ..Default::default()
        }
    }

    /// Flip the done flag
    pub fn toggle(&mut self, now: DateTime<Utc>) {
        self.done = !self.done;
        self.modified_at = Some(now);
    }

    pub fn set_done(&mut self, done: bool, now: DateTime<Utc>) {
        self.done = done;
        self.modified_at = Some(now);
    }

    pub fn set_title(&mut self, title: String, now: DateTime<Utc>) {
        self.title = title;
        self.modified_at = Some(now);
    }

    pub fn set_task_info(&mut self, task_info: String, now: DateTime<Utc>) {
        self.task_info = task_info;
        self.modified_at = Some(now);
    }
}

impl Entity for Item {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

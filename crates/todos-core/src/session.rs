//! Todo Session
//!
//! Pairs the in-memory list with its repository. Every mutation is applied
//! to the list first, then the whole list is saved.

use chrono::{DateTime, Utc};
use log::{debug, info};

use crate::domain::{DomainResult, EditCommit, Item, ListEvent, TodoList};
use crate::repository::{KeyValueStore, Repository, TodoRepository};

#[derive(Debug, Clone)]
pub struct TodoSession<S> {
    list: TodoList,
    repo: TodoRepository<S>,
}

impl<S: KeyValueStore> TodoSession<S> {
    /// Start with an empty list, ignoring anything already stored
    pub fn new(repo: TodoRepository<S>) -> Self {
        Self {
            list: TodoList::new(),
            repo,
        }
    }

    /// Load stored items and start a session on them
    pub fn open(repo: TodoRepository<S>) -> DomainResult<Self> {
        let list = TodoList::from_items(repo.load()?);
        info!("[SESSION] Loaded {} items from '{}'", list.len(), repo.namespace());
        Ok(Self { list, repo })
    }

    pub fn list(&self) -> &TodoList {
        &self.list
    }

    /// Log the changes and save the current list.
    ///
    /// The list keeps the changes when saving fails; the next successful save stores them.
    fn publish(&self, events: &[ListEvent]) -> DomainResult<usize> {
        for event in events {
            debug!("[SESSION] {:?}", event);
        }
        self.repo.save_all(self.list.items())?;
        Ok(events.len())
    }

    pub fn create(&mut self, title: &str, now: DateTime<Utc>) -> DomainResult<Item> {
        let event = self.list.create(title, now)?;
        self.publish(std::slice::from_ref(&event))?;
        Ok(event.item().clone())
    }

    pub fn toggle(&mut self, id: u32, now: DateTime<Utc>) -> DomainResult<Item> {
        let event = self.list.toggle(id, now)?;
        self.publish(std::slice::from_ref(&event))?;
        Ok(event.item().clone())
    }

    /// Apply a finished edit; returns the resulting event so callers can tell
    /// an update from a removal.
    pub fn commit_edit(&mut self, id: u32, commit: EditCommit, now: DateTime<Utc>) -> DomainResult<ListEvent> {
        let event = self.list.apply_edit(id, commit, now)?;
        self.publish(std::slice::from_ref(&event))?;
        Ok(event)
    }

    pub fn destroy(&mut self, id: u32) -> DomainResult<()> {
        let event = self.list.remove(id)?;
        self.publish(std::slice::from_ref(&event)).map(|_| ())
    }

    /// Remove completed items; returns how many went
    pub fn clear_completed(&mut self) -> DomainResult<usize> {
        let events = self.list.clear_completed();
        self.publish(&events)
    }

    /// Set every item's done flag; returns how many changed
    pub fn mark_all(&mut self, done: bool, now: DateTime<Utc>) -> DomainResult<usize> {
        let events = self.list.mark_all(done, now);
        self.publish(&events)
    }
}

//! Todo List Collection
//!
//! The ordered set of items. Every mutation reports what it changed as
//! [`ListEvent`]s so listeners (storage, views) can follow along.

use chrono::{DateTime, Utc};

use super::edit::EditCommit;
use super::entity::{DomainError, DomainResult};
use super::item::Item;
use super::sanitize::sanitize;

/// A change to one item of the list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEvent {
    Added(Item),
    Changed(Item),
    Removed(Item),
}

impl ListEvent {
    pub fn item(&self) -> &Item {
        match self {
            ListEvent::Added(item) | ListEvent::Changed(item) | ListEvent::Removed(item) => item,
        }
    }
}

/// Footer statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub total: usize,
    pub done: usize,
    pub remaining: usize,
}

/// Items sorted by `order`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoList {
    items: Vec<Item>,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from loaded items, sorting them by order (then id).
    pub fn from_items(mut items: Vec<Item>) -> Self {
        items.sort_by_key(|item| (item.order, item.id));
        Self { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Completed items, in list order
    pub fn done(&self) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(|item| item.done)
    }

    /// Items still to do, in list order
    pub fn remaining(&self) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(|item| !item.done)
    }

    pub fn done_count(&self) -> usize {
        self.done().count()
    }

    pub fn remaining_count(&self) -> usize {
        self.remaining().count()
    }

    pub fn stats(&self) -> Stats {
        let done = self.done_count();
        Stats {
            total: self.items.len(),
            done,
            remaining: self.items.len() - done,
        }
    }

    /// True when there is at least one item and none remain
    pub fn all_done(&self) -> bool {
        !self.items.is_empty() && self.remaining_count() == 0
    }

    /// Order for the next created item: one past the last item, or 1.
    ///
    /// Fails once stored orders have reached `u32::MAX`.
    pub fn next_order(&self) -> DomainResult<u32> {
        match self.items.last() {
            Some(item) => item
                .order
                .checked_add(1)
                .ok_or_else(|| DomainError::InvalidInput(format!("order {} has no successor", item.order))),
            None => Ok(1),
        }
    }

    fn next_id(&self) -> DomainResult<u32> {
        let max = self.items.iter().map(|item| item.id).max().unwrap_or(0);
        max.checked_add(1)
            .ok_or_else(|| DomainError::InvalidInput(format!("id {} has no successor", max)))
    }

    fn position(&self, id: u32) -> DomainResult<usize> {
        self.items
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| DomainError::NotFound(format!("item {}", id)))
    }

    /// Append a new item with a sanitized title
    pub fn create(&mut self, title: &str, now: DateTime<Utc>) -> DomainResult<ListEvent> {
        let item = Item::new(self.next_id()?, sanitize(title), self.next_order()?, now);
        self.items.push(item.clone());
        Ok(ListEvent::Added(item))
    }

    pub fn toggle(&mut self, id: u32, now: DateTime<Utc>) -> DomainResult<ListEvent> {
        let index = self.position(id)?;
        let item = &mut self.items[index];
        item.toggle(now);
        Ok(ListEvent::Changed(item.clone()))
    }

    /// Apply a finished edit.
    ///
    /// The text is sanitized first; a title that ends up empty removes the item.
    pub fn apply_edit(&mut self, id: u32, commit: EditCommit, now: DateTime<Utc>) -> DomainResult<ListEvent> {
        let index = self.position(id)?;
        match commit {
            EditCommit::Title(text) => {
                let title = sanitize(&text);
                if title.is_empty() {
                    return Ok(ListEvent::Removed(self.items.remove(index)));
                }
                let item = &mut self.items[index];
                item.set_title(title, now);
                Ok(ListEvent::Changed(item.clone()))
            }
            EditCommit::Notes(text) => {
                let item = &mut self.items[index];
                item.set_task_info(sanitize(&text), now);
                Ok(ListEvent::Changed(item.clone()))
            }
        }
    }

    pub fn remove(&mut self, id: u32) -> DomainResult<ListEvent> {
        let index = self.position(id)?;
        Ok(ListEvent::Removed(self.items.remove(index)))
    }

    /// Remove every completed item
    pub fn clear_completed(&mut self) -> Vec<ListEvent> {
        let (done, remaining): (Vec<Item>, Vec<Item>) =
            std::mem::take(&mut self.items).into_iter().partition(|item| item.done);
        self.items = remaining;
        done.into_iter().map(ListEvent::Removed).collect()
    }

    /// Set every item's done flag. Only items that actually change are reported.
    pub fn mark_all(&mut self, done: bool, now: DateTime<Utc>) -> Vec<ListEvent> {
        self.items
            .iter_mut()
            .filter(|item| item.done != done)
            .map(|item| {
                item.set_done(done, now);
                ListEvent::Changed(item.clone())
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DEFAULT_TITLE;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000, 0).unwrap()
    }

    fn ids(list: &TodoList) -> Vec<u32> {
        list.items().iter().map(|item| item.id).collect()
    }

    #[test]
    fn test_next_order_empty() {
        assert_eq!(TodoList::new().next_order(), Ok(1));
    }

    #[test]
    fn test_create_assigns_increasing_orders() {
        let mut list = TodoList::new();
        list.create("Buy milk", now()).unwrap();
        list.create("Walk dog", now()).unwrap();
        let orders: Vec<u32> = list.items().iter().map(|item| item.order).collect();
        assert_eq!(orders, vec![1, 2]);
        assert_eq!(list.next_order(), Ok(3));
    }

    #[test]
    fn test_toggle_updates_counts() {
        let mut list = TodoList::new();
        let milk = list.create("Buy milk", now()).unwrap().item().id;
        list.create("Walk dog", now()).unwrap();

        list.toggle(milk, now()).unwrap();
        assert_eq!(list.done_count(), 1);
        assert_eq!(list.remaining_count(), 1);
        assert_eq!(list.done().next().map(|item| item.title.as_str()), Some("Buy milk"));
    }

    #[test]
    fn test_toggle_unknown_id() {
        let mut list = TodoList::new();
        assert!(matches!(list.toggle(42, now()), Err(DomainError::NotFound(_))));
    }

    #[test]
    fn test_create_sanitizes_title() {
        let mut list = TodoList::new();
        let event = list.create("  Buy   milk ", now()).unwrap();
        assert_eq!(event.item().title, "Buy milk");

        let event = list.create("   ", now()).unwrap();
        assert_eq!(event.item().title, DEFAULT_TITLE);
    }

    #[test]
    fn test_empty_title_commit_removes_item() {
        let mut list = TodoList::new();
        let id = list.create("Buy milk", now()).unwrap().item().id;
        list.create("Walk dog", now()).unwrap();

        let event = list.apply_edit(id, EditCommit::Title("   ".to_string()), now()).unwrap();
        assert!(matches!(event, ListEvent::Removed(ref item) if item.id == id));
        assert!(list.get(id).is_none());
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_title_commit_stamps_modified() {
        let mut list = TodoList::new();
        let id = list.create("Buy milk", now()).unwrap().item().id;
        let later = Utc.timestamp_opt(1_700_000_100, 0).unwrap();

        list.apply_edit(id, EditCommit::Title("Buy  oat milk".to_string()), later).unwrap();
        let item = list.get(id).unwrap();
        assert_eq!(item.title, "Buy oat milk");
        assert_eq!(item.modified_at, Some(later));
        assert_eq!(item.created_at, Some(now()));
    }

    #[test]
    fn test_notes_commit_is_sanitized_and_may_be_empty() {
        let mut list = TodoList::new();
        let id = list.create("Buy milk", now()).unwrap().item().id;
        let long = "x".repeat(40);

        list.apply_edit(id, EditCommit::Notes(format!(" two  {} ", long)), now()).unwrap();
        assert_eq!(list.get(id).unwrap().task_info, format!("two {}", "x".repeat(30)));

        list.apply_edit(id, EditCommit::Notes(String::new()), now()).unwrap();
        assert_eq!(list.get(id).unwrap().task_info, "");
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_clear_completed_retains_remaining() {
        let mut list = TodoList::new();
        let a = list.create("a", now()).unwrap().item().id;
        let b = list.create("b", now()).unwrap().item().id;
        let c = list.create("c", now()).unwrap().item().id;
        list.toggle(a, now()).unwrap();
        list.toggle(c, now()).unwrap();

        let removed = list.clear_completed();
        assert_eq!(removed.len(), 2);
        assert_eq!(ids(&list), vec![b]);
        assert_eq!(list.done_count(), 0);
    }

    #[test]
    fn test_mark_all_reports_only_changes() {
        let mut list = TodoList::new();
        let a = list.create("a", now()).unwrap().item().id;
        list.create("b", now()).unwrap();
        list.toggle(a, now()).unwrap();
        assert!(!list.all_done());

        let events = list.mark_all(true, now());
        assert_eq!(events.len(), 1);
        assert!(list.all_done());

        let events = list.mark_all(false, now());
        assert_eq!(events.len(), 2);
        assert_eq!(list.remaining_count(), 2);
    }

    #[test]
    fn test_all_done_false_when_empty() {
        assert!(!TodoList::new().all_done());
    }

    #[test]
    fn test_from_items_sorts_by_order() {
        let items = vec![
            Item { id: 1, order: 3, ..Default::default() },
            Item { id: 2, order: 1, ..Default::default() },
            Item { id: 3, order: 2, ..Default::default() },
        ];
        let list = TodoList::from_items(items);
        assert_eq!(ids(&list), vec![2, 3, 1]);
        assert_eq!(list.next_order(), Ok(4));
    }

    #[test]
    fn test_ids_stay_unique_after_remove() {
        let mut list = TodoList::new();
        let a = list.create("a", now()).unwrap().item().id;
        let b = list.create("b", now()).unwrap().item().id;
        list.remove(a).unwrap();
        let c = list.create("c", now()).unwrap().item().id;
        assert_ne!(b, c);
        assert!(list.remove(a).is_err());
    }

    #[test]
    fn test_stats() {
        let mut list = TodoList::new();
        let a = list.create("a", now()).unwrap().item().id;
        list.create("b", now()).unwrap();
        list.toggle(a, now()).unwrap();
        assert_eq!(list.stats(), Stats { total: 2, done: 1, remaining: 1 });
    }

    #[test]
    fn test_create_fails_when_order_exhausted() {
        let items = vec![Item { id: 1, order: u32::MAX, ..Default::default() }];
        let mut list = TodoList::from_items(items);
        assert!(matches!(list.next_order(), Err(DomainError::InvalidInput(_))));
        assert!(matches!(list.create("one more", now()), Err(DomainError::InvalidInput(_))));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_create_fails_when_id_exhausted() {
        let items = vec![Item { id: u32::MAX, order: 1, ..Default::default() }];
        let mut list = TodoList::from_items(items);
        assert_eq!(list.next_order(), Ok(2));
        assert!(matches!(list.create("one more", now()), Err(DomainError::InvalidInput(_))));
        assert_eq!(list.len(), 1);
    }
}

use chrono::{DateTime, Local};

use crate::model::item::{Item, ItemPatch};

/// Error type for store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("no item with id {0}")]
    NotFound(u64),
}

/// In-memory owner of the item collection.
///
/// Insertion order is preserved and meaningful for listing. The store is the
/// only component that assigns ids and mutates items; callers persist the
/// collection after each successful mutation.
#[derive(Debug, Default)]
pub struct Store {
    items: Vec<Item>,
}

impl Store {
    pub fn new(items: Vec<Item>) -> Self {
        Store { items }
    }

    /// Read-only view of the collection, in insertion order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    /// Add a new item and return a copy of it.
    ///
    /// The name must contain at least one non-whitespace character. The new
    /// item gets `id = max(existing ids) + 1` (1 for an empty store) and is
    /// appended to the end of the collection.
    pub fn add(
        &mut self,
        name: String,
        due_date: Option<DateTime<Local>>,
        notes: String,
    ) -> Result<Item, StoreError> {
        if name.trim().is_empty() {
            return Err(StoreError::InvalidInput("name cannot be empty".into()));
        }
        let item = Item::new(self.next_id(), name, due_date, notes);
        self.items.push(item.clone());
        Ok(item)
    }

    /// Apply a partial update to the item with the given id.
    ///
    /// Fields absent from the patch are untouched; `id` and `create_date`
    /// never change. On any error the collection is left unchanged.
    pub fn edit(&mut self, id: u64, patch: ItemPatch) -> Result<(), StoreError> {
        if let Some(ref name) = patch.name {
            if name.trim().is_empty() {
                return Err(StoreError::InvalidInput("name cannot be empty".into()));
            }
        }
        let item = self
            .items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or(StoreError::NotFound(id))?;

        if let Some(name) = patch.name {
            item.name = name;
        }
        if let Some(due_date) = patch.due_date {
            item.due_date = due_date;
        }
        if let Some(notes) = patch.notes {
            item.notes = notes;
        }
        Ok(())
    }

    /// Remove the first item with the given id and return it.
    pub fn delete(&mut self, id: u64) -> Result<Item, StoreError> {
        let idx = self
            .items
            .iter()
            .position(|i| i.id == id)
            .ok_or(StoreError::NotFound(id))?;
        Ok(self.items.remove(idx))
    }

    /// Flip the completion flag and return the new value.
    pub fn toggle_complete(&mut self, id: u64) -> Result<bool, StoreError> {
        let item = self
            .items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or(StoreError::NotFound(id))?;
        item.complete = !item.complete;
        Ok(item.complete)
    }

    // -----------------------------------------------------------------------
    // Lookup
    // -----------------------------------------------------------------------

    /// Linear lookup by id. Returns the first match; duplicates should never
    /// arise through normal use, but lookup stays defined if they do.
    pub fn find_by_id(&self, id: u64) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Next id to assign: highest existing id plus one, starting at 1.
    ///
    /// Deliberately a plain max+1 scheme, not a free list: gaps left by
    /// deletion stay unused and ids grow without bound.
    fn next_id(&self) -> u64 {
        self.items.iter().map(|i| i.id).max().unwrap_or(0) + 1
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn due(y: i32, m: u32, d: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    fn sample_store() -> Store {
        let mut store = Store::default();
        store.add("Buy milk".into(), None, String::new()).unwrap();
        store
            .add("Pay bills".into(), Some(due(2026, 9, 1)), "rent + power".into())
            .unwrap();
        store
    }

    // --- id assignment ---

    #[test]
    fn test_add_empty_store_starts_at_one() {
        let mut store = Store::default();
        let item = store.add("First".into(), None, String::new()).unwrap();
        assert_eq!(item.id, 1);
        assert!(!item.complete);
    }

    #[test]
    fn test_add_assigns_max_plus_one() {
        let mut store = sample_store();
        let item = store.add("Third".into(), None, String::new()).unwrap();
        assert_eq!(item.id, 3);
    }

    #[test]
    fn test_add_with_id_gaps() {
        // Non-contiguous ids, out of order: next is max + 1, not first gap.
        let items = vec![
            Item::new(1, "a".into(), None, String::new()),
            Item::new(5, "b".into(), None, String::new()),
            Item::new(3, "c".into(), None, String::new()),
            Item::new(10, "d".into(), None, String::new()),
        ];
        let mut store = Store::new(items);
        let item = store.add("e".into(), None, String::new()).unwrap();
        assert_eq!(item.id, 11);
    }

    #[test]
    fn test_deleted_id_not_reused() {
        let mut store = sample_store();
        store.delete(1).unwrap();
        let item = store.add("Call mom".into(), None, String::new()).unwrap();
        assert_eq!(item.id, 3);
        assert_eq!(store.len(), 2);
        assert!(store.find_by_id(1).is_none());
    }

    #[test]
    fn test_ids_stay_distinct_across_add_delete() {
        let mut store = Store::default();
        for _ in 0..5 {
            store.add("x".into(), None, String::new()).unwrap();
        }
        store.delete(2).unwrap();
        store.delete(4).unwrap();
        store.add("y".into(), None, String::new()).unwrap();
        store.add("z".into(), None, String::new()).unwrap();

        let mut ids: Vec<u64> = store.items().iter().map(|i| i.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), store.len());
    }

    // --- add ---

    #[test]
    fn test_add_rejects_blank_name() {
        let mut store = Store::default();
        assert!(matches!(
            store.add("".into(), None, String::new()),
            Err(StoreError::InvalidInput(_))
        ));
        assert!(matches!(
            store.add("   ".into(), None, String::new()),
            Err(StoreError::InvalidInput(_))
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_appends_in_order() {
        let store = sample_store();
        let names: Vec<&str> = store.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Buy milk", "Pay bills"]);
    }

    // --- edit ---

    #[test]
    fn test_edit_empty_patch_changes_nothing() {
        let mut store = sample_store();
        let before = store.items().to_vec();
        store.edit(2, ItemPatch::default()).unwrap();
        assert_eq!(store.items(), &before[..]);
    }

    #[test]
    fn test_edit_notes_only() {
        let mut store = sample_store();
        let before = store.find_by_id(2).unwrap().clone();
        store
            .edit(
                2,
                ItemPatch {
                    notes: Some("updated".into()),
                    ..Default::default()
                },
            )
            .unwrap();
        let after = store.find_by_id(2).unwrap();
        assert_eq!(after.notes, "updated");
        assert_eq!(after.name, before.name);
        assert_eq!(after.due_date, before.due_date);
        assert_eq!(after.create_date, before.create_date);
        assert_eq!(after.complete, before.complete);
    }

    #[test]
    fn test_edit_clears_due_date() {
        let mut store = sample_store();
        assert!(store.find_by_id(2).unwrap().due_date.is_some());
        store
            .edit(
                2,
                ItemPatch {
                    due_date: Some(None),
                    ..Default::default()
                },
            )
            .unwrap();
        assert!(store.find_by_id(2).unwrap().due_date.is_none());
    }

    #[test]
    fn test_edit_sets_due_date() {
        let mut store = sample_store();
        store
            .edit(
                1,
                ItemPatch {
                    due_date: Some(Some(due(2026, 12, 24))),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(store.find_by_id(1).unwrap().due_date, Some(due(2026, 12, 24)));
    }

    #[test]
    fn test_edit_rejects_blank_name() {
        let mut store = sample_store();
        let before = store.items().to_vec();
        let result = store.edit(
            1,
            ItemPatch {
                name: Some("  ".into()),
                notes: Some("should not land".into()),
                ..Default::default()
            },
        );
        assert!(matches!(result, Err(StoreError::InvalidInput(_))));
        // No partial mutation
        assert_eq!(store.items(), &before[..]);
    }

    #[test]
    fn test_edit_not_found() {
        let mut store = sample_store();
        let before = store.items().to_vec();
        let result = store.edit(
            99,
            ItemPatch {
                name: Some("ghost".into()),
                ..Default::default()
            },
        );
        assert!(matches!(result, Err(StoreError::NotFound(99))));
        assert_eq!(store.items(), &before[..]);
    }

    // --- delete ---

    #[test]
    fn test_delete_removes_item() {
        let mut store = sample_store();
        let removed = store.delete(1).unwrap();
        assert_eq!(removed.name, "Buy milk");
        assert_eq!(store.len(), 1);
        assert_eq!(store.items()[0].id, 2);
    }

    #[test]
    fn test_delete_not_found() {
        let mut store = sample_store();
        let before = store.items().to_vec();
        assert!(matches!(store.delete(99), Err(StoreError::NotFound(99))));
        assert_eq!(store.items(), &before[..]);
    }

    // --- toggle ---

    #[test]
    fn test_toggle_complete_flips_twice() {
        let mut store = sample_store();
        assert!(store.toggle_complete(2).unwrap());
        assert!(!store.toggle_complete(2).unwrap());
    }

    #[test]
    fn test_toggle_not_found() {
        let mut store = sample_store();
        let before = store.items().to_vec();
        assert!(matches!(store.toggle_complete(0), Err(StoreError::NotFound(0))));
        assert_eq!(store.items(), &before[..]);
    }

    // --- lookup ---

    #[test]
    fn test_find_by_id() {
        let store = sample_store();
        assert_eq!(store.find_by_id(2).unwrap().name, "Pay bills");
        assert!(store.find_by_id(7).is_none());
    }

    #[test]
    fn test_find_by_id_first_match_wins_on_duplicates() {
        // Duplicate ids can't arise through the store's own mutations, but
        // lookup stays defined if a hand-edited file produced them.
        let items = vec![
            Item::new(1, "first".into(), None, String::new()),
            Item::new(1, "second".into(), None, String::new()),
        ];
        let store = Store::new(items);
        assert_eq!(store.find_by_id(1).unwrap().name, "first");
    }
}

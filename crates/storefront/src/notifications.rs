//! Notification panel state.
//!
//! Records arrive from the backend's event source through [`NotificationStore::push`].
//! The store only ever flips read flags; it never deletes records.

use herd_market_core::{NotificationId, NotificationRecord};

use crate::storage::{SharedStorage, keys, load_collection, persist_collection};

/// Notification records, newest first, mirrored to durable storage.
pub struct NotificationStore {
    records: Vec<NotificationRecord>,
    storage: SharedStorage,
}

impl NotificationStore {
    /// Create the store from whatever storage holds.
    #[must_use]
    pub fn load(storage: SharedStorage) -> Self {
        let records = load_collection(storage.as_ref(), keys::NOTIFICATIONS);
        Self { records, storage }
    }

    /// Ingest a record from the event source.
    ///
    /// Returns `false` and leaves the store unchanged if a record with the
    /// same ID is already present.
    pub fn push(&mut self, record: NotificationRecord) -> bool {
        if self.records.iter().any(|existing| existing.id == record.id) {
            tracing::debug!(notification_id = %record.id, "Ignoring duplicate notification");
            return false;
        }

        tracing::info!(
            notification_id = %record.id,
            category = %record.category,
            "Notification received"
        );
        self.records.insert(0, record);
        self.persist();
        true
    }

    /// Mark one record as read. Unknown IDs are ignored.
    pub fn mark_as_read(&mut self, id: &NotificationId) {
        let Some(record) = self.records.iter_mut().find(|record| &record.id == id) else {
            tracing::debug!(notification_id = %id, "Mark-as-read for unknown notification");
            return;
        };

        if !record.read {
            record.read = true;
            self.persist();
        }
    }

    /// Mark every record as read.
    pub fn mark_all_as_read(&mut self) {
        let mut changed = 0_usize;
        for record in self.records.iter_mut().filter(|record| !record.read) {
            record.read = true;
            changed += 1;
        }
        tracing::info!(changed, "Marked all notifications as read");
        if changed > 0 {
            self.persist();
        }
    }

    /// Number of records not yet read.
    #[must_use]
    pub fn unread_count(&self) -> usize {
        self.records.iter().filter(|record| !record.read).count()
    }

    /// All records, newest first.
    #[must_use]
    pub fn records(&self) -> &[NotificationRecord] {
        &self.records
    }

    /// Unread records, newest first.
    pub fn unread(&self) -> impl Iterator<Item = &NotificationRecord> {
        self.records.iter().filter(|record| !record.read)
    }

    fn persist(&self) {
        persist_collection(self.storage.as_ref(), keys::NOTIFICATIONS, &self.records);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use herd_market_core::NotificationCategory;

    use super::*;
    use crate::storage::{DurableStorage, FailingStorage, MemoryStorage};

    fn record(title: &str) -> NotificationRecord {
        NotificationRecord::new(NotificationCategory::Listing, title, "")
    }

    fn store_with_three_unread() -> (Arc<MemoryStorage>, NotificationStore) {
        let storage = Arc::new(MemoryStorage::new());
        let mut store = NotificationStore::load(storage.clone());
        for title in ["Bella sold", "New offer", "Price drop"] {
            store.push(record(title));
        }
        (storage, store)
    }

    #[test]
    fn test_mark_all_as_read() {
        let (_, mut store) = store_with_three_unread();
        assert_eq!(store.unread_count(), 3);

        store.mark_all_as_read();

        assert_eq!(store.unread_count(), 0);
        assert!(store.records().iter().all(|r| r.read));
    }

    #[test]
    fn test_mark_as_read_single() {
        let (_, mut store) = store_with_three_unread();
        let id = store.records().first().unwrap().id.clone();

        store.mark_as_read(&id);
        store.mark_as_read(&id);

        assert_eq!(store.unread_count(), 2);
        assert!(store.unread().all(|r| r.id != id));
    }

    #[test]
    fn test_mark_unknown_is_noop() {
        let (_, mut store) = store_with_three_unread();
        store.mark_as_read(&NotificationId::new("missing"));
        assert_eq!(store.unread_count(), 3);
    }

    #[test]
    fn test_push_newest_first_and_dedupes() {
        let (_, mut store) = store_with_three_unread();
        assert_eq!(store.records().first().unwrap().title, "Price drop");

        let duplicate = store.records().first().unwrap().clone();
        assert!(!store.push(duplicate));
        assert_eq!(store.records().len(), 3);
    }

    #[test]
    fn test_read_state_survives_reload() {
        let (storage, mut store) = store_with_three_unread();
        let id = store.records().last().unwrap().id.clone();
        store.mark_as_read(&id);
        drop(store);

        let store = NotificationStore::load(storage);
        assert_eq!(store.records().len(), 3);
        assert_eq!(store.unread_count(), 2);
    }

    #[test]
    fn test_malformed_storage_yields_empty() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set(keys::NOTIFICATIONS, "42").unwrap();
        let store = NotificationStore::load(storage);
        assert_eq!(store.unread_count(), 0);
    }

    #[test]
    fn test_failing_storage_keeps_records_in_memory() {
        let mut store = NotificationStore::load(Arc::new(FailingStorage));
        assert!(store.push(record("Bella sold")));
        assert!(store.push(record("New offer")));
        assert_eq!(store.unread_count(), 2);

        store.mark_all_as_read();
        assert_eq!(store.unread_count(), 0);
    }
}

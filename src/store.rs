use std::collections::HashMap;

use crate::models::ClassRecord;

/// In-memory key-value store for class records.
///
/// The store does no locking of its own; [`crate::service::BookingService`]
/// serializes every load-validate-store cycle behind a single mutex. A fresh
/// instance is constructed at startup and handed to the service, so each test
/// gets its own isolated store.
#[derive(Debug, Default)]
pub struct ClassStore {
    classes: HashMap<String, ClassRecord>,
}

impl ClassStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the record stored under `key`, if any.
    pub fn load(&self, key: &str) -> Option<ClassRecord> {
        self.classes.get(key).cloned()
    }

    /// Inserts `record` under `key`, silently replacing any prior record.
    pub fn store(&mut self, key: &str, record: ClassRecord) {
        self.classes.insert(key.to_owned(), record);
    }

    pub fn delete(&mut self, key: &str) {
        self.classes.remove(key);
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn record(capacity: u32) -> ClassRecord {
        ClassRecord::new(
            capacity,
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 6, 10).unwrap(),
        )
    }

    #[test]
    fn test_load_missing_key() {
        let store = ClassStore::new();
        assert!(store.load("Yoga").is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_store_and_load() {
        let mut store = ClassStore::new();
        store.store("Yoga", record(5));
        let loaded = store.load("Yoga").unwrap();
        assert_eq!(loaded.allowed_capacity, 5);
    }

    #[test]
    fn test_store_overwrites() {
        let mut store = ClassStore::new();
        store.store("Yoga", record(5));
        store.store("Yoga", record(12));
        assert_eq!(store.load("Yoga").unwrap().allowed_capacity, 12);
    }

    #[test]
    fn test_delete() {
        let mut store = ClassStore::new();
        store.store("Yoga", record(5));
        store.delete("Yoga");
        assert!(store.load("Yoga").is_none());
    }
}

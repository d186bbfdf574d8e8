//! In-memory catalog.
//!
//! One `Mutex` guards the whole catalog, so every operation runs against a
//! consistent snapshot. Records are kept in insertion order; replacing a
//! record keeps its slot.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::debug;

use super::store::CatalogStore;
use crate::analysis::PropertyRecord;
use crate::filter::FilterSpec;

#[derive(Debug, Default)]
struct Entries {
    /// Record ids in insertion order.
    order: Vec<String>,
    records: HashMap<String, PropertyRecord>,
}

impl Entries {
    fn in_order(&self) -> impl Iterator<Item = &PropertyRecord> {
        self.order.iter().filter_map(|id| self.records.get(id))
    }

    fn find_by_value(&self, value: &str) -> Option<&PropertyRecord> {
        self.in_order().find(|record| record.value == value)
    }
}

/// Process-local catalog with no persistence.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    entries: Mutex<Entries>,
}

impl InMemoryCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // Critical sections never leave `Entries` half-updated, so a poisoned
    // lock still holds a consistent catalog.
    fn lock(&self) -> MutexGuard<'_, Entries> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl CatalogStore for InMemoryCatalog {
    fn exists(&self, value: &str) -> bool {
        self.lock().find_by_value(value).is_some()
    }

    fn exists_by_id(&self, id: &str) -> bool {
        self.lock().records.contains_key(id)
    }

    fn add(&self, record: PropertyRecord) {
        let mut entries = self.lock();
        if !entries.records.contains_key(&record.id) {
            entries.order.push(record.id.clone());
        }
        debug!(id = %record.id, "Storing analyzed string");
        entries.records.insert(record.id.clone(), record);
    }

    fn get_by_value(&self, value: &str) -> Option<PropertyRecord> {
        self.lock().find_by_value(value).cloned()
    }

    fn get_by_id(&self, id: &str) -> Option<PropertyRecord> {
        self.lock().records.get(id).cloned()
    }

    fn get_all(&self) -> Vec<PropertyRecord> {
        self.lock().in_order().cloned().collect()
    }

    fn get_filtered(&self, spec: &FilterSpec) -> Vec<PropertyRecord> {
        self.lock()
            .in_order()
            .filter(|record| spec.matches(record))
            .cloned()
            .collect()
    }

    fn delete(&self, value: &str) -> bool {
        let mut entries = self.lock();
        let Some(id) = entries.find_by_value(value).map(|record| record.id.clone()) else {
            return false;
        };

        entries.records.remove(&id);
        entries.order.retain(|existing| *existing != id);
        debug!(id = %id, "Deleted analyzed string");
        true
    }

    fn len(&self) -> usize {
        self.lock().records.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;

    fn catalog_with(values: &[&str]) -> InMemoryCatalog {
        let catalog = InMemoryCatalog::new();
        for value in values {
            catalog.add(analyze(value));
        }
        catalog
    }

    #[test]
    fn test_add_then_lookup() {
        let catalog = InMemoryCatalog::new();
        let record = analyze("racecar");
        catalog.add(record.clone());

        assert!(catalog.exists("racecar"));
        assert!(catalog.exists_by_id(&record.id));
        assert_eq!(catalog.get_by_id(&record.id), Some(record.clone()));
        assert_eq!(catalog.get_by_value("racecar"), Some(record));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_exists_is_exact_match() {
        let catalog = catalog_with(&["Hello"]);
        assert!(catalog.exists("Hello"));
        assert!(!catalog.exists("hello"));
        assert!(!catalog.exists("Hello "));
    }

    #[test]
    fn test_add_replaces_same_identity() {
        let catalog = catalog_with(&["one", "two"]);
        let replacement = analyze("one");
        catalog.add(replacement.clone());

        assert_eq!(catalog.len(), 2);
        let all = catalog.get_all();
        assert_eq!(all[0], replacement);
        assert_eq!(all[1].value, "two");
    }

    #[test]
    fn test_delete() {
        let catalog = catalog_with(&["keep", "drop"]);
        let dropped = analyze("drop");

        assert!(catalog.delete("drop"));
        assert!(!catalog.exists("drop"));
        assert_eq!(catalog.get_by_id(&dropped.id), None);
        assert!(!catalog.delete("drop"));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_get_all_keeps_insertion_order() {
        let catalog = catalog_with(&["c", "a", "b"]);
        let values: Vec<String> = catalog.get_all().into_iter().map(|r| r.value).collect();
        assert_eq!(values, ["c", "a", "b"]);
    }

    #[test]
    fn test_get_filtered() {
        let catalog = catalog_with(&["noon", "hello world", "kayak", "abc"]);

        let palindromes = catalog.get_filtered(&FilterSpec::new().with_palindrome(true));
        let values: Vec<&str> = palindromes.iter().map(|r| r.value.as_str()).collect();
        assert_eq!(values, ["noon", "kayak"]);

        let everything = catalog.get_filtered(&FilterSpec::new());
        assert_eq!(everything.len(), 4);

        let inverted = FilterSpec::new().with_min_length(5).with_max_length(1);
        assert!(catalog.get_filtered(&inverted).is_empty());
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = InMemoryCatalog::new();
        assert!(catalog.is_empty());
        assert!(catalog.get_all().is_empty());
        assert_eq!(catalog.get_by_value(""), None);
        assert!(!catalog.delete(""));
    }
}

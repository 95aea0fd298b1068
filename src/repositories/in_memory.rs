//! Shared in-memory entry store.

use super::traits::EntryProvider;
use crate::domain::DirectoryEntry;
use std::sync::{Arc, PoisonError, RwLock};

/// A thread-safe, in-memory list of directory entries.
///
/// Clones share the same backing list, so an entry added through one handle
/// is visible to every crawler reading through another. Iteration order is
/// insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDirectory {
    entries: Arc<RwLock<Vec<DirectoryEntry>>>,
}

impl InMemoryDirectory {
    /// Create a directory seeded with the given entries.
    pub fn new(entries: Vec<DirectoryEntry>) -> Self {
        Self {
            entries: Arc::new(RwLock::new(entries)),
        }
    }

    /// Append an entry.
    pub fn add(&self, entry: DirectoryEntry) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(entry);
    }

    /// Replace every entry at once.
    pub fn replace_all(&self, entries: Vec<DirectoryEntry>) {
        *self
            .entries
            .write()
            .unwrap_or_else(PoisonError::into_inner) = entries;
    }

    /// Copy of the current entries.
    pub fn snapshot(&self) -> Vec<DirectoryEntry> {
        // Entries are plain values, so a poisoned lock still holds usable data.
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EntryProvider for InMemoryDirectory {
    fn entries(&self) -> Vec<DirectoryEntry> {
        self.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PhoneNumber;

    fn entry(name: &str, phone: &str) -> DirectoryEntry {
        DirectoryEntry::with_number(name, PhoneNumber::new(phone).unwrap())
    }

    #[test]
    fn test_default_is_empty() {
        let directory = InMemoryDirectory::default();
        assert!(directory.is_empty());
        assert!(directory.entries().is_empty());
    }

    #[test]
    fn test_add_keeps_insertion_order() {
        let directory = InMemoryDirectory::new(vec![entry("Person_1", "+36.201234567")]);
        directory.add(entry("Person_2", "+36.302345678"));
        directory.add(DirectoryEntry::without_number("Person_3"));

        let names: Vec<String> = directory
            .entries()
            .iter()
            .map(|e| e.name().to_string())
            .collect();
        assert_eq!(names, vec!["Person_1", "Person_2", "Person_3"]);
        assert_eq!(directory.len(), 3);
    }

    #[test]
    fn test_clones_share_storage() {
        let directory = InMemoryDirectory::default();
        let handle = directory.clone();

        handle.add(entry("Person_1", "+36.201234567"));
        assert_eq!(directory.len(), 1);

        directory.replace_all(vec![]);
        assert!(handle.is_empty());
    }
}

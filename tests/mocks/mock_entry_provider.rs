use phonebook_crawler::repositories::EntryProvider;
use phonebook_crawler::DirectoryEntry;
use std::sync::{Arc, Mutex};

/// Mock entry provider for testing.
///
/// Returns a configurable list of entries and counts how often it was
/// asked for them, so tests can verify the crawler re-reads on every call.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockEntryProvider {
    entries: Arc<Mutex<Vec<DirectoryEntry>>>,
    call_count: Arc<Mutex<usize>>,
}

#[allow(dead_code)]
impl MockEntryProvider {
    /// Create a provider returning the given entries.
    pub fn new(entries: Vec<DirectoryEntry>) -> Self {
        Self {
            entries: Arc::new(Mutex::new(entries)),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Replace the entries returned from now on.
    pub fn set_entries(&self, entries: Vec<DirectoryEntry>) {
        *self.entries.lock().unwrap() = entries;
    }

    /// Get the number of times `entries` was called.
    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Reset the call count.
    pub fn reset_call_count(&self) {
        *self.call_count.lock().unwrap() = 0;
    }
}

impl EntryProvider for MockEntryProvider {
    fn entries(&self) -> Vec<DirectoryEntry> {
        *self.call_count.lock().unwrap() += 1;
        self.entries.lock().unwrap().clone()
    }
}

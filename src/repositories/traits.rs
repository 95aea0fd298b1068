use crate::domain::DirectoryEntry;

/// Source of directory entries.
///
/// Provides abstraction over where entries come from, enabling different
/// implementations (in-memory store, closures, mocks). Implementations are
/// invoked once per lookup and must return the entries in a stable order;
/// an empty collection is allowed.
pub trait EntryProvider {
    /// Return the current entries.
    fn entries(&self) -> Vec<DirectoryEntry>;
}

impl<F> EntryProvider for F
where
    F: Fn() -> Vec<DirectoryEntry>,
{
    fn entries(&self) -> Vec<DirectoryEntry> {
        self()
    }
}

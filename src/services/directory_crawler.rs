//! Name lookup over a directory entry provider.
//!
//! Every operation pulls a fresh collection from the provider and scans it
//! for the first entry whose name matches exactly. They differ only in how
//! a miss is reported.

use crate::domain::DirectoryEntry;
use crate::repositories::EntryProvider;
use once_cell::sync::Lazy;
use std::io::{self, Write};

/// Entry returned by [`DirectoryCrawler::find_entry_by_name_with_fallback`] on a miss.
pub static DEFAULT_ENTRY: Lazy<DirectoryEntry> =
    Lazy::new(|| DirectoryEntry::without_number("DEFAULT_ENTRY"));

/// Line written by [`DirectoryCrawler::print_phone_number_by_name`] when no number is found.
pub const NOT_FOUND_MESSAGE: &str = "Phone book entry is not found";

/// Resolves names to directory entries.
///
/// The crawler keeps no copy of the entries; each call asks the provider
/// again, so lookups observe changes made to the backing store between calls.
pub struct DirectoryCrawler<P> {
    provider: P,
}

impl<P: EntryProvider> DirectoryCrawler<P> {
    /// Create a new crawler reading from `provider`.
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Find an entry by exact, case-sensitive name.
    ///
    /// Returns the first match in provider order, or `None`.
    pub fn find_entry_by_name(&self, name: &str) -> Option<DirectoryEntry> {
        self.scan(name)
    }

    /// Find an entry by name, or produce one with `fallback` on a miss.
    ///
    /// `fallback` is only called when nothing matches.
    pub fn find_entry_by_name_with_external_fallback<F>(
        &self,
        name: &str,
        fallback: F,
    ) -> DirectoryEntry
    where
        F: FnOnce() -> DirectoryEntry,
    {
        self.scan(name).unwrap_or_else(|| {
            tracing::trace!(name = %name, "Using external fallback entry");
            fallback()
        })
    }

    /// Find an entry by name, or return [`DEFAULT_ENTRY`] on a miss.
    pub fn find_entry_by_name_with_fallback(&self, name: &str) -> DirectoryEntry {
        self.find_entry_by_name_with_external_fallback(name, || DEFAULT_ENTRY.clone())
    }

    /// Write the phone number registered for `name` to `out` as one line.
    ///
    /// Writes [`NOT_FOUND_MESSAGE`] instead when there is no matching entry or
    /// the matching entry has no number. Only I/O failures of `out` are errors.
    pub fn print_phone_number_by_name<W>(&self, name: &str, out: &mut W) -> io::Result<()>
    where
        W: Write + ?Sized,
    {
        match self.scan(name).as_ref().and_then(DirectoryEntry::phone_number) {
            Some(phone) => writeln!(out, "{}", phone),
            None => writeln!(out, "{}", NOT_FOUND_MESSAGE),
        }
    }

    /// Write the entry for `name` to `out` as one line, falling back to
    /// [`DEFAULT_ENTRY`] on a miss. Only I/O failures of `out` are errors.
    pub fn print_entry_by_name<W>(&self, name: &str, out: &mut W) -> io::Result<()>
    where
        W: Write + ?Sized,
    {
        writeln!(out, "{}", self.find_entry_by_name_with_fallback(name))
    }

    /// [`print_entry_by_name`](Self::print_entry_by_name) to stdout.
    pub fn print_entry_to_stdout(&self, name: &str) -> io::Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.print_entry_by_name(name, &mut handle)?;
        handle.flush()
    }

    /// [`print_phone_number_by_name`](Self::print_phone_number_by_name) to stdout.
    pub fn print_phone_number_to_stdout(&self, name: &str) -> io::Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.print_phone_number_by_name(name, &mut handle)?;
        handle.flush()
    }

    fn scan(&self, name: &str) -> Option<DirectoryEntry> {
        let found = self
            .provider
            .entries()
            .into_iter()
            .find(|entry| entry.name() == name);

        match &found {
            Some(_) => tracing::debug!(name = %name, "Directory entry found"),
            None => tracing::debug!(name = %name, "Directory entry not found"),
        }
        found
    }
}

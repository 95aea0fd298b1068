//! JSON seed file loading.
//!
//! The seed file is a JSON array of entries:
//!
//! ```json
//! [
//!   {"name": "Person_1", "phone_number": "+36.201234567"},
//!   {"name": "Person_2", "phone_number": null}
//! ]
//! ```
//!
//! Phone numbers are validated while parsing, and unknown keys are refused,
//! so a file with an invalid number or a misspelled field is rejected as a
//! whole.

use crate::domain::DirectoryEntry;
use crate::error::{DirectoryError, DirectoryResult};
use std::fs;
use std::path::Path;

/// Parse directory entries from a JSON string.
pub fn parse_entries(json: &str) -> DirectoryResult<Vec<DirectoryEntry>> {
    Ok(serde_json::from_str(json)?)
}

/// Read and parse directory entries from a JSON file.
pub fn load_entries(path: &Path) -> DirectoryResult<Vec<DirectoryEntry>> {
    let json = fs::read_to_string(path).map_err(|source| DirectoryError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let entries = parse_entries(&json)?;
    tracing::debug!(
        path = %path.display(),
        count = entries.len(),
        "Loaded directory entries"
    );
    Ok(entries)
}

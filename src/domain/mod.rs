//! Domain value objects and types.
//!
//! These value objects validate at construction time, so an invalid
//! phone number can never be represented in a directory entry.

pub mod entry;
pub mod errors;
pub mod phone;

pub use entry::DirectoryEntry;
pub use errors::ValidationError;
pub use phone::PhoneNumber;

//! Phone Book Crawler - exact-name lookup over an in-memory phone book.
//!
//! Entries pair a name with an optional, validated phone number. The
//! crawler resolves a name against the entries supplied by a provider and
//! offers several ways of handling a miss: an absent value, a caller
//! supplied fallback, a fixed default entry, or a printed message.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (`PhoneNumber`, `DirectoryEntry`)
//! - **repositories**: Entry providers and JSON seed loading
//! - **services**: The `DirectoryCrawler` lookup logic
//! - **error**: Error types for configuration and loading
//! - **config**: Configuration management from environment variables

pub mod config;
pub mod domain;
pub mod error;
pub mod repositories;
pub mod services;

pub use config::Config;
pub use domain::{DirectoryEntry, PhoneNumber, ValidationError};
pub use error::{ConfigError, DirectoryError};
pub use repositories::{EntryProvider, InMemoryDirectory};
pub use services::{DirectoryCrawler, DEFAULT_ENTRY, NOT_FOUND_MESSAGE};

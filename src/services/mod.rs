//! Application service layer.
//!
//! Services hold the lookup logic and sit between callers and the entry
//! providers in [`crate::repositories`].

mod directory_crawler;

pub use directory_crawler::{DirectoryCrawler, DEFAULT_ENTRY, NOT_FOUND_MESSAGE};

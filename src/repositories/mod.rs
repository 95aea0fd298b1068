mod in_memory;
mod json_source;
mod traits;

pub use in_memory::InMemoryDirectory;
pub use json_source::{load_entries, parse_entries};
pub use traits::EntryProvider;

mod mock_entry_provider;

pub use mock_entry_provider::MockEntryProvider;

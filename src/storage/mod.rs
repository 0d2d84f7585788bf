/// Default locations of the preference file
pub mod config;
/// JSON file backed preference store
pub mod file_store;
/// Preference store contract and in-memory store
pub mod preferences;
/// Typed accessors for the watchlist and theme keys
pub mod utils;

pub use file_store::JsonFilePreferenceStore;
pub use preferences::{MemoryPreferenceStore, PreferenceStore};

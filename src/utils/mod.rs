/// Module containing environment-backed configuration helpers
pub mod config;
/// Module containing utilities for handling unique identifiers
pub mod id;
/// Module containing logging utilities
pub mod logger;

pub use config::*;
pub use id::*;
pub use logger::*;

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod store;

#[cfg(test)]
mod tests;

pub use config::{Config, GenerationMode};
pub use error::LookupError;
pub use models::{Blog, DayArchive, Entry, EntryId, MonthArchive, YearArchive};
pub use services::permalink::{PathKind, PermalinkResolver, Resolved};
pub use store::MemoryStore;

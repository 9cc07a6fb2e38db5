mod memory;

pub use memory::MemoryStore;

use crate::error::LookupError;
use crate::models::{Blog, Entry, EntryId, YearArchive};

/// Enumeration and lookup of a blog's published entries.
///
/// `entries` must return the list newest-first and in the same order on
/// every call; the collision policy in permalink generation depends on a
/// stable publish order.
pub trait EntryRepository: Send + Sync {
    fn entries(&self, blog: &Blog) -> Result<Vec<Entry>, LookupError>;

    fn find(&self, blog: &Blog, id: &EntryId) -> Result<Option<Entry>, LookupError>;
}

/// Lookup into the date hierarchy of a blog's content. Year, month, and
/// day nodes are read-only from the resolver's point of view; a date with
/// no content is simply absent.
pub trait ArchiveIndex: Send + Sync {
    fn year(&self, blog: &Blog, year: i32) -> Result<Option<YearArchive>, LookupError>;
}

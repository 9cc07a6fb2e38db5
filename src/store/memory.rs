use crate::error::LookupError;
use crate::models::{Blog, Entry, EntryId, YearArchive};
use crate::store::{ArchiveIndex, EntryRepository};
use chrono::Datelike;
use std::collections::HashMap;
use std::sync::RwLock;

/// In-memory entry store and archive index, keyed by blog name.
///
/// Entry lists are kept newest-first; archive nodes are derived from the
/// stored publish timestamps on every lookup rather than maintained as a
/// separate structure.
#[derive(Debug, Default)]
pub struct MemoryStore {
    blogs: RwLock<HashMap<String, Vec<Entry>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry to a blog, keeping the list newest-first. Entries
    /// sharing a publish timestamp are ordered by insertion, newest
    /// insert first.
    pub fn publish(&self, blog: &Blog, entry: Entry) -> Result<(), LookupError> {
        let mut blogs = self
            .blogs
            .write()
            .map_err(|_| LookupError::EntryStore("lock poisoned".into()))?;
        let list = blogs.entry(blog.name.clone()).or_default();
        let pos = list
            .iter()
            .position(|e| e.published_at <= entry.published_at)
            .unwrap_or(list.len());
        list.insert(pos, entry);
        Ok(())
    }
}

impl EntryRepository for MemoryStore {
    fn entries(&self, blog: &Blog) -> Result<Vec<Entry>, LookupError> {
        let blogs = self
            .blogs
            .read()
            .map_err(|_| LookupError::EntryStore("lock poisoned".into()))?;
        Ok(blogs.get(&blog.name).cloned().unwrap_or_default())
    }

    fn find(&self, blog: &Blog, id: &EntryId) -> Result<Option<Entry>, LookupError> {
        let blogs = self
            .blogs
            .read()
            .map_err(|_| LookupError::EntryStore("lock poisoned".into()))?;
        Ok(blogs
            .get(&blog.name)
            .and_then(|list| list.iter().find(|e| &e.id == id).cloned()))
    }
}

impl ArchiveIndex for MemoryStore {
    fn year(&self, blog: &Blog, year: i32) -> Result<Option<YearArchive>, LookupError> {
        let blogs = self
            .blogs
            .read()
            .map_err(|_| LookupError::ArchiveIndex("lock poisoned".into()))?;
        let Some(list) = blogs.get(&blog.name) else {
            return Ok(None);
        };

        let mut node: Option<YearArchive> = None;
        for entry in list {
            let date = entry.published_at.date_naive();
            if date.year() == year {
                node.get_or_insert_with(|| YearArchive::new(year))
                    .record(date.month(), date.day());
            }
        }
        Ok(node)
    }
}

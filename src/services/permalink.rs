use crate::config::GenerationMode;
use crate::models::{Blog, DayArchive, Entry, MonthArchive, YearArchive};
use crate::services::slug::entry_slug;
use crate::store::{ArchiveIndex, EntryRepository};
use once_cell::sync::Lazy;
use regex::Regex;
use std::sync::{Arc, Mutex};

// ASCII classes on purpose: a path with non-ASCII digits or letters is
// not a permalink this resolver ever emitted.
static DAY_PERMALINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^/[0-9]{4}/[0-9]{2}/[0-9]{2}$").expect("valid day permalink regex"));

static MONTH_PERMALINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^/[0-9]{4}/[0-9]{2}$").expect("valid month permalink regex"));

static ENTRY_PERMALINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^/[[:word:]-]*$").expect("valid entry permalink regex"));

/// The shape of an inbound path. The date shapes are tested before the
/// entry shape, most specific first; the first match wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    Day,
    Month,
    Entry,
    Unknown,
}

/// Result of resolving an inbound path back to content.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolved {
    Entry(Entry),
    Month(MonthArchive),
    Day(DayArchive),
}

pub fn is_day_permalink(path: &str) -> bool {
    DAY_PERMALINK.is_match(path)
}

pub fn is_month_permalink(path: &str) -> bool {
    MONTH_PERMALINK.is_match(path)
}

pub fn is_entry_permalink(path: &str) -> bool {
    ENTRY_PERMALINK.is_match(path)
}

/// Classifies a bare path (no query string) by shape, most specific
/// pattern first.
pub fn classify(path: &str) -> PathKind {
    if is_day_permalink(path) {
        PathKind::Day
    } else if is_month_permalink(path) {
        PathKind::Month
    } else if is_entry_permalink(path) {
        PathKind::Entry
    } else {
        PathKind::Unknown
    }
}

/// Generates permalinks for one blog's content and resolves inbound
/// paths back to entries and archive nodes.
///
/// Stateless apart from the blog context: every call re-reads current
/// collaborator state, so a permalink always reflects the entry's current
/// title and the current set of colliding titles. Generation is
/// read-then-decide and not atomic against a concurrent publish of an
/// identical title; `GenerationMode::Serialized` closes that window for
/// callers sharing a resolver by holding a mutex across the scan.
pub struct PermalinkResolver {
    blog: Blog,
    entries: Arc<dyn EntryRepository>,
    archive: Arc<dyn ArchiveIndex>,
    mode: GenerationMode,
    generation_gate: Mutex<()>,
}

impl PermalinkResolver {
    pub fn new(blog: Blog, entries: Arc<dyn EntryRepository>, archive: Arc<dyn ArchiveIndex>) -> Self {
        Self {
            blog,
            entries,
            archive,
            mode: GenerationMode::OnDemand,
            generation_gate: Mutex::new(()),
        }
    }

    pub fn with_mode(mut self, mode: GenerationMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn blog(&self) -> &Blog {
        &self.blog
    }

    /// Permalink path for an entry: `/<slug>`, or `/<slug>_<id>` when an
    /// earlier-published entry already used the exact same title.
    ///
    /// Once emitted, the path stays stable for the entry's lifetime as
    /// long as its title and the set of earlier colliding titles do not
    /// change: the id suffix is the entry's own id, never a counter, so
    /// later publishes cannot shift it.
    pub fn entry_permalink(&self, entry: &Entry) -> String {
        match self.mode {
            GenerationMode::Serialized => {
                let _gate = self
                    .generation_gate
                    .lock()
                    .unwrap_or_else(|e| e.into_inner());
                self.generate(entry)
            }
            GenerationMode::OnDemand => self.generate(entry),
        }
    }

    fn generate(&self, entry: &Entry) -> String {
        // An untitled entry slugs to its id, which cannot collide.
        let Some(title) = entry.title_text() else {
            return self.slug_path(entry);
        };

        let collisions = match self.entries.entries(&self.blog) {
            Ok(entries) => {
                // Newest-first list, scanned oldest-first: count earlier
                // publishes of the same title, stopping at this entry.
                let mut count = 0;
                for other in entries.iter().rev() {
                    if other.id == entry.id {
                        break;
                    }
                    if other.title.as_deref() == Some(title) {
                        count += 1;
                    }
                }
                count
            }
            Err(err) => {
                tracing::warn!(blog = %self.blog.name, error = %err, "collision scan failed, using plain slug");
                0
            }
        };

        if collisions == 0 {
            self.slug_path(entry)
        } else {
            format!("{}_{}", self.slug_path(entry), entry.id)
        }
    }

    fn slug_path(&self, entry: &Entry) -> String {
        format!("/{}", entry_slug(entry.title_text(), &entry.id))
    }

    /// Canonical local permalink: the blog's URL prefix plus the
    /// generated path.
    pub fn local_permalink(&self, entry: &Entry) -> String {
        format!("{}{}", self.blog.url_prefix(), self.entry_permalink(entry))
    }

    /// Permalink path for a month archive, `/yyyy/MM.html`.
    pub fn month_permalink(&self, year: i32, month: u32) -> String {
        format!("/{year:04}/{month:02}.html")
    }

    /// Permalink path for a day archive, `/yyyy/MM/dd.html`.
    pub fn day_permalink(&self, year: i32, month: u32, day: u32) -> String {
        format!("/{year:04}/{month:02}/{day:02}.html")
    }

    /// Resolves a day-shaped path to its archive node. Paths that do not
    /// match the day shape yield `None` rather than garbage; the field
    /// offsets below assume the validated fixed-width form.
    pub fn day_from_path(&self, path: &str) -> Option<DayArchive> {
        if !is_day_permalink(path) {
            return None;
        }
        let year = path[1..5].parse().ok()?;
        let month = path[6..8].parse().ok()?;
        let day = path[9..11].parse().ok()?;

        self.year_archive(year)?
            .month(month)?
            .day(day)
            .copied()
    }

    /// Resolves a month-shaped path to its archive node.
    pub fn month_from_path(&self, path: &str) -> Option<MonthArchive> {
        if !is_month_permalink(path) {
            return None;
        }
        let year = path[1..5].parse().ok()?;
        let month = path[6..8].parse().ok()?;

        self.year_archive(year)?.month(month).cloned()
    }

    fn year_archive(&self, year: i32) -> Option<YearArchive> {
        match self.archive.year(&self.blog, year) {
            Ok(node) => node,
            Err(err) => {
                tracing::warn!(blog = %self.blog.name, year, error = %err, "archive lookup failed");
                None
            }
        }
    }

    /// Finds the entry whose canonical permalink ends with the given
    /// path. A suffix match rather than equality, so an entry that was
    /// aggregated under a host prefix is still found by its local path.
    /// First match in enumeration order wins.
    pub fn entry_from_path(&self, path: &str) -> Option<Entry> {
        let entries = match self.entries.entries(&self.blog) {
            Ok(entries) => entries,
            Err(err) => {
                tracing::warn!(blog = %self.blog.name, error = %err, "entry lookup failed");
                return None;
            }
        };
        entries
            .into_iter()
            .find(|entry| self.local_permalink(entry).ends_with(path))
    }

    /// Classifies a path and resolves it against the matching
    /// collaborator. Every failure mode, including collaborator errors,
    /// comes back as `None`.
    pub fn resolve(&self, path: &str) -> Option<Resolved> {
        match classify(path) {
            PathKind::Day => self.day_from_path(path).map(Resolved::Day),
            PathKind::Month => self.month_from_path(path).map(Resolved::Month),
            PathKind::Entry => self.entry_from_path(path).map(Resolved::Entry),
            PathKind::Unknown => None,
        }
    }
}

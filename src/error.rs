use thiserror::Error;

/// Failure of one of the lookup collaborators backing the resolver.
///
/// These never cross the resolver's public boundary: a failed collision
/// scan degrades to the non-disambiguated permalink, and a failed
/// resolution degrades to "not found".
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("entry store unavailable: {0}")]
    EntryStore(String),

    #[error("archive index unavailable: {0}")]
    ArchiveIndex(String),
}

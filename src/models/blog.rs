use serde::{Deserialize, Serialize};

/// The blog a resolver operates on. Entries and archive nodes are always
/// looked up within one blog context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Blog {
    pub name: String,
    /// Local URL prefix, e.g. `http://localhost:3000/blog`. Canonical
    /// permalinks are this prefix plus the generated path.
    pub url: String,
}

impl Blog {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }

    /// URL prefix without a trailing slash, ready to prepend to a
    /// `/`-rooted permalink path.
    pub fn url_prefix(&self) -> &str {
        self.url.trim_end_matches('/')
    }
}

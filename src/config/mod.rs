use crate::models::Blog;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub blog: BlogConfig,
    #[serde(default)]
    pub permalink: PermalinkConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BlogConfig {
    #[serde(default = "default_blog_name")]
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PermalinkConfig {
    #[serde(default)]
    pub generation: GenerationMode,
}

/// How permalink generation handles concurrent publishes.
///
/// `OnDemand` recomputes freely and accepts the transient-collision
/// window described on `PermalinkResolver`; `Serialized` holds a mutex
/// across the collision scan so only one generation is in flight per
/// resolver at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum GenerationMode {
    #[default]
    OnDemand,
    Serialized,
}

fn default_blog_name() -> String {
    "main".to_string()
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn blog(&self) -> Blog {
        Blog::new(&self.blog.name, &self.blog.url)
    }
}

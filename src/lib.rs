//! shkola: content compiler for a school website
//!
//! Turns directories of markdown files with a small frontmatter block
//! (news posts, the teacher roster) into the JSON indexes the site's pages
//! fetch and render.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod generator;
pub mod render;

use std::path::{Path, PathBuf};

pub use error::{Error, Result};

/// Name of the optional site configuration file
pub const CONFIG_FILE: &str = "_config.yml";

/// A site rooted at a base directory
#[derive(Debug, Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Content directory
    pub content_dir: PathBuf,
    /// Posts collection directory
    pub posts_dir: PathBuf,
    /// Teachers collection directory
    pub teachers_dir: PathBuf,
}

impl Site {
    /// Create a new site from a directory, reading `_config.yml` if present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join(CONFIG_FILE);

        let config = if config_path.exists() {
            tracing::debug!("Loading config from {:?}", config_path);
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Create a site with an explicit configuration
    pub fn with_config(base_dir: PathBuf, config: config::SiteConfig) -> Self {
        let content_dir = base_dir.join(&config.content_dir);
        let posts_dir = content_dir.join(&config.posts_dir);
        let teachers_dir = content_dir.join(&config.teachers_dir);

        Self {
            config,
            base_dir,
            content_dir,
            posts_dir,
            teachers_dir,
        }
    }

    pub fn posts_index(&self) -> PathBuf {
        self.posts_dir.join(&self.config.index_file)
    }

    pub fn teachers_index(&self) -> PathBuf {
        self.teachers_dir.join(&self.config.index_file)
    }

    /// Generate both indexes
    pub fn generate(&self) -> anyhow::Result<()> {
        commands::generate::run(self, None)
    }

    /// Remove generated indexes
    pub fn clean(&self) -> anyhow::Result<()> {
        commands::clean::run(self)
    }
}

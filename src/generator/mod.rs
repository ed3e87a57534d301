//! Generator module - writes collection indexes as JSON

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::content::loader::ContentLoader;
use crate::error::{Error, Result};
use crate::Site;

/// Outcome of writing one index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedIndex {
    pub path: PathBuf,
    pub count: usize,
}

/// Builds the posts and teachers indexes
pub struct Generator<'a> {
    site: &'a Site,
    loader: ContentLoader<'a>,
}

impl<'a> Generator<'a> {
    /// Create a new generator
    pub fn new(site: &'a Site) -> Self {
        Self {
            site,
            loader: ContentLoader::new(site),
        }
    }

    /// Generate the posts index
    pub fn generate_posts(&self) -> Result<GeneratedIndex> {
        let posts = self.loader.load_posts()?;
        let path = self.site.posts_index();
        write_index(&path, &posts)?;
        tracing::info!("Generated {:?} with {} posts", path, posts.len());

        Ok(GeneratedIndex {
            path,
            count: posts.len(),
        })
    }

    /// Generate the teachers index
    pub fn generate_teachers(&self) -> Result<GeneratedIndex> {
        let teachers = self.loader.load_teachers()?;
        let path = self.site.teachers_index();
        write_index(&path, &teachers)?;
        tracing::info!("Generated {:?} with {} teachers", path, teachers.len());

        Ok(GeneratedIndex {
            path,
            count: teachers.len(),
        })
    }
}

/// Write `records` to `path` as a JSON array with 2-space indentation,
/// replacing the previous file.
///
/// The whole document is serialized before the file is touched.
pub fn write_index<T: Serialize>(path: &Path, records: &[T]) -> Result<()> {
    let json = serde_json::to_string_pretty(records)?;
    fs::write(path, json).map_err(|source| Error::WriteIndex {
        path: path.to_path_buf(),
        source,
    })
}

//! Site configuration (_config.yml)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::content::DEFAULT_EXCERPT_LENGTH;
use crate::error::{Error, Result};

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Directory
    pub content_dir: String,
    pub posts_dir: String,
    pub teachers_dir: String,
    pub index_file: String,

    // Posts
    pub excerpt_length: usize,

    // Teachers
    pub collation_locale: String,
    pub departments: Vec<DepartmentConfig>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_dir: "content".to_string(),
            posts_dir: "posts".to_string(),
            teachers_dir: "teachers".to_string(),
            index_file: "index.json".to_string(),

            excerpt_length: DEFAULT_EXCERPT_LENGTH,

            collation_locale: "uk".to_string(),
            departments: DepartmentConfig::school_defaults(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| Error::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&content).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// A department shown on the teachers page.
///
/// `container_id` is the suffix of the grid/hint element ids the page
/// renders the department into (`teachersGrid-<id>`, `teachersHint-<id>`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentConfig {
    pub label: String,
    pub container_id: String,
}

impl DepartmentConfig {
    pub fn new(label: &str, container_id: &str) -> Self {
        Self {
            label: label.to_string(),
            container_id: container_id.to_string(),
        }
    }

    /// The departments the school site ships with, in page order
    pub fn school_defaults() -> Vec<Self> {
        vec![
            Self::new("Оркестровий відділ", "orchestra"),
            Self::new("Фортепіанний відділ", "piano"),
            Self::new(
                "Теоретично-хоровий відділ та клас сольного співу",
                "theory",
            ),
            Self::new("Художній відділ", "art"),
            Self::new("Хореографічний відділ", "dance"),
        ]
    }
}

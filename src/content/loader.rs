//! Content loader - loads posts and teachers from the content directory

use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::{Collation, FrontMatter, Post, Teacher};
use crate::error::{Error, Result};
use crate::Site;

const MARKDOWN_EXT: &str = ".md";

/// A markdown file read from a collection directory
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: PathBuf,
    /// File name without the `.md` extension
    pub slug: String,
    pub content: String,
}

/// Loads content from the collection directories
pub struct ContentLoader<'a> {
    site: &'a Site,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(site: &'a Site) -> Self {
        Self { site }
    }

    /// Load all posts, newest first
    pub fn load_posts(&self) -> Result<Vec<Post>> {
        let excerpt_len = self.site.config.excerpt_length;
        let mut posts = Vec::new();

        for source in read_sources(&self.site.posts_dir)? {
            let (fm, body) = FrontMatter::parse(&source.content);
            let post = Post::build(&source.slug, &fm, body, excerpt_len);

            if !post.has_sortable_date() {
                tracing::warn!(
                    "Post {:?} has date {:?}, which will not sort chronologically (expected YYYY-MM-DD)",
                    source.path,
                    post.date
                );
            }
            tracing::debug!("Loaded post {} ({} metadata fields)", post.slug, fm.len());
            posts.push(post);
        }

        sort_posts(&mut posts);
        Ok(posts)
    }

    /// Load all teachers, ordered by department then name
    pub fn load_teachers(&self) -> Result<Vec<Teacher>> {
        let sources = read_sources(&self.site.teachers_dir)?;
        let collation = Collation::new(&self.site.config.collation_locale)?;
        tracing::debug!("Ordering teachers with {:?} collation", collation.locale());

        let mut teachers = Vec::new();
        for source in sources {
            let (fm, body) = FrontMatter::parse(&source.content);
            let teacher = Teacher::build(&source.slug, &fm, body);
            tracing::debug!("Loaded teacher {} ({})", teacher.slug, teacher.department);
            teachers.push(teacher);
        }

        sort_teachers(&mut teachers, &collation);
        Ok(teachers)
    }
}

/// Newest first, comparing dates as plain strings
pub fn sort_posts(posts: &mut [Post]) {
    posts.sort_by(|a, b| b.date.cmp(&a.date));
}

/// By department, then by name
pub fn sort_teachers(teachers: &mut [Teacher], collation: &Collation) {
    teachers.sort_by(|a, b| {
        collation
            .compare(&a.department, &b.department)
            .then_with(|| collation.compare(&a.name, &b.name))
    });
}

/// Read every markdown file directly inside `dir`, in file name order.
///
/// The directory is created when missing. Subdirectories are not entered.
pub fn read_sources(dir: &Path) -> Result<Vec<SourceFile>> {
    fs::create_dir_all(dir).map_err(|source| Error::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut sources = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|source| Error::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?;

        let Some(slug) = markdown_slug(entry.path()) else {
            continue;
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path().to_path_buf();
        let bytes = fs::read(&path).map_err(|source| Error::ReadFile {
            path: path.clone(),
            source,
        })?;
        let content = match String::from_utf8(bytes) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("{:?} is not valid UTF-8, replacing invalid bytes", path);
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        };

        sources.push(SourceFile {
            path,
            slug,
            content,
        });
    }

    Ok(sources)
}

/// File name without the `.md` suffix, if it has one
fn markdown_slug(path: &Path) -> Option<String> {
    let name = path.file_name()?.to_string_lossy();
    name.strip_suffix(MARKDOWN_EXT).map(str::to_string)
}

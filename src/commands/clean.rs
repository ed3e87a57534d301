//! Remove generated indexes

use anyhow::Result;
use std::fs;

use crate::Site;

/// Delete both `index.json` files if they exist
pub fn run(site: &Site) -> Result<()> {
    for index in [site.posts_index(), site.teachers_index()] {
        if index.exists() {
            fs::remove_file(&index)?;
            tracing::info!("Deleted: {:?}", index);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_keeps_sources() {
        let dir = tempfile::tempdir().unwrap();
        let site = Site::new(dir.path()).unwrap();
        fs::create_dir_all(&site.posts_dir).unwrap();
        fs::write(site.posts_dir.join("hello.md"), "Hello").unwrap();
        site.generate().unwrap();
        assert!(site.posts_index().exists());

        site.clean().unwrap();
        assert!(!site.posts_index().exists());
        assert!(!site.teachers_index().exists());
        assert!(site.posts_dir.join("hello.md").exists());

        // nothing left to delete
        site.clean().unwrap();
    }
}

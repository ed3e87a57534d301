//! Generate the JSON indexes

use anyhow::Result;

use super::Collection;
use crate::generator::Generator;
use crate::Site;

/// Generate one collection, or both when `only` is `None`
pub fn run(site: &Site, only: Option<Collection>) -> Result<()> {
    let start = std::time::Instant::now();
    let generator = Generator::new(site);

    if only != Some(Collection::Teachers) {
        let index = generator.generate_posts()?;
        println!("Generated {} with {} posts.", index.path.display(), index.count);
    }

    if only != Some(Collection::Posts) {
        let index = generator.generate_teachers()?;
        println!(
            "Generated {} with {} teachers.",
            index.path.display(),
            index.count
        );
    }

    let duration = start.elapsed();
    tracing::info!("Generated in {:.2}s", duration.as_secs_f64());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_only_posts() {
        let dir = TempDir::new().unwrap();
        let site = Site::new(dir.path()).unwrap();
        run(&site, Some(Collection::Posts)).unwrap();
        assert!(site.posts_index().exists());
        assert!(!site.teachers_index().exists());
    }

    #[test]
    fn test_both_collections() {
        let dir = TempDir::new().unwrap();
        let site = Site::new(dir.path()).unwrap();
        run(&site, None).unwrap();
        assert!(site.posts_index().exists());
        assert!(site.teachers_index().exists());
    }
}

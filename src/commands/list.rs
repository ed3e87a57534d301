//! List generated content as the site pages would show it

use anyhow::Result;
use std::io::{self, Write};

use super::Collection;
use crate::content::{Collation, Post, Teacher};
use crate::render::{self, group_by_department};
use crate::Site;

/// List a collection from its generated index
pub fn run(site: &Site, collection: Collection) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_listing(site, collection, &mut out)
}

/// Write the listing for `collection` to `out`
pub fn write_listing<W: Write>(site: &Site, collection: Collection, out: &mut W) -> Result<()> {
    match collection {
        Collection::Posts => list_posts(site, out),
        Collection::Teachers => list_teachers(site, out),
    }
}

fn list_posts<W: Write>(site: &Site, out: &mut W) -> Result<()> {
    let posts: Vec<Post> = match render::load_index(&site.posts_index()) {
        Ok(posts) => posts,
        Err(e) => {
            tracing::warn!("{}", e);
            writeln!(out, "{}", render::POSTS_UNAVAILABLE_HINT)?;
            return Ok(());
        }
    };

    if posts.is_empty() {
        writeln!(out, "{}", render::POSTS_EMPTY_HINT)?;
        return Ok(());
    }

    writeln!(out, "Posts ({}):", posts.len())?;
    for post in &posts {
        let date = if post.date.is_empty() {
            String::new()
        } else {
            format!("{} ", post.date)
        };
        writeln!(
            out,
            "  [{}] {}- {} [{}]",
            post.kind.label(),
            date,
            post.title,
            post.slug
        )?;
    }

    Ok(())
}

fn list_teachers<W: Write>(site: &Site, out: &mut W) -> Result<()> {
    let teachers: Vec<Teacher> = match render::load_index(&site.teachers_index()) {
        Ok(teachers) => teachers,
        Err(e) => {
            tracing::warn!("{}", e);
            writeln!(out, "{}", render::TEACHERS_UNAVAILABLE_HINT)?;
            return Ok(());
        }
    };

    let collation = Collation::new(&site.config.collation_locale)?;
    let grouped = group_by_department(&teachers, &site.config.departments, &collation);

    for department in &site.config.departments {
        writeln!(
            out,
            "{} (#teachersGrid-{}):",
            department.label, department.container_id
        )?;

        match grouped.get(&department.label) {
            Some(list) if !list.is_empty() => {
                for teacher in list {
                    if teacher.role.is_empty() {
                        writeln!(out, "  {} [{}]", teacher.name, teacher.slug)?;
                    } else {
                        writeln!(out, "  {} - {} [{}]", teacher.name, teacher.role, teacher.slug)?;
                    }
                }
            }
            _ => writeln!(out, "  {}", render::TEACHERS_EMPTY_HINT)?,
        }
    }

    if grouped.dropped > 0 {
        writeln!(
            out,
            "Not shown (department not on the page): {}",
            grouped.dropped
        )?;
    }

    Ok(())
}

//! Content module - frontmatter parsing, records, and collection loading

mod collation;
mod excerpt;
mod frontmatter;
pub mod loader;
mod post;

pub use collation::Collation;
pub use excerpt::{excerpt, DEFAULT_EXCERPT_LENGTH, ELLIPSIS};
pub use frontmatter::FrontMatter;
pub use post::{
    Post, PostType, Teacher, DEFAULT_DEPARTMENT, DEFAULT_POST_TITLE, DEFAULT_TEACHER_NAME,
};

//! Post and Teacher records

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::excerpt::excerpt;
use super::FrontMatter;

pub const DEFAULT_POST_TITLE: &str = "Без назви";
pub const DEFAULT_DEPARTMENT: &str = "Без відділу";
pub const DEFAULT_TEACHER_NAME: &str = "Без імені";

/// Kind of a post, as authored in the `type` field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PostType {
    #[default]
    News,
    Event,
    /// Any other authored value, kept verbatim
    Other(String),
}

impl PostType {
    pub fn as_str(&self) -> &str {
        match self {
            PostType::News => "news",
            PostType::Event => "event",
            PostType::Other(s) => s,
        }
    }

    /// Badge text shown on the news page
    pub fn label(&self) -> &'static str {
        match self {
            PostType::Event => "Подія",
            _ => "Новина",
        }
    }
}

impl From<String> for PostType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "news" => PostType::News,
            "event" => PostType::Event,
            _ => PostType::Other(s),
        }
    }
}

impl From<PostType> for String {
    fn from(t: PostType) -> Self {
        t.as_str().to_string()
    }
}

impl fmt::Display for PostType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A news post or event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Post title
    pub title: String,

    /// Publication date, as authored (`YYYY-MM-DD` expected)
    pub date: String,

    #[serde(rename = "type")]
    pub kind: PostType,

    /// Cover image URL or path
    pub cover: String,

    /// Video URL
    pub video: String,

    /// Plain-text summary of the body
    pub excerpt: String,

    /// File name without the `.md` extension
    pub slug: String,
}

impl Post {
    /// Build a post from a parsed content file
    pub fn build(slug: &str, fm: &FrontMatter, body: &str, excerpt_len: usize) -> Self {
        Self {
            title: fm.value_or("title", DEFAULT_POST_TITLE),
            date: fm.value_or("date", ""),
            kind: fm
                .value("type")
                .map(|t| PostType::from(t.to_string()))
                .unwrap_or_default(),
            cover: fm.value_or("cover", ""),
            video: fm.value_or("video", ""),
            excerpt: excerpt(body, excerpt_len),
            slug: slug.to_string(),
        }
    }

    /// Whether the date sorts correctly as a plain string.
    ///
    /// Posts are ordered by comparing dates as strings, which only matches
    /// calendar order for zero-padded `YYYY-MM-DD` prefixes. An empty date is
    /// accepted and sorts last.
    pub fn has_sortable_date(&self) -> bool {
        if self.date.is_empty() {
            return true;
        }
        let Some(prefix) = self.date.get(..10) else {
            return false;
        };
        match NaiveDate::parse_from_str(prefix, "%Y-%m-%d") {
            Ok(d) => d.format("%Y-%m-%d").to_string() == prefix,
            Err(_) => false,
        }
    }
}

/// A teacher on the staff page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    /// File name without the `.md` extension
    pub slug: String,

    /// Department label, matched exactly by the teachers page
    pub department: String,

    pub name: String,

    pub role: String,

    /// Photo URL or path
    pub photo: String,

    /// `bio` field, falling back to the file body
    pub bio: String,
}

impl Teacher {
    /// Build a teacher from a parsed content file
    pub fn build(slug: &str, fm: &FrontMatter, body: &str) -> Self {
        let bio = fm.value("bio").unwrap_or(body).to_string();

        Self {
            slug: slug.to_string(),
            department: fm.value_or("department", DEFAULT_DEPARTMENT),
            name: fm.value_or("name", DEFAULT_TEACHER_NAME),
            role: fm.value_or("role", ""),
            photo: fm.value_or("photo", ""),
            bio,
        }
    }
}

//! Front-matter parsing
//!
//! Content files may start with a flat `key: value` block fenced by `---`
//! lines:
//!
//! ```text
//! ---
//! title: Spring Concert
//! date: "2024-03-01"
//! ---
//! Body text
//! ```
//!
//! Anything that does not look like that is treated as plain body text.

use std::collections::HashMap;

const DELIMITER: &str = "---";

/// Front-matter data from a content file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontMatter {
    metadata: HashMap<String, String>,
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, body)
    ///
    /// Without a complete block the whole input is returned as the body,
    /// untouched. Otherwise the body is whatever follows the closing
    /// delimiter, trimmed.
    pub fn parse(content: &str) -> (Self, &str) {
        match split_block(content) {
            Some((block, body)) => (Self::from_block(block), body.trim()),
            None => (Self::default(), content),
        }
    }

    fn from_block(block: &str) -> Self {
        let mut metadata = HashMap::new();

        for line in block.lines() {
            // Lines without a colon are not key/value pairs
            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            let key = key.trim();
            if key.is_empty() {
                continue;
            }
            metadata.insert(key.to_string(), unquote(value.trim()).to_string());
        }

        Self { metadata }
    }

    /// Raw value of a key, empty strings included
    pub fn get(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }

    /// Value of a key, treating an empty value the same as a missing one
    pub fn value(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.is_empty())
    }

    /// Value of a key, or `default` when missing or empty
    pub fn value_or(&self, key: &str, default: &str) -> String {
        self.value(key).unwrap_or(default).to_string()
    }

    pub fn is_empty(&self) -> bool {
        self.metadata.is_empty()
    }

    pub fn len(&self) -> usize {
        self.metadata.len()
    }
}

/// Split `content` into the front-matter block and the text after it.
///
/// The opening delimiter must be the very first line.
fn split_block(content: &str) -> Option<(&str, &str)> {
    let (first, rest) = content.split_once('\n')?;
    if !is_delimiter(first) {
        return None;
    }

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if is_delimiter(line) {
            return Some((&rest[..offset], &rest[offset + line.len()..]));
        }
        offset += line.len();
    }

    None
}

fn is_delimiter(line: &str) -> bool {
    line.trim_end() == DELIMITER
}

/// Strip one pair of matching double or single quotes around the whole value
fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|v| v.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}

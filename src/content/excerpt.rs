//! Plain-text excerpts from markdown bodies

use lazy_static::lazy_static;
use regex::Regex;

/// Default excerpt length, in characters
pub const DEFAULT_EXCERPT_LENGTH: usize = 160;

/// Appended to excerpts that were cut short
pub const ELLIPSIS: char = '…';

lazy_static! {
    static ref IMAGE: Regex = Regex::new(r"!\[.*?\]\(.*?\)").unwrap();
    static ref LINK: Regex = Regex::new(r"\[(.*?)\]\(.*?\)").unwrap();
    static ref MARKUP: Regex = Regex::new(r"[#>*`_~-]").unwrap();
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Strip markdown syntax from `body` and cut it down to `max_len` characters.
///
/// The cut is a hard character cut, not word-aware.
pub fn excerpt(body: &str, max_len: usize) -> String {
    let text = plain_text(body);

    if text.chars().count() <= max_len {
        return text;
    }

    let cut: String = text.chars().take(max_len).collect();
    let mut result = cut.trim_end().to_string();
    result.push(ELLIPSIS);
    result
}

/// Markdown to a single line of plain text.
///
/// Images go first so their alt text is not picked up as link text.
fn plain_text(body: &str) -> String {
    let text = IMAGE.replace_all(body, "");
    let text = LINK.replace_all(&text, "$1");
    let text = MARKUP.replace_all(&text, "");
    let text = WHITESPACE.replace_all(&text, " ");
    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_unchanged() {
        assert_eq!(excerpt("Come join us!", 160), "Come join us!");
        assert_eq!(excerpt("", 160), "");
    }

    #[test]
    fn test_heading_and_newlines() {
        assert_eq!(
            excerpt("# Big show\nCome join us!", DEFAULT_EXCERPT_LENGTH),
            "Big show Come join us!"
        );
    }

    #[test]
    fn test_images_removed_links_kept() {
        let body = "![poster](/img/poster.jpg) See [the program](https://example.com/p) here.";
        assert_eq!(excerpt(body, 160), "See the program here.");
    }

    #[test]
    fn test_markup_characters_stripped() {
        let body = "> **Bold** and _italic_ ~~gone~~ `code` well-known";
        assert_eq!(excerpt(body, 160), "Bold and italic gone code wellknown");
    }

    #[test]
    fn test_whitespace_collapsed() {
        assert_eq!(excerpt("  a\n\n\tb   c  ", 160), "a b c");
    }

    #[test]
    fn test_hard_cut_with_ellipsis() {
        let body = "я".repeat(200);
        let result = excerpt(&body, 160);
        assert_eq!(result.chars().count(), 161);
        assert!(result.ends_with(ELLIPSIS));
        assert_eq!(result.trim_end_matches(ELLIPSIS), "я".repeat(160));
    }

    #[test]
    fn test_exact_length_not_truncated() {
        let body = "a".repeat(160);
        assert_eq!(excerpt(&body, 160), body);
    }

    #[test]
    fn test_cut_trims_trailing_space() {
        // character 6 is a space, so the cut "hello " loses it
        assert_eq!(excerpt("hello world", 6), "hello…");
    }

    #[test]
    fn test_cut_is_not_word_aware() {
        assert_eq!(excerpt("hello world", 8), "hello wo…");
    }
}

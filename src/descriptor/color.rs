// src/descriptor/color.rs

//! Removal of inline color directives from descriptor text
//!
//! Titles and author names may embed `|cRRGGBB` color-start markers
//! (sentinel plus seven characters) and `|r` color-end markers.

/// Sentinel that opens every color directive
pub const COLOR_MARKER: char = '|';

/// Length of a color-start directive, sentinel included
const COLOR_START_LEN: usize = 8;

/// Length of a color-end directive, sentinel included
const COLOR_END_LEN: usize = 2;

/// Strip all color directives from `text`
///
/// At each sentinel the directive is cut out and scanning resumes at the same
/// position, so a directive uncovered by a removal is removed as well. A
/// directive truncated by the end of the string removes whatever remains.
pub fn strip_color_codes(text: &str) -> String {
    if !text.contains(COLOR_MARKER) {
        return text.to_string();
    }

    let mut chars: Vec<char> = text.chars().collect();
    let mut pos = 0;

    while pos < chars.len() {
        if chars[pos] != COLOR_MARKER {
            pos += 1;
            continue;
        }

        let len = if chars.get(pos + 1) == Some(&'r') {
            COLOR_END_LEN
        } else {
            COLOR_START_LEN
        };
        let end = (pos + len).min(chars.len());
        chars.drain(pos..end);
    }

    chars.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_start_and_end_markers() {
        assert_eq!(strip_color_codes("|cFF0000Red|r Text"), "Red Text");
    }

    #[test]
    fn test_lowercase_hex_title() {
        assert_eq!(strip_color_codes("|c00ff00Main|r Addon"), "Main Addon");
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(strip_color_codes("Plain Title"), "Plain Title");
        assert_eq!(strip_color_codes(""), "");
    }

    #[test]
    fn test_multiple_directives() {
        assert_eq!(
            strip_color_codes("|c00FF00Lib|r|cFFFFFFAddonMenu|r-2.0"),
            "LibAddonMenu-2.0"
        );
    }

    #[test]
    fn test_truncated_trailing_marker() {
        assert_eq!(strip_color_codes("Name|cFF"), "Name");
        assert_eq!(strip_color_codes("Name|"), "Name");
    }

    #[test]
    fn test_uncovered_marker_is_removed() {
        // Removing "|c123456" exposes "|r" at the same position
        assert_eq!(strip_color_codes("A|c123456|rB"), "AB");
    }

    #[test]
    fn test_multibyte_text_preserved() {
        assert_eq!(strip_color_codes("|cABCDEFÄrger|r"), "Ärger");
    }
}

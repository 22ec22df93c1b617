//! Live input filters: the auto-format side channel.
//!
//! Certain rule-string tokens install a value transformation next to (or
//! instead of) a predicate. Filters run on every keystroke (on blur for
//! [`Filter::Capitalize`]), independent of whether the field currently
//! validates, and report a new cursor position so the host can keep the
//! caret where the user expects it under deletion.

use serde::{Deserialize, Serialize};

/// When a filter runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterTrigger {
    /// On every keystroke.
    Input,
    /// On focus loss.
    Blur,
}

/// A single value transformation attached to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Filter {
    /// Strip digits (`onlyLetters`, `noNumbers`).
    StripDigits,
    /// Keep digits only (`onlyNumbers`, `nit`, `ci`).
    DigitsOnly,
    /// Keep digits only, truncated to 8 (`phone`).
    PhoneDigits,
    /// Force uppercase (`uppercase`, format-only tag).
    Uppercase,
    /// Lowercase, then capitalize each word (`capitalize`, format-only tag).
    Capitalize,
    /// Digits grouped in blocks of four, at most 16 (`cardNumber`).
    CardGroups,
    /// Digits as `MM/YY`, at most four (`cardExpiry`).
    ExpirySlash,
}

impl Filter {
    /// Map a rule-string token name to its filter, if it has one.
    pub fn for_token(name: &str) -> Option<Filter> {
        match name {
            "onlyLetters" | "noNumbers" => Some(Filter::StripDigits),
            "onlyNumbers" | "nit" | "ci" => Some(Filter::DigitsOnly),
            "phone" => Some(Filter::PhoneDigits),
            "uppercase" => Some(Filter::Uppercase),
            "capitalize" => Some(Filter::Capitalize),
            "cardNumber" => Some(Filter::CardGroups),
            "cardExpiry" => Some(Filter::ExpirySlash),
            _ => None,
        }
    }

    /// When this filter runs.
    pub fn trigger(&self) -> FilterTrigger {
        match self {
            Filter::Capitalize => FilterTrigger::Blur,
            _ => FilterTrigger::Input,
        }
    }

    /// Apply the filter, returning the new text and byte cursor.
    ///
    /// Removal-only filters keep the cursor anchored to the text before it;
    /// regrouping filters move it to the end, as a wholesale rewrite does.
    pub fn apply(&self, value: &str, cursor: usize) -> (String, usize) {
        match self {
            Filter::StripDigits => retain_with_cursor(value, cursor, |c| !c.is_ascii_digit()),
            Filter::DigitsOnly => retain_with_cursor(value, cursor, |c| c.is_ascii_digit()),
            Filter::PhoneDigits => {
                let (text, cursor) = retain_with_cursor(value, cursor, |c| c.is_ascii_digit());
                truncate_chars(text, cursor, 8)
            }
            Filter::Uppercase => {
                let upper = value.to_uppercase();
                let cursor = value[..boundary_at(value, cursor)].to_uppercase().len();
                (upper, cursor)
            }
            Filter::Capitalize => {
                let text = value
                    .to_lowercase()
                    .split_whitespace()
                    .map(capitalize_word)
                    .collect::<Vec<_>>()
                    .join(" ");
                let cursor = text.len();
                (text, cursor)
            }
            Filter::CardGroups => {
                let digits: String =
                    value.chars().filter(|c| c.is_ascii_digit()).take(16).collect();
                let mut text = String::with_capacity(digits.len() + 3);
                for (i, c) in digits.chars().enumerate() {
                    if i > 0 && i % 4 == 0 {
                        text.push(' ');
                    }
                    text.push(c);
                }
                let cursor = text.len();
                (text, cursor)
            }
            Filter::ExpirySlash => {
                let digits: String =
                    value.chars().filter(|c| c.is_ascii_digit()).take(4).collect();
                let text = if digits.len() >= 2 {
                    format!("{}/{}", &digits[..2], &digits[2..])
                } else {
                    digits
                };
                let cursor = text.len();
                (text, cursor)
            }
        }
    }
}

/// Keep the characters matching `keep`; the new cursor is the filtered
/// length of the old before-cursor prefix.
fn retain_with_cursor(value: &str, cursor: usize, keep: impl Fn(char) -> bool) -> (String, usize) {
    let cut = boundary_at(value, cursor);
    let filtered: String = value.chars().filter(|&c| keep(c)).collect();
    let new_cursor = value[..cut]
        .chars()
        .filter(|&c| keep(c))
        .map(char::len_utf8)
        .sum();
    (filtered, new_cursor)
}

fn truncate_chars(mut text: String, cursor: usize, max: usize) -> (String, usize) {
    if let Some((idx, _)) = text.char_indices().nth(max) {
        text.truncate(idx);
    }
    let cursor = cursor.min(text.len());
    (text, cursor)
}

fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Largest char boundary at or below `cursor`.
fn boundary_at(value: &str, cursor: usize) -> usize {
    let mut cut = cursor.min(value.len());
    while !value.is_char_boundary(cut) {
        cut -= 1;
    }
    cut
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_only_strips_letters() {
        let (text, _) = Filter::DigitsOnly.apply("12a34", 5);
        assert_eq!(text, "1234");
    }

    #[test]
    fn test_strip_digits_keeps_cursor_before_removal() {
        // "12ab" with the cursor after the digits: both removals happen at
        // or before the cursor, so it lands at the start of "ab".
        let (text, cursor) = Filter::StripDigits.apply("12ab", 2);
        assert_eq!(text, "ab");
        assert_eq!(cursor, 0);
    }

    #[test]
    fn test_digits_only_cursor_mid_string() {
        let (text, cursor) = Filter::DigitsOnly.apply("a1b2", 2);
        assert_eq!(text, "12");
        assert_eq!(cursor, 1);
    }

    #[test]
    fn test_strip_digits_preserves_multibyte() {
        let (text, cursor) = Filter::StripDigits.apply("ñ1o", 3);
        assert_eq!(text, "ño");
        assert_eq!(cursor, 2);
    }

    #[test]
    fn test_phone_truncates_to_eight() {
        let (text, cursor) = Filter::PhoneDigits.apply("712345678901", 12);
        assert_eq!(text, "71234567");
        assert_eq!(cursor, 8);
    }

    #[test]
    fn test_uppercase_tracks_cursor() {
        let (text, cursor) = Filter::Uppercase.apply("ana maria", 3);
        assert_eq!(text, "ANA MARIA");
        assert_eq!(cursor, 3);
    }

    #[test]
    fn test_capitalize_words_on_blur() {
        assert_eq!(Filter::Capitalize.trigger(), FilterTrigger::Blur);
        let (text, _) = Filter::Capitalize.apply("  juan PEREZ  ", 0);
        assert_eq!(text, "Juan Perez");
    }

    #[test]
    fn test_card_groups_in_fours() {
        let (text, cursor) = Filter::CardGroups.apply("4111111111111111999", 19);
        assert_eq!(text, "4111 1111 1111 1111");
        assert_eq!(cursor, text.len());
    }

    #[test]
    fn test_expiry_inserts_slash() {
        assert_eq!(Filter::ExpirySlash.apply("1230", 4).0, "12/30");
        assert_eq!(Filter::ExpirySlash.apply("12", 2).0, "12/");
        assert_eq!(Filter::ExpirySlash.apply("1", 1).0, "1");
    }

    #[test]
    fn test_cursor_clamped_to_length() {
        let (text, cursor) = Filter::DigitsOnly.apply("abc", 99);
        assert_eq!(text, "");
        assert_eq!(cursor, 0);
    }
}

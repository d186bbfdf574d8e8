//! Phrase rules for free-text queries.
//!
//! Every rule is tested against the lowercased query and rules in different
//! categories fire independently, so one query can set several fields. Within
//! the word-count category only the first matching phrase applies. The
//! character rules run in order and later ones overwrite earlier ones, which
//! lets "first vowel" win over an explicit letter.
//!
//! No semantic validation happens here: "longer than 9 shorter than 3" yields
//! an inverted range and the caller decides what to do with it.

use std::sync::OnceLock;

use regex::Regex;

use crate::filter::FilterSpec;

/// Word-count phrases, checked in this order.
const WORD_COUNT_PHRASES: [(&str, i64); 3] =
    [("single word", 1), ("two word", 2), ("three word", 3)];

/// Stands in for "the first vowel".
const FIRST_VOWEL: char = 'a';

static LONGER_THAN: OnceLock<Regex> = OnceLock::new();
static SHORTER_THAN: OnceLock<Regex> = OnceLock::new();
static LETTER: OnceLock<Regex> = OnceLock::new();
static VOWEL: OnceLock<Regex> = OnceLock::new();

#[expect(
    clippy::expect_used,
    reason = "Static regex pattern validated at compile time"
)]
fn compiled(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("Static regex pattern is guaranteed to be valid"))
}

fn longer_than() -> &'static Regex {
    compiled(&LONGER_THAN, r"longer than ([0-9]+)")
}

fn shorter_than() -> &'static Regex {
    compiled(&SHORTER_THAN, r"shorter than ([0-9]+)")
}

fn letter() -> &'static Regex {
    compiled(&LETTER, r"letter ([a-z])")
}

fn vowel() -> &'static Regex {
    compiled(&VOWEL, r"vowel ([aeiou])")
}

/// Rule-based translator from free text to a [`FilterSpec`].
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryTranslator;

impl QueryTranslator {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Translate a query. Never fails; an unrecognized query yields an empty spec.
    #[must_use]
    pub fn translate(&self, query: &str) -> FilterSpec {
        let lower = query.to_lowercase();
        let mut spec = FilterSpec::default();

        if lower.contains("palindrome") || lower.contains("palindromic") {
            spec.is_palindrome = Some(true);
        }

        spec.word_count = WORD_COUNT_PHRASES
            .iter()
            .find(|(phrase, _)| lower.contains(phrase))
            .map(|(_, count)| *count);

        if let Some(n) = capture_number(longer_than(), &lower) {
            spec.min_length = Some(n.saturating_add(1));
        }
        if let Some(n) = capture_number(shorter_than(), &lower) {
            spec.max_length = Some(n.saturating_sub(1));
        }

        if lower.contains("contain") && lower.contains("letter") {
            if let Some(ch) = capture_char(letter(), &lower) {
                spec.contains_character = Some(ch);
            }
        }

        if lower.contains("first vowel") {
            spec.contains_character = Some(FIRST_VOWEL);
        } else if lower.contains("vowel") {
            if let Some(ch) = capture_char(vowel(), &lower) {
                spec.contains_character = Some(ch);
            }
        }

        spec
    }
}

/// Translate with the default rules.
#[must_use]
pub fn translate(query: &str) -> FilterSpec {
    QueryTranslator::new().translate(query)
}

/// First capture group as a number; values past `i64::MAX` saturate.
fn capture_number(re: &Regex, text: &str) -> Option<i64> {
    let digits = re.captures(text)?.get(1)?.as_str();
    Some(digits.parse().unwrap_or(i64::MAX))
}

fn capture_char(re: &Regex, text: &str) -> Option<char> {
    re.captures(text)?.get(1)?.as_str().chars().next()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palindrome_phrases() {
        assert_eq!(
            translate("find palindromes"),
            FilterSpec::new().with_palindrome(true)
        );
        assert_eq!(
            translate("Palindromic strings"),
            FilterSpec::new().with_palindrome(true)
        );
    }

    #[test]
    fn test_length_phrases() {
        assert_eq!(
            translate("strings longer than 5"),
            FilterSpec::new().with_min_length(6)
        );
        assert_eq!(
            translate("strings shorter than 10"),
            FilterSpec::new().with_max_length(9)
        );
        assert_eq!(
            translate("shorter than 0"),
            FilterSpec::new().with_max_length(-1)
        );
    }

    #[test]
    fn test_huge_numbers_saturate() {
        let spec = translate("longer than 99999999999999999999999");
        assert_eq!(spec.min_length, Some(i64::MAX));
    }

    #[test]
    fn test_word_count_phrases() {
        assert_eq!(
            translate("single word strings"),
            FilterSpec::new().with_word_count(1)
        );
        assert_eq!(translate("two word phrases").word_count, Some(2));
        assert_eq!(translate("three words please").word_count, Some(3));
    }

    #[test]
    fn test_first_word_count_phrase_wins() {
        assert_eq!(translate("two word or single word").word_count, Some(1));
        assert_eq!(translate("three word or two word").word_count, Some(2));
    }

    #[test]
    fn test_letter_rule() {
        assert_eq!(
            translate("strings that contain the letter z"),
            FilterSpec::new().with_contains_character('z')
        );
        // Needs both "contain" and "letter".
        assert_eq!(translate("the letter z").contains_character, None);
        assert_eq!(translate("Containing LETTER Q").contains_character, Some('q'));
    }

    #[test]
    fn test_first_vowel_rule() {
        assert_eq!(
            translate("strings with their first vowel"),
            FilterSpec::new().with_contains_character('a')
        );
        assert_eq!(
            translate("contain the letter z and the first vowel").contains_character,
            Some('a')
        );
    }

    #[test]
    fn test_explicit_vowel_rule() {
        assert_eq!(translate("with the vowel e").contains_character, Some('e'));
        assert_eq!(translate("some vowel x").contains_character, None);
        // The vowel rule overrides an earlier letter match.
        assert_eq!(
            translate("contains letter z and vowel o").contains_character,
            Some('o')
        );
    }

    #[test]
    fn test_combined_rules() {
        let spec = translate("all single word palindromic strings longer than 2");
        assert_eq!(
            spec,
            FilterSpec::new()
                .with_palindrome(true)
                .with_word_count(1)
                .with_min_length(3)
        );
    }

    #[test]
    fn test_conflicting_lengths_not_validated() {
        let spec = translate("longer than 10 and shorter than 3");
        assert_eq!(spec.min_length, Some(11));
        assert_eq!(spec.max_length, Some(2));
        assert!(spec.has_length_conflict());
    }

    #[test]
    fn test_unrecognized_query_is_empty() {
        assert!(translate("gibberish query").is_empty());
        assert!(translate("").is_empty());
    }

    #[test]
    fn test_non_ascii_digits_ignored() {
        assert_eq!(translate("longer than ٣").min_length, None);
    }
}

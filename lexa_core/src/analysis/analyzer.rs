//! String analysis.
//!
//! Turns a raw string into a [`PropertyRecord`]. Everything except the
//! creation timestamp is a pure function of the input, so analyzing the same
//! string twice yields the same identity and properties.
//!
//! Characters are Unicode scalar values (`char`): `length`, the frequency map
//! and the palindrome check all iterate `str::chars`.

use std::collections::{BTreeMap, HashSet};

use chrono::Utc;

use super::types::{PropertyRecord, StringProperties};
use crate::util::content_hash;

/// Characters that separate words.
const WORD_SEPARATORS: [char; 4] = [' ', '\t', '\n', '\r'];

/// Analyze a string. Total: any input, including the empty string, succeeds.
#[must_use]
pub fn analyze(value: &str) -> PropertyRecord {
    let hash = content_hash(value);

    PropertyRecord {
        id: hash.clone(),
        value: value.to_string(),
        properties: StringProperties {
            length: value.chars().count(),
            is_palindrome: is_palindrome(value),
            unique_characters: unique_characters(value),
            word_count: word_count(value),
            sha256_hash: hash,
            character_frequency_map: character_frequency(value),
        },
        created_at: Utc::now(),
    }
}

/// Case-insensitive palindrome check. Strings of length 0 or 1 qualify.
fn is_palindrome(value: &str) -> bool {
    let lowered: Vec<char> = value.to_lowercase().chars().collect();
    let (mut left, mut right) = (0, lowered.len().saturating_sub(1));

    while left < right {
        if lowered[left] != lowered[right] {
            return false;
        }
        left += 1;
        right -= 1;
    }

    true
}

fn unique_characters(value: &str) -> usize {
    value.chars().collect::<HashSet<_>>().len()
}

fn word_count(value: &str) -> usize {
    value
        .split(WORD_SEPARATORS)
        .filter(|fragment| !fragment.is_empty())
        .count()
}

fn character_frequency(value: &str) -> BTreeMap<char, usize> {
    let mut frequency = BTreeMap::new();
    for ch in value.chars() {
        *frequency.entry(ch).or_insert(0) += 1;
    }
    frequency
}

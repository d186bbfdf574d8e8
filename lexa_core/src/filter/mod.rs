//! Structured filters over analyzed strings.
//!
//! A [`FilterSpec`] is a conjunction of optional predicates. Absent fields
//! impose no constraint, so the default spec matches every record. Inverted
//! length ranges are valid here and simply match nothing; rejecting them is up
//! to whoever builds the spec from user input.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::analysis::PropertyRecord;

/// Optional predicates a record must all satisfy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_palindrome: Option<bool>,
    /// Inclusive lower bound on length.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<i64>,
    /// Inclusive upper bound on length.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_count: Option<i64>,
    /// Matched case-insensitively against the record value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contains_character: Option<char>,
}

impl FilterSpec {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_palindrome(mut self, is_palindrome: bool) -> Self {
        self.is_palindrome = Some(is_palindrome);
        self
    }

    #[must_use]
    pub const fn with_min_length(mut self, min_length: i64) -> Self {
        self.min_length = Some(min_length);
        self
    }

    #[must_use]
    pub const fn with_max_length(mut self, max_length: i64) -> Self {
        self.max_length = Some(max_length);
        self
    }

    #[must_use]
    pub const fn with_word_count(mut self, word_count: i64) -> Self {
        self.word_count = Some(word_count);
        self
    }

    #[must_use]
    pub const fn with_contains_character(mut self, ch: char) -> Self {
        self.contains_character = Some(ch);
        self
    }

    /// True when no predicate is present.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.is_palindrome.is_none()
            && self.min_length.is_none()
            && self.max_length.is_none()
            && self.word_count.is_none()
            && self.contains_character.is_none()
    }

    /// True when both bounds are present and `min_length > max_length`.
    #[must_use]
    pub const fn has_length_conflict(&self) -> bool {
        matches!((self.min_length, self.max_length), (Some(min), Some(max)) if min > max)
    }

    /// Check a record against every present predicate.
    #[must_use]
    pub fn matches(&self, record: &PropertyRecord) -> bool {
        let length = to_i64(record.length());

        if self
            .is_palindrome
            .is_some_and(|wanted| record.is_palindrome() != wanted)
        {
            return false;
        }
        if self.min_length.is_some_and(|min| length < min) {
            return false;
        }
        if self.max_length.is_some_and(|max| length > max) {
            return false;
        }
        if self
            .word_count
            .is_some_and(|count| to_i64(record.word_count()) != count)
        {
            return false;
        }
        self.contains_character
            .is_none_or(|ch| contains_ignore_case(&record.value, ch))
    }

    /// The present predicates as ordered name/value pairs.
    #[must_use]
    pub fn applied(&self) -> AppliedFilters {
        let mut entries = Vec::with_capacity(5);
        if let Some(v) = self.is_palindrome {
            entries.push(("is_palindrome", FilterValue::Bool(v)));
        }
        if let Some(v) = self.min_length {
            entries.push(("min_length", FilterValue::Int(v)));
        }
        if let Some(v) = self.max_length {
            entries.push(("max_length", FilterValue::Int(v)));
        }
        if let Some(v) = self.word_count {
            entries.push(("word_count", FilterValue::Int(v)));
        }
        if let Some(v) = self.contains_character {
            entries.push(("contains_character", FilterValue::Char(v)));
        }
        AppliedFilters(entries)
    }
}

/// Free-function form of [`FilterSpec::matches`].
#[must_use]
pub fn matches(record: &PropertyRecord, spec: &FilterSpec) -> bool {
    spec.matches(record)
}

fn to_i64(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

fn contains_ignore_case(haystack: &str, ch: char) -> bool {
    let needle: String = ch.to_lowercase().collect();
    haystack.to_lowercase().contains(&needle)
}

/// A single applied filter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FilterValue {
    Bool(bool),
    Int(i64),
    Char(char),
}

/// Filters that were in effect for a scan, in a fixed order.
///
/// Serializes as a JSON object whose keys keep that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppliedFilters(Vec<(&'static str, FilterValue)>);

impl AppliedFilters {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, (&'static str, FilterValue)> {
        self.0.iter()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<FilterValue> {
        self.0
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| *value)
    }
}

impl<'a> IntoIterator for &'a AppliedFilters {
    type Item = &'a (&'static str, FilterValue);
    type IntoIter = std::slice::Iter<'a, (&'static str, FilterValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Serialize for AppliedFilters {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, value) in &self.0 {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

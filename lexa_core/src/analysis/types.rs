use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Structural properties derived from a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringProperties {
    /// Number of characters (Unicode scalar values).
    pub length: usize,
    pub is_palindrome: bool,
    /// Number of distinct characters, case-sensitive.
    pub unique_characters: usize,
    pub word_count: usize,
    pub sha256_hash: String,
    /// Occurrences of every character present in the string.
    pub character_frequency_map: BTreeMap<char, usize>,
}

/// An analyzed string as held by the catalog.
///
/// Records are immutable once created; the catalog replaces them whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyRecord {
    /// Hex SHA-256 of `value`, used as the catalog key.
    pub id: String,
    pub value: String,
    pub properties: StringProperties,
    pub created_at: DateTime<Utc>,
}

impl PropertyRecord {
    #[must_use]
    pub const fn length(&self) -> usize {
        self.properties.length
    }

    #[must_use]
    pub const fn word_count(&self) -> usize {
        self.properties.word_count
    }

    #[must_use]
    pub const fn is_palindrome(&self) -> bool {
        self.properties.is_palindrome
    }

    /// Compare everything except the creation timestamp.
    #[must_use]
    pub fn same_analysis(&self, other: &Self) -> bool {
        self.id == other.id && self.value == other.value && self.properties == other.properties
    }
}

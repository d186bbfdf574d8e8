//! Request and response bodies.

use std::collections::BTreeMap;

use lexa_core::{AppliedFilters, PropertyRecord};
use serde::{Deserialize, Serialize};

/// Timestamp format for `created_at`: UTC with a literal `Z`.
pub const CREATED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PropertiesResponse {
    pub length: usize,
    pub is_palindrome: bool,
    pub unique_characters: usize,
    pub word_count: usize,
    pub sha256_hash: String,
    pub character_frequency_map: BTreeMap<char, usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StringResponse {
    pub id: String,
    pub value: String,
    pub properties: PropertiesResponse,
    pub created_at: String,
}

impl From<&PropertyRecord> for StringResponse {
    fn from(record: &PropertyRecord) -> Self {
        let props = &record.properties;
        Self {
            id: record.id.clone(),
            value: record.value.clone(),
            properties: PropertiesResponse {
                length: props.length,
                is_palindrome: props.is_palindrome,
                unique_characters: props.unique_characters,
                word_count: props.word_count,
                sha256_hash: props.sha256_hash.clone(),
                character_frequency_map: props.character_frequency_map.clone(),
            },
            created_at: record.created_at.format(CREATED_AT_FORMAT).to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StringListResponse {
    pub data: Vec<StringResponse>,
    pub count: usize,
    /// Omitted when no filter was given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters_applied: Option<AppliedFilters>,
}

impl StringListResponse {
    #[must_use]
    pub fn new(records: &[PropertyRecord], filters: AppliedFilters) -> Self {
        Self {
            data: records.iter().map(StringResponse::from).collect(),
            count: records.len(),
            filters_applied: (!filters.is_empty()).then_some(filters),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct InterpretedQuery {
    pub original: String,
    pub parsed_filters: AppliedFilters,
}

#[derive(Debug, Serialize)]
pub struct NaturalLanguageResponse {
    pub data: Vec<StringResponse>,
    pub count: usize,
    pub interpreted_query: InterpretedQuery,
}

impl NaturalLanguageResponse {
    #[must_use]
    pub fn new(records: &[PropertyRecord], original: String, parsed: AppliedFilters) -> Self {
        Self {
            data: records.iter().map(StringResponse::from).collect(),
            count: records.len(),
            interpreted_query: InterpretedQuery {
                original,
                parsed_filters: parsed,
            },
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Number of stored strings
    pub strings: usize,
    pub uptime_secs: u64,
}

//! Query-string parameters and their validation.
//!
//! Parameters arrive as raw strings so that a bad value produces the
//! catalog's own error envelope rather than a generic extractor rejection.

use lexa_core::FilterSpec;
use serde::Deserialize;

use crate::error::{Result, ServerError};

/// `GET /strings` filters.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub is_palindrome: Option<String>,
    pub min_length: Option<String>,
    pub max_length: Option<String>,
    pub word_count: Option<String>,
    pub contains_character: Option<String>,
}

impl ListParams {
    /// Validate into a [`FilterSpec`].
    pub fn into_filter_spec(self) -> Result<FilterSpec> {
        Ok(FilterSpec {
            is_palindrome: self.is_palindrome.as_deref().map(parse_bool).transpose()?,
            min_length: parse_count("min_length", self.min_length.as_deref())?,
            max_length: parse_count("max_length", self.max_length.as_deref())?,
            word_count: parse_count("word_count", self.word_count.as_deref())?,
            contains_character: parse_single_char(self.contains_character.as_deref())?,
        })
    }
}

/// `GET /strings/filter-by-natural-language`
#[derive(Debug, Default, Deserialize)]
pub struct NaturalLanguageParams {
    pub query: Option<String>,
}

fn parse_bool(raw: &str) -> Result<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ServerError::bad_request(
            "is_palindrome must be true or false",
        )),
    }
}

/// Non-negative integer parameter.
fn parse_count(name: &str, raw: Option<&str>) -> Result<Option<i64>> {
    let Some(raw) = raw else {
        return Ok(None);
    };

    let value: i64 = raw
        .trim()
        .parse()
        .map_err(|_| ServerError::bad_request(format!("{name} must be an integer")))?;
    if value < 0 {
        return Err(ServerError::bad_request(format!(
            "{name} must be a non-negative integer"
        )));
    }
    Ok(Some(value))
}

/// An empty value counts as absent.
fn parse_single_char(raw: Option<&str>) -> Result<Option<char>> {
    let Some(raw) = raw else {
        return Ok(None);
    };

    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (None, _) => Ok(None),
        (Some(ch), None) => Ok(Some(ch)),
        (Some(_), Some(_)) => Err(ServerError::bad_request(
            "contains_character must be a single character",
        )),
    }
}

//! String catalog endpoints: create, fetch, list, natural-language filter, delete.

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use lexa_core::analyze;
use serde_json::Value;
use tracing::info;

use crate::dto::{NaturalLanguageResponse, StringListResponse, StringResponse};
use crate::error::{Result, ServerError};
use crate::params::{ListParams, NaturalLanguageParams};
use crate::state::AppState;

const NOT_FOUND_MESSAGE: &str = "String does not exist in the system";

fn query_rejected(rejection: &QueryRejection) -> ServerError {
    ServerError::bad_request(format!(
        "Invalid query parameters: {}",
        rejection.body_text()
    ))
}

/// POST /strings
///
/// Body: `{"value": "<string>"}`. Analyzes and stores the string.
pub async fn create(
    State(state): State<Arc<AppState>>,
    body: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<StringResponse>)> {
    let Json(body) = body.map_err(|e| {
        ServerError::bad_request(format!("Invalid request body: {}", e.body_text()))
    })?;

    let value = match body.get("value") {
        None | Some(Value::Null) => {
            return Err(ServerError::bad_request(
                "Invalid request body or missing 'value' field",
            ));
        }
        Some(Value::String(value)) => value.clone(),
        Some(_) => {
            return Err(ServerError::unprocessable(
                "Invalid data type for 'value' (must be string)",
            ));
        }
    };

    if state.catalog.exists(&value) {
        return Err(ServerError::conflict("String already exists in the system"));
    }

    let record = analyze(&value);
    info!(id = %record.id, length = record.properties.length, "Created string");
    let response = StringResponse::from(&record);
    state.catalog.add(record);

    Ok((StatusCode::CREATED, Json(response)))
}

/// GET /strings/:value
pub async fn get_one(
    State(state): State<Arc<AppState>>,
    Path(value): Path<String>,
) -> Result<Json<StringResponse>> {
    let record = state
        .catalog
        .get_by_value(&value)
        .ok_or_else(|| ServerError::not_found(NOT_FOUND_MESSAGE))?;
    Ok(Json(StringResponse::from(&record)))
}

/// GET /strings
///
/// Optional filters: `is_palindrome`, `min_length`, `max_length`,
/// `word_count`, `contains_character`.
pub async fn list(
    State(state): State<Arc<AppState>>,
    params: std::result::Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<StringListResponse>> {
    let Query(params) = params.map_err(|e| query_rejected(&e))?;
    let spec = params.into_filter_spec()?;
    let records = state.catalog.get_filtered(&spec);
    Ok(Json(StringListResponse::new(&records, spec.applied())))
}

/// GET /strings/filter-by-natural-language?query=...
pub async fn filter_by_natural_language(
    State(state): State<Arc<AppState>>,
    params: std::result::Result<Query<NaturalLanguageParams>, QueryRejection>,
) -> Result<Json<NaturalLanguageResponse>> {
    let Query(params) = params.map_err(|e| query_rejected(&e))?;
    let query = params
        .query
        .filter(|q| !q.trim().is_empty())
        .ok_or_else(|| ServerError::bad_request("Query parameter is required"))?;

    let spec = state.translator.translate(&query);
    if spec.has_length_conflict() {
        return Err(ServerError::unprocessable(
            "Query parsed but resulted in conflicting filters",
        ));
    }

    let records = state.catalog.get_filtered(&spec);
    info!(query = %query, matches = records.len(), "Natural language query");
    Ok(Json(NaturalLanguageResponse::new(
        &records,
        query,
        spec.applied(),
    )))
}

/// Value shadowed by the natural-language route's static segment.
const NATURAL_LANGUAGE_SEGMENT: &str = "filter-by-natural-language";

/// DELETE /strings/:value
pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path(value): Path<String>,
) -> Result<StatusCode> {
    remove(&state, &value)
}

/// DELETE /strings/filter-by-natural-language
pub async fn delete_natural_language_segment(
    State(state): State<Arc<AppState>>,
) -> Result<StatusCode> {
    remove(&state, NATURAL_LANGUAGE_SEGMENT)
}

fn remove(state: &AppState, value: &str) -> Result<StatusCode> {
    if !state.catalog.delete(value) {
        return Err(ServerError::not_found(NOT_FOUND_MESSAGE));
    }
    info!("Deleted string");
    Ok(StatusCode::NO_CONTENT)
}

//! Entry endpoints (JSON API)
//!
//! Endpoints:
//! - get_entry: GET /api/lancamentos/:id
//! - search_entries: GET /api/lancamentos
//! - create_entry: POST /api/lancamentos
//! - update_entry: PUT /api/lancamentos/atualizar/:id
//! - update_entry_status: PUT /api/lancamentos/:id/atualiza-status
//! - delete_entry: DELETE /api/lancamentos/:id

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use financas_core::{parse_status, Entry, EntryFilter, EntryType};
use serde::Deserialize;

use super::dto::{EntryDto, StatusUpdateRequest};
use crate::error::ApiError;
use crate::AppState;

/// Query string of the search endpoint
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(rename = "descricao")]
    pub description: Option<String>,
    #[serde(rename = "tipo")]
    pub entry_type: Option<String>,
    #[serde(rename = "mes")]
    pub month: Option<i32>,
    #[serde(rename = "ano")]
    pub year: Option<i32>,
    #[serde(rename = "usuario")]
    pub user: i64,
}

async fn existing_entry(state: &AppState, id: i64) -> Result<Entry, ApiError> {
    state
        .entries
        .find_by_id(id)
        .await?
        .ok_or_else(ApiError::missing_entry)
}

/// Get a single entry
pub async fn get_entry(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<EntryDto>, ApiError> {
    log::debug!("get entry {}", id);
    match state.entries.find_by_id(id).await? {
        Some(entry) => Ok(Json(EntryDto::from(&entry))),
        None => Err(ApiError::NotFound),
    }
}

/// Search the entries of a user
pub async fn search_entries(
    State(state): State<AppState>,
    query: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Vec<Entry>>, ApiError> {
    let Query(params) = query?;
    log::debug!("search entries: {:?}", params);

    if state.users.find_by_id(params.user).await?.is_none() {
        return Err(ApiError::Validation(
            "Could not run the search. User not found for the given id.".to_string(),
        ));
    }

    let entry_type = match params.entry_type.as_deref() {
        Some(name) if !name.is_empty() => Some(name.parse::<EntryType>()?),
        _ => None,
    };

    let filter = EntryFilter {
        description: params.description.filter(|d| !d.is_empty()),
        entry_type,
        month: params.month,
        year: params.year,
        user_id: Some(params.user),
    };

    let entries = state.entries.search(&filter).await?;
    Ok(Json(entries))
}

/// Create a new entry
pub async fn create_entry(
    State(state): State<AppState>,
    body: Result<Json<EntryDto>, JsonRejection>,
) -> Result<(StatusCode, Json<Entry>), ApiError> {
    let Json(dto) = body?;
    let mut entry = dto.into_entry(state.users.as_ref()).await?;
    entry.id = None;

    let created = state.entries.create(entry).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Replace an existing entry; the id in the path wins over the body.
/// An unknown id is reported before any problem with the body.
pub async fn update_entry(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    body: Result<Json<EntryDto>, JsonRejection>,
) -> Result<Json<Entry>, ApiError> {
    let existing = existing_entry(&state, id).await?;
    let Json(dto) = body?;

    let mut entry = dto.into_entry(state.users.as_ref()).await?;
    entry.id = existing.id;

    let updated = state.entries.update(entry).await?;
    Ok(Json(updated))
}

/// Change only the status of an entry
pub async fn update_entry_status(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    body: Result<Json<StatusUpdateRequest>, JsonRejection>,
) -> Result<Json<Entry>, ApiError> {
    let existing = existing_entry(&state, id).await?;

    let requested = body.ok().and_then(|Json(request)| request.status);
    let status = match requested.as_deref().map(parse_status) {
        Some(Ok(status)) => status,
        _ => {
            return Err(ApiError::Validation(
                "Could not update the entry status, send a valid status.".to_string(),
            ))
        }
    };

    let updated = state.entries.update_status(existing, status).await?;
    Ok(Json(updated))
}

/// Delete an entry
pub async fn delete_entry(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let existing = existing_entry(&state, id).await?;
    state.entries.delete(&existing).await?;
    Ok(StatusCode::NO_CONTENT)
}

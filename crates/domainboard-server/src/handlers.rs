use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use tracing::info;

use domainboard_core::{Record, RecordPatch};

use crate::error::ApiError;
use crate::router::AppState;

pub async fn list_records(State(state): State<AppState>) -> Result<Json<Vec<Record>>, ApiError> {
    let records = state.store.list().await?;
    Ok(Json(records))
}

pub async fn create_record(
    State(state): State<AppState>,
    Json(record): Json<Record>,
) -> Result<(StatusCode, Json<Record>), ApiError> {
    let stored = state.store.create(record).await?;
    info!(id = %stored.id, domain = %stored.domain, "Record created");
    Ok((StatusCode::CREATED, Json(stored)))
}

pub async fn update_record(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<RecordPatch>,
) -> Result<Json<Record>, ApiError> {
    let updated = state.store.update(&id, patch).await?;
    info!(%id, "Record updated");
    Ok(Json(updated))
}

pub async fn delete_record(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<&'static str, ApiError> {
    state.store.delete(&id).await?;
    info!(%id, "Record deleted");
    Ok("Domain deleted successfully")
}

pub async fn healthz() -> &'static str {
    "ok"
}

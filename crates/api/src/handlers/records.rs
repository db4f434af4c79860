//! Handlers for records: public catalog reads and admin writes.
//!
//! Every response carries the record's resolved tracks.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use recordshop_core::error::CoreError;
use recordshop_core::types::DbId;
use recordshop_core::validation::{require_non_empty, validate};
use recordshop_db::models::record::{CreateRecord, RecordWithTracks, UpdateRecord};
use recordshop_db::repositories::{CatalogRepo, RecordRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

fn record_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Record",
        id,
    })
}

/// Resolve a freshly written record, treating a concurrent delete as 404.
async fn load_resolved(state: &AppState, id: DbId) -> AppResult<RecordWithTracks> {
    CatalogRepo::find_record(&state.pool, id)
        .await?
        .ok_or_else(|| record_not_found(id))
}

// ---------------------------------------------------------------------------
// Public
// ---------------------------------------------------------------------------

/// GET /api/v1/records
///
/// Full catalog ordered by id.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let records = CatalogRepo::list_records(&state.pool).await?;
    Ok(Json(DataResponse { data: records }))
}

/// GET /api/v1/records/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let record = load_resolved(&state, id).await?;
    Ok(Json(DataResponse { data: record }))
}

// ---------------------------------------------------------------------------
// Admin
// ---------------------------------------------------------------------------

/// POST /api/v1/admin/records
///
/// Unknown or repeated track ids are skipped.
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateRecord>,
) -> AppResult<impl IntoResponse> {
    validate(&input)?;

    let record = RecordRepo::create(&state.pool, &input).await?;
    tracing::info!(record_id = record.id, admin_id = admin.user_id, "Record created");

    let resolved = load_resolved(&state, record.id).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: resolved })))
}

/// PUT /api/v1/admin/records/{id}
///
/// Partial update. A present `trackIds` replaces the whole track list.
pub async fn update(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateRecord>,
) -> AppResult<impl IntoResponse> {
    validate(&input)?;
    if let Some(ref title) = input.title {
        require_non_empty("title", title)?;
    }

    RecordRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| record_not_found(id))?;

    let resolved = load_resolved(&state, id).await?;
    Ok(Json(DataResponse { data: resolved }))
}

/// DELETE /api/v1/admin/records/{id}
///
/// Cart rows and track links go with the record; tracks remain.
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !RecordRepo::delete(&state.pool, id).await? {
        return Err(record_not_found(id));
    }
    tracing::info!(record_id = id, admin_id = admin.user_id, "Record deleted");
    Ok(StatusCode::NO_CONTENT)
}

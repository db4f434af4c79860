//! Admin handlers for browsing tracks with their owners.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use recordshop_core::error::CoreError;
use recordshop_core::types::DbId;
use recordshop_db::models::track::{TrackDetail, TrackWithOwnerRow};
use recordshop_db::repositories::TrackRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

fn to_detail(row: TrackWithOwnerRow) -> TrackDetail {
    let (detail, warning) = row.into_detail();
    if let Some(warning) = warning {
        tracing::warn!(%warning, "Track integrity warning");
    }
    detail
}

/// GET /api/v1/admin/tracks
pub async fn list(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let tracks: Vec<TrackDetail> = TrackRepo::list_with_owner(&state.pool)
        .await?
        .into_iter()
        .map(to_detail)
        .collect();
    Ok(Json(DataResponse { data: tracks }))
}

/// GET /api/v1/admin/tracks/{id}
pub async fn get_by_id(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let row = TrackRepo::find_with_owner(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Track",
            id,
        }))?;
    Ok(Json(DataResponse {
        data: to_detail(row),
    }))
}

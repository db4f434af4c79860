//! Admin reporting handlers.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use recordshop_core::error::CoreError;
use recordshop_core::types::DbId;
use recordshop_db::models::report::EnsembleTrackCount;
use recordshop_db::repositories::{CatalogRepo, EnsembleRepo, TrackRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

async fn ensure_ensemble_exists(state: &AppState, id: DbId) -> AppResult<()> {
    if !EnsembleRepo::exists(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Ensemble",
            id,
        }));
    }
    Ok(())
}

/// GET /api/v1/admin/reports/ensemble-tracks/{ensemble_id}
pub async fn ensemble_track_count(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(ensemble_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_ensemble_exists(&state, ensemble_id).await?;
    let track_count = TrackRepo::count_for_ensemble(&state.pool, ensemble_id).await?;
    Ok(Json(DataResponse {
        data: EnsembleTrackCount {
            ensemble_id,
            track_count,
        },
    }))
}

/// GET /api/v1/admin/reports/ensemble-records/{ensemble_id}
///
/// Records listing at least one of the ensemble's tracks.
pub async fn ensemble_records(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(ensemble_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_ensemble_exists(&state, ensemble_id).await?;
    let records = CatalogRepo::records_for_ensemble(&state.pool, ensemble_id).await?;
    Ok(Json(DataResponse { data: records }))
}

/// GET /api/v1/admin/reports/bestsellers
pub async fn bestsellers(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let records = CatalogRepo::bestsellers(&state.pool).await?;
    Ok(Json(DataResponse { data: records }))
}

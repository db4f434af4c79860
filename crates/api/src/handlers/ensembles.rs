//! Admin handlers for ensembles.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use recordshop_core::error::CoreError;
use recordshop_core::types::DbId;
use recordshop_core::validation::validate;
use recordshop_db::models::ensemble::CreateEnsemble;
use recordshop_db::repositories::EnsembleRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/admin/ensembles
pub async fn list(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let ensembles = EnsembleRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: ensembles }))
}

/// POST /api/v1/admin/ensembles
///
/// Create an ensemble together with its own tracks. A taken name is a 409.
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateEnsemble>,
) -> AppResult<impl IntoResponse> {
    validate(&input)?;

    let created = EnsembleRepo::create_with_tracks(&state.pool, &input).await?;
    tracing::info!(
        ensemble_id = created.ensemble.id,
        track_count = created.tracks.len(),
        admin_id = admin.user_id,
        "Ensemble created"
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

/// DELETE /api/v1/admin/ensembles/{id}
pub async fn delete(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !EnsembleRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Ensemble",
            id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}

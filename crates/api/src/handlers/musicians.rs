//! Admin handlers for musicians.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use recordshop_core::error::CoreError;
use recordshop_core::types::DbId;
use recordshop_core::validation::validate;
use recordshop_db::models::musician::CreateMusician;
use recordshop_db::repositories::{EnsembleRepo, MusicianRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/admin/musicians
pub async fn list(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let musicians = MusicianRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: musicians }))
}

/// POST /api/v1/admin/musicians
///
/// Create a musician together with their personal tracks. The optional
/// `ensembleId` must name an existing ensemble.
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateMusician>,
) -> AppResult<impl IntoResponse> {
    validate(&input)?;

    if let Some(ensemble_id) = input.ensemble_id {
        if !EnsembleRepo::exists(&state.pool, ensemble_id).await? {
            return Err(AppError::Core(CoreError::NotFound {
                entity: "Ensemble",
                id: ensemble_id,
            }));
        }
    }

    let created = MusicianRepo::create_with_tracks(&state.pool, &input).await?;
    tracing::info!(
        musician_id = created.musician.id,
        track_count = created.tracks.len(),
        admin_id = admin.user_id,
        "Musician created"
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

/// DELETE /api/v1/admin/musicians/{id}
///
/// The musician's tracks are deleted with them.
pub async fn delete(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !MusicianRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Musician",
            id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}

//! Handlers for the authenticated user's own profile.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use recordshop_core::error::CoreError;
use recordshop_core::validation::validate;
use recordshop_db::models::user::{UpdateProfile, UserResponse};
use recordshop_db::repositories::UserRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/profile
pub async fn get(State(state): State<AppState>, user: AuthUser) -> AppResult<impl IntoResponse> {
    let row = UserRepo::find_by_id(&state.pool, user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: user.user_id,
        }))?;
    Ok(Json(DataResponse {
        data: UserResponse::from(row),
    }))
}

/// PUT /api/v1/profile
///
/// Replace first name, last name, and city. Username, email, and role are
/// not editable here.
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<UpdateProfile>,
) -> AppResult<impl IntoResponse> {
    validate(&input)?;

    let row = UserRepo::update_profile(&state.pool, user.user_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: user.user_id,
        }))?;
    Ok(Json(DataResponse {
        data: UserResponse::from(row),
    }))
}

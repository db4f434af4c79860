//! Handlers for the authenticated user's cart.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use recordshop_core::cart::{
    classify_quantity_update, quantity_too_large, validate_add_quantity, QuantityUpdate,
};
use recordshop_core::error::CoreError;
use recordshop_core::types::DbId;
use recordshop_core::validation::require_positive_id;
use recordshop_db::models::cart_item::{AddToCart, SetCartQuantity};
use recordshop_db::repositories::{CartRepo, CatalogRepo, RecordRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_in_cart(record_id: DbId) -> AppError {
    AppError::Core(CoreError::NotFoundMessage(format!(
        "Record {record_id} is not in the cart"
    )))
}

async fn ensure_record_exists(state: &AppState, record_id: DbId) -> AppResult<()> {
    if !RecordRepo::exists(&state.pool, record_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Record",
            id: record_id,
        }));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/cart
///
/// Cart rows ordered by record id, each with the full record and its tracks.
pub async fn list(State(state): State<AppState>, user: AuthUser) -> AppResult<impl IntoResponse> {
    let entries = CatalogRepo::cart_for_user(&state.pool, user.user_id).await?;
    Ok(Json(DataResponse { data: entries }))
}

/// POST /api/v1/cart
///
/// Add to the cart, accumulating onto an existing row for the same record.
/// A total above the per-row cap is rejected with 400.
pub async fn add(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<AddToCart>,
) -> AppResult<impl IntoResponse> {
    require_positive_id("recordId", input.record_id)?;
    let quantity = validate_add_quantity(input.quantity)?;
    ensure_record_exists(&state, input.record_id).await?;

    let item = CartRepo::add(&state.pool, user.user_id, input.record_id, quantity)
        .await?
        .ok_or_else(|| AppError::Core(quantity_too_large()))?;
    tracing::debug!(
        user_id = user.user_id,
        record_id = item.record_id,
        quantity = item.quantity,
        "Cart item added"
    );
    Ok(Json(DataResponse { data: item }))
}

/// PUT /api/v1/cart/{record_id}
///
/// Overwrite the quantity of an existing row. Zero removes the row and
/// responds with 204.
pub async fn set_quantity(
    State(state): State<AppState>,
    user: AuthUser,
    Path(record_id): Path<DbId>,
    Json(input): Json<SetCartQuantity>,
) -> AppResult<Response> {
    require_positive_id("recordId", record_id)?;
    match classify_quantity_update(input.quantity)? {
        QuantityUpdate::Remove => {
            if !CartRepo::remove(&state.pool, user.user_id, record_id).await? {
                return Err(not_in_cart(record_id));
            }
            Ok(StatusCode::NO_CONTENT.into_response())
        }
        QuantityUpdate::Replace(quantity) => {
            ensure_record_exists(&state, record_id).await?;
            let item = CartRepo::set_quantity(&state.pool, user.user_id, record_id, quantity)
                .await?
                .ok_or_else(|| not_in_cart(record_id))?;
            Ok(Json(DataResponse { data: item }).into_response())
        }
    }
}

/// DELETE /api/v1/cart/{record_id}
pub async fn remove(
    State(state): State<AppState>,
    user: AuthUser,
    Path(record_id): Path<DbId>,
) -> AppResult<StatusCode> {
    require_positive_id("recordId", record_id)?;
    if !CartRepo::remove(&state.pool, user.user_id, record_id).await? {
        return Err(not_in_cart(record_id));
    }
    Ok(StatusCode::NO_CONTENT)
}

//! Route definitions for records.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::records;
use crate::state::AppState;

/// Public catalog routes mounted at `/records`.
///
/// ```text
/// GET /       -> list
/// GET /{id}   -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(records::list))
        .route("/{id}", get(records::get_by_id))
}

/// Admin routes mounted at `/admin/records`.
///
/// ```text
/// POST   /       -> create
/// PUT    /{id}   -> update
/// DELETE /{id}   -> delete
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", post(records::create))
        .route("/{id}", put(records::update).delete(records::delete))
}

//! Route definitions for the `/admin` tree.
//!
//! Every handler here takes `RequireAdmin`, so non-admins get 403 and
//! anonymous callers 401.

use axum::routing::{delete, get};
use axum::Router;

use super::records;
use crate::handlers::{ensembles, musicians, reports, tracks};
use crate::state::AppState;

/// Routes mounted at `/admin`.
pub fn router() -> Router<AppState> {
    Router::new()
        .nest("/records", records::admin_router())
        .nest("/musicians", musician_routes())
        .nest("/ensembles", ensemble_routes())
        .nest("/tracks", track_routes())
        .nest("/reports", report_routes())
}

/// ```text
/// GET    /       -> list
/// POST   /       -> create
/// DELETE /{id}   -> delete
/// ```
fn musician_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(musicians::list).post(musicians::create))
        .route("/{id}", delete(musicians::delete))
}

/// ```text
/// GET    /       -> list
/// POST   /       -> create
/// DELETE /{id}   -> delete
/// ```
fn ensemble_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(ensembles::list).post(ensembles::create))
        .route("/{id}", delete(ensembles::delete))
}

/// ```text
/// GET /       -> list
/// GET /{id}   -> get_by_id
/// ```
fn track_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(tracks::list))
        .route("/{id}", get(tracks::get_by_id))
}

/// ```text
/// GET /ensemble-tracks/{ensemble_id}    -> ensemble_track_count
/// GET /ensemble-records/{ensemble_id}   -> ensemble_records
/// GET /bestsellers                      -> bestsellers
/// ```
fn report_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/ensemble-tracks/{ensemble_id}",
            get(reports::ensemble_track_count),
        )
        .route(
            "/ensemble-records/{ensemble_id}",
            get(reports::ensemble_records),
        )
        .route("/bestsellers", get(reports::bestsellers))
}

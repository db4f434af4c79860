use axum::routing::{get, put};
use axum::Router;

use crate::handlers::cart;
use crate::state::AppState;

/// Routes mounted at `/cart`.
///
/// ```text
/// GET    /              -> list
/// POST   /              -> add
/// PUT    /{record_id}   -> set_quantity
/// DELETE /{record_id}   -> remove
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::list).post(cart::add))
        .route("/{record_id}", put(cart::set_quantity).delete(cart::remove))
}

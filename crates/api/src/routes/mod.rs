pub mod admin;
pub mod auth;
pub mod cart;
pub mod health;
pub mod profile;
pub mod records;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                                   register (public)
/// /auth/login                                      login (public)
///
/// /profile                                         get, update (requires auth)
///
/// /records                                         list (public)
/// /records/{id}                                    get (public)
///
/// /cart                                            list, add (requires auth)
/// /cart/{record_id}                                set quantity, remove
///
/// /admin/records                                   create (admin only)
/// /admin/records/{id}                              update, delete
/// /admin/musicians                                 list, create
/// /admin/musicians/{id}                            delete
/// /admin/ensembles                                 list, create
/// /admin/ensembles/{id}                            delete
/// /admin/tracks                                    list
/// /admin/tracks/{id}                               get
/// /admin/reports/ensemble-tracks/{ensemble_id}     track count for an ensemble
/// /admin/reports/ensemble-records/{ensemble_id}    records featuring an ensemble
/// /admin/reports/bestsellers                       records by current-year sales
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/profile", profile::router())
        .nest("/records", records::router())
        .nest("/cart", cart::router())
        .nest("/admin", admin::router())
}

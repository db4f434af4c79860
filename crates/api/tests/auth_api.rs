//! HTTP-level integration tests for registration, login, profile, and RBAC.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, get, get_auth, post_json, put_json_auth, TEST_PASSWORD,
};
use recordshop_api::bootstrap::ensure_admin;
use recordshop_api::config::AdminCredentials;
use recordshop_core::roles::{ROLE_ADMIN, ROLE_USER};
use recordshop_db::repositories::UserRepo;
use serde_json::json;
use sqlx::PgPool;

fn registration(username: &str) -> serde_json::Value {
    json!({
        "firstName": "Ella",
        "lastName": "Fitzgerald",
        "username": username,
        "email": format!("{username}@example.com"),
        "password": "scat-singing",
        "city": "Newport News"
    })
}

// ---------------------------------------------------------------------------
// Registration
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_register_creates_customer(pool: PgPool) {
    let app = common::build_test_app(pool.clone());

    let response = post_json(app, "/api/v1/auth/register", registration("ella")).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["data"]["username"], "ella");
    assert_eq!(json["data"]["role"], ROLE_USER);
    assert_eq!(json["data"]["firstName"], "Ella");
    assert!(json["data"].get("passwordHash").is_none());
    assert!(json["data"].get("password_hash").is_none());

    let stored = UserRepo::find_by_username(&pool, "ella").await.unwrap().unwrap();
    assert!(stored.password_hash.starts_with("$argon2id$"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_register_duplicate_username_conflicts(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/auth/register",
        registration("dup"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/auth/register",
        registration("dup"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_register_rejects_invalid_input(pool: PgPool) {
    let mut short_password = registration("shorty");
    short_password["password"] = json!("123");
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/auth/register",
        short_password,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");

    let mut blank_name = registration("blank");
    blank_name["firstName"] = json!("   ");
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/auth/register",
        blank_name,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let mut bad_email = registration("noemail");
    bad_email["email"] = json!("not-an-email");
    let response = post_json(common::build_test_app(pool), "/api/v1/auth/register", bad_email).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_success_returns_usable_token(pool: PgPool) {
    let user = common::create_user(&pool, "loginuser", ROLE_USER).await;

    let body = json!({ "username": "loginuser", "password": TEST_PASSWORD });
    let response = post_json(common::build_test_app(pool.clone()), "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["token"].is_string());
    assert_eq!(json["expiresIn"], 24 * 3600);
    assert_eq!(json["user"]["id"], user.id);

    let token = json["token"].as_str().unwrap();
    let response = get_auth(common::build_test_app(pool), "/api/v1/profile", token).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["username"], "loginuser");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_bad_credentials_return_401(pool: PgPool) {
    common::create_user(&pool, "wrongpw", ROLE_USER).await;

    let body = json!({ "username": "wrongpw", "password": "incorrect" });
    let response = post_json(common::build_test_app(pool.clone()), "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = json!({ "username": "ghost", "password": "whatever" });
    let response = post_json(common::build_test_app(pool), "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Profile
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_profile_requires_token(pool: PgPool) {
    let response = get(common::build_test_app(pool.clone()), "/api/v1/profile").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = get_auth(common::build_test_app(pool), "/api/v1/profile", "garbage").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_profile_update(pool: PgPool) {
    let (_user, token) = common::customer_token(&pool, "mover").await;

    let body = json!({ "firstName": "Moved", "lastName": "Person", "city": "Chicago" });
    let response = put_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/profile",
        body,
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["firstName"], "Moved");
    assert_eq!(json["data"]["city"], "Chicago");

    let body = json!({ "firstName": "", "lastName": "Person" });
    let response = put_json_auth(common::build_test_app(pool), "/api/v1/profile", body, &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// RBAC
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_admin_routes_reject_customers(pool: PgPool) {
    let (_user, token) = common::customer_token(&pool, "customer").await;

    let response = get_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/admin/musicians",
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = get(common::build_test_app(pool.clone()), "/api/v1/admin/musicians").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let admin = common::admin_token(&pool).await;
    let response = get_auth(common::build_test_app(pool), "/api/v1/admin/musicians", &admin).await;
    assert_eq!(response.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Admin bootstrap
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_bootstrap_creates_admin_once(pool: PgPool) {
    let creds = AdminCredentials {
        username: "root".to_string(),
        password: "bootstrap-secret".to_string(),
    };

    ensure_admin(&pool, &creds).await.unwrap();
    ensure_admin(&pool, &creds).await.unwrap();

    let admin = UserRepo::find_by_username(&pool, "root").await.unwrap().unwrap();
    assert_eq!(admin.role, ROLE_ADMIN);
    assert_eq!(admin.email, "root@example.com");
    assert_eq!(admin.first_name, "Admin");

    let body = json!({ "username": "root", "password": "bootstrap-secret" });
    let response = post_json(common::build_test_app(pool), "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["user"]["role"], ROLE_ADMIN);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_bootstrap_leaves_existing_customer_alone(pool: PgPool) {
    common::create_user(&pool, "taken", ROLE_USER).await;
    let creds = AdminCredentials {
        username: "taken".to_string(),
        password: "another-secret".to_string(),
    };

    ensure_admin(&pool, &creds).await.unwrap();

    let user = UserRepo::find_by_username(&pool, "taken").await.unwrap().unwrap();
    assert_eq!(user.role, ROLE_USER);
}

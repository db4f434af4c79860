//! Startup tasks that run once before the server accepts requests.

use recordshop_core::roles::ROLE_ADMIN;
use recordshop_db::models::user::CreateUser;
use recordshop_db::repositories::UserRepo;
use recordshop_db::DbPool;

use crate::auth::password::hash_password;
use crate::config::AdminCredentials;
use crate::error::{AppError, AppResult};

/// Ensure the configured administrator account exists.
///
/// Creates the account if the username is free. An existing account with
/// that username is left untouched; if it is not an admin, a warning is
/// logged because the configured credentials will not grant admin access.
pub async fn ensure_admin(pool: &DbPool, creds: &AdminCredentials) -> AppResult<()> {
    if let Some(existing) = UserRepo::find_by_username(pool, &creds.username).await? {
        if existing.role == ROLE_ADMIN {
            tracing::info!(username = %existing.username, "Admin account already present");
        } else {
            tracing::warn!(
                username = %existing.username,
                role = %existing.role,
                "Configured admin username belongs to a non-admin account; leaving it unchanged"
            );
        }
        return Ok(());
    }

    let password_hash = hash_password(&creds.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let input = CreateUser {
        first_name: "Admin".to_string(),
        last_name: "User".to_string(),
        username: creds.username.clone(),
        email: format!("{}@example.com", creds.username),
        password_hash,
        city: None,
        role: ROLE_ADMIN.to_string(),
    };
    let admin = UserRepo::create(pool, &input).await?;
    tracing::info!(user_id = admin.id, username = %admin.username, "Admin account created");
    Ok(())
}

//! Repository for the `cart_items` table.
//!
//! Quantity rules live in `recordshop_core::cart`; this layer only stores
//! rows that already passed them.

use recordshop_core::cart::MAX_CART_QUANTITY;
use recordshop_core::types::DbId;
use sqlx::PgPool;

use crate::models::cart_item::CartItem;

const COLUMNS: &str = "user_id, record_id, quantity";

/// Provides cart row operations keyed by `(user_id, record_id)`.
pub struct CartRepo;

impl CartRepo {
    /// Add `quantity` of a record to a user's cart.
    ///
    /// Inserts a new row or accumulates onto the existing one in a single
    /// statement, so concurrent adds never lose an increment.
    ///
    /// Returns `None`, leaving the row untouched, when the accumulated
    /// quantity would exceed [`MAX_CART_QUANTITY`].
    pub async fn add(
        pool: &PgPool,
        user_id: DbId,
        record_id: DbId,
        quantity: i32,
    ) -> Result<Option<CartItem>, sqlx::Error> {
        let query = format!(
            "INSERT INTO cart_items (user_id, record_id, quantity) \
             VALUES ($1, $2, $3) \
             ON CONFLICT (user_id, record_id) DO UPDATE \
                SET quantity = cart_items.quantity + EXCLUDED.quantity, \
                    updated_at = NOW() \
                WHERE cart_items.quantity <= $4 - EXCLUDED.quantity \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CartItem>(&query)
            .bind(user_id)
            .bind(record_id)
            .bind(quantity)
            .bind(MAX_CART_QUANTITY)
            .fetch_optional(pool)
            .await
    }

    /// Overwrite the quantity of an existing row.
    ///
    /// Returns `None` if the user has no row for this record; no row is created.
    pub async fn set_quantity(
        pool: &PgPool,
        user_id: DbId,
        record_id: DbId,
        quantity: i32,
    ) -> Result<Option<CartItem>, sqlx::Error> {
        let query = format!(
            "UPDATE cart_items SET quantity = $3, updated_at = NOW() \
             WHERE user_id = $1 AND record_id = $2 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CartItem>(&query)
            .bind(user_id)
            .bind(record_id)
            .bind(quantity)
            .fetch_optional(pool)
            .await
    }

    /// Remove a record from a user's cart. Returns `true` if a row was deleted.
    pub async fn remove(pool: &PgPool, user_id: DbId, record_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM cart_items WHERE user_id = $1 AND record_id = $2")
            .bind(user_id)
            .bind(record_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Find one cart row.
    pub async fn find(
        pool: &PgPool,
        user_id: DbId,
        record_id: DbId,
    ) -> Result<Option<CartItem>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM cart_items WHERE user_id = $1 AND record_id = $2");
        sqlx::query_as::<_, CartItem>(&query)
            .bind(user_id)
            .bind(record_id)
            .fetch_optional(pool)
            .await
    }

    /// All rows for a user, ordered by record id.
    pub async fn list_for_user(pool: &PgPool, user_id: DbId) -> Result<Vec<CartItem>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM cart_items WHERE user_id = $1 ORDER BY record_id");
        sqlx::query_as::<_, CartItem>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }
}

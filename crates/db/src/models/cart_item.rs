//! Cart item model and DTOs.

use recordshop_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::record::RecordWithTracks;

/// A row from the `cart_items` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub user_id: DbId,
    pub record_id: DbId,
    pub quantity: i32,
}

/// A cart row resolved to full record and track detail.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartEntry {
    pub record_id: DbId,
    pub quantity: i32,
    pub record: RecordWithTracks,
}

/// DTO for `POST /cart`. Quantity rules live in `recordshop_core::cart`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCart {
    pub record_id: DbId,
    pub quantity: i32,
}

/// DTO for `PUT /cart/{record_id}`. Zero removes the row.
#[derive(Debug, Clone, Deserialize)]
pub struct SetCartQuantity {
    pub quantity: i32,
}

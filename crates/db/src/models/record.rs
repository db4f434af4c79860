//! Record entity model and DTOs.
//!
//! A record lists tracks through the `record_tracks` junction table. The
//! row itself never stores tracks; [`RecordWithTracks`] is assembled by
//! [`CatalogRepo`](crate::repositories::CatalogRepo).

use chrono::NaiveDate;
use recordshop_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::track::TrackDetail;

/// A row from the `records` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: DbId,
    pub title: String,
    pub label: Option<String>,
    pub wholesale_address: Option<String>,
    pub wholesale_price: f64,
    pub retail_price: f64,
    pub release_date: Option<NaiveDate>,
    pub sold_last_year: i32,
    pub sold_current_year: i32,
    pub stock: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A record with its resolved tracks. `tracks` is always present, possibly empty.
#[derive(Debug, Clone, Serialize)]
pub struct RecordWithTracks {
    #[serde(flatten)]
    pub record: Record,
    pub tracks: Vec<TrackDetail>,
}

/// DTO for creating a record linked to existing tracks.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecord {
    #[validate(custom(function = "recordshop_core::validation::not_blank"))]
    pub title: String,
    pub label: Option<String>,
    pub wholesale_address: Option<String>,
    #[serde(default)]
    #[validate(range(min = 0.0, message = "price cannot be negative"))]
    pub wholesale_price: f64,
    #[serde(default)]
    #[validate(range(min = 0.0, message = "price cannot be negative"))]
    pub retail_price: f64,
    pub release_date: Option<NaiveDate>,
    #[serde(default)]
    #[validate(range(min = 0, message = "stock cannot be negative"))]
    pub stock: i32,
    /// Existing track ids to list on the record. Unknown ids are skipped.
    #[serde(default)]
    pub track_ids: Vec<DbId>,
}

/// DTO for updating a record. All fields optional.
///
/// If `track_ids` is `Some`, the record's track list is replaced.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRecord {
    pub title: Option<String>,
    pub label: Option<String>,
    pub wholesale_address: Option<String>,
    #[validate(range(min = 0.0, message = "price cannot be negative"))]
    pub wholesale_price: Option<f64>,
    #[validate(range(min = 0.0, message = "price cannot be negative"))]
    pub retail_price: Option<f64>,
    pub release_date: Option<NaiveDate>,
    #[validate(range(min = 0, message = "stock cannot be negative"))]
    pub stock: Option<i32>,
    #[validate(range(min = 0, message = "sales count cannot be negative"))]
    pub sold_last_year: Option<i32>,
    #[validate(range(min = 0, message = "sales count cannot be negative"))]
    pub sold_current_year: Option<i32>,
    pub track_ids: Option<Vec<DbId>>,
}

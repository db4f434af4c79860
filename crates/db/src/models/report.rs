//! Report shapes.

use recordshop_core::types::DbId;
use serde::Serialize;

/// Number of tracks owned by one ensemble.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnsembleTrackCount {
    pub ensemble_id: DbId,
    pub track_count: i64,
}

//! Musician entity model and DTOs.

use recordshop_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::track::{NewTrack, Track};

/// A row from the `musicians` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Musician {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    /// Instrument or function, e.g. "drummer" or "conductor".
    pub role: Option<String>,
    pub ensemble_id: Option<DbId>,
    pub created_at: Timestamp,
}

/// A musician joined with the name of the ensemble they belong to.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MusicianWithEnsemble {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub musician: Musician,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ensemble_name: Option<String>,
}

/// DTO for creating a musician together with their personal tracks.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateMusician {
    #[validate(custom(function = "recordshop_core::validation::not_blank"))]
    pub first_name: String,
    #[validate(custom(function = "recordshop_core::validation::not_blank"))]
    pub last_name: String,
    pub role: Option<String>,
    pub ensemble_id: Option<DbId>,
    #[serde(default)]
    #[validate(nested)]
    pub tracks: Vec<NewTrack>,
}

/// A musician as returned after creation, with the tracks created alongside them.
#[derive(Debug, Clone, Serialize)]
pub struct MusicianWithTracks {
    #[serde(flatten)]
    pub musician: Musician,
    pub tracks: Vec<Track>,
}

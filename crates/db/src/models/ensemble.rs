//! Ensemble entity model and DTOs.

use recordshop_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::track::{NewTrack, Track};

/// A row from the `ensembles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ensemble {
    pub id: DbId,
    pub name: String,
    /// Kind of ensemble, e.g. "quintet" or "orchestra".
    #[serde(rename = "type")]
    pub ensemble_type: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating an ensemble together with its own tracks.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateEnsemble {
    #[validate(custom(function = "recordshop_core::validation::not_blank"))]
    pub name: String,
    #[serde(rename = "type")]
    pub ensemble_type: Option<String>,
    #[serde(default)]
    #[validate(nested)]
    pub tracks: Vec<NewTrack>,
}

/// An ensemble as returned after creation, with the tracks created alongside it.
#[derive(Debug, Clone, Serialize)]
pub struct EnsembleWithTracks {
    #[serde(flatten)]
    pub ensemble: Ensemble,
    pub tracks: Vec<Track>,
}

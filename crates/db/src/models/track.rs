//! Track entity model and DTOs.

use recordshop_core::catalog::{
    ensemble_display_name, musician_display_name, IntegrityWarning, TrackOwner,
};
use recordshop_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `tracks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    pub id: DbId,
    pub name: String,
    /// Length in seconds.
    pub duration: i32,
    pub musician_id: Option<DbId>,
    pub ensemble_id: Option<DbId>,
}

/// A track row LEFT JOINed with its owning musician and ensemble.
///
/// Owner columns are `None` when the reference is unset or the owner row
/// is missing.
#[derive(Debug, Clone, FromRow)]
pub struct TrackWithOwnerRow {
    pub id: DbId,
    pub name: String,
    pub duration: i32,
    pub musician_id: Option<DbId>,
    pub ensemble_id: Option<DbId>,
    pub musician_first_name: Option<String>,
    pub musician_last_name: Option<String>,
    pub ensemble_name: Option<String>,
}

/// A track as returned inside catalog responses, with its owner's display name.
///
/// Only the name for the reference that is actually set is present.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackDetail {
    pub id: DbId,
    pub name: String,
    pub duration: i32,
    pub musician_id: Option<DbId>,
    pub ensemble_id: Option<DbId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub musician_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ensemble_name: Option<String>,
}

impl TrackWithOwnerRow {
    /// Resolve the owner display name.
    ///
    /// Returns a warning alongside the detail when the owner row was absent
    /// or the row breaks the single-owner rule.
    pub fn into_detail(self) -> (TrackDetail, Option<IntegrityWarning>) {
        let mut warning = None;
        let (musician_name, ensemble_name) =
            match TrackOwner::from_refs(self.musician_id, self.ensemble_id) {
                Some(TrackOwner::Musician(_)) => {
                    if self.musician_first_name.is_none() && self.musician_last_name.is_none() {
                        warning = Some(IntegrityWarning::MissingOwner { track_id: self.id });
                    }
                    let name = musician_display_name(
                        self.musician_first_name.as_deref(),
                        self.musician_last_name.as_deref(),
                    );
                    (Some(name), None)
                }
                Some(TrackOwner::Ensemble(_)) => {
                    if self.ensemble_name.is_none() {
                        warning = Some(IntegrityWarning::MissingOwner { track_id: self.id });
                    }
                    (None, Some(ensemble_display_name(self.ensemble_name.as_deref())))
                }
                None => {
                    warning = Some(IntegrityWarning::AmbiguousOwner { track_id: self.id });
                    (None, None)
                }
            };

        let detail = TrackDetail {
            id: self.id,
            name: self.name,
            duration: self.duration,
            musician_id: self.musician_id,
            ensemble_id: self.ensemble_id,
            musician_name,
            ensemble_name,
        };
        (detail, warning)
    }
}

/// A track created together with its owning musician or ensemble.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewTrack {
    #[validate(custom(function = "recordshop_core::validation::not_blank"))]
    pub name: String,
    /// Length in seconds; must be positive.
    #[validate(range(min = 1, message = "duration must be a positive number of seconds"))]
    pub duration: i32,
}

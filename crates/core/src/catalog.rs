//! Catalog assembly: owner display names and track-to-record attachment.
//!
//! The database layer fetches association pairs and track rows in two
//! batched queries. The functions here turn those flat rows into the
//! nested record -> tracks tree without any further I/O.

use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::types::DbId;

/// Placeholder shown when a musician-owned track has no resolvable name.
pub const UNKNOWN_MUSICIAN: &str = "Unknown Musician";

/// Placeholder shown when an ensemble-owned track has no resolvable name.
pub const UNKNOWN_ENSEMBLE: &str = "Unknown Ensemble";

/// Display name for a musician-owned track.
///
/// Joins first and last name with a single space and trims the result.
/// Falls back to [`UNKNOWN_MUSICIAN`] when the musician row was missing
/// from the join or both names are blank.
pub fn musician_display_name(first_name: Option<&str>, last_name: Option<&str>) -> String {
    let joined = format!(
        "{} {}",
        first_name.unwrap_or_default(),
        last_name.unwrap_or_default()
    );
    let trimmed = joined.trim();
    if trimmed.is_empty() {
        UNKNOWN_MUSICIAN.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Display name for an ensemble-owned track.
///
/// Uses the stored ensemble name, or [`UNKNOWN_ENSEMBLE`] when the row was
/// missing from the join or the name is blank.
pub fn ensemble_display_name(name: Option<&str>) -> String {
    match name {
        Some(n) if !n.trim().is_empty() => n.to_string(),
        _ => UNKNOWN_ENSEMBLE.to_string(),
    }
}

/// The single owner of a track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackOwner {
    Musician(DbId),
    Ensemble(DbId),
}

impl TrackOwner {
    /// Resolve ownership from the two nullable reference columns.
    ///
    /// Returns `None` unless exactly one reference is set.
    pub fn from_refs(musician_id: Option<DbId>, ensemble_id: Option<DbId>) -> Option<Self> {
        match (musician_id, ensemble_id) {
            (Some(id), None) => Some(Self::Musician(id)),
            (None, Some(id)) => Some(Self::Ensemble(id)),
            _ => None,
        }
    }

    pub fn musician_id(self) -> Option<DbId> {
        match self {
            Self::Musician(id) => Some(id),
            Self::Ensemble(_) => None,
        }
    }

    pub fn ensemble_id(self) -> Option<DbId> {
        match self {
            Self::Ensemble(id) => Some(id),
            Self::Musician(_) => None,
        }
    }
}

/// A referenced sub-entity that could not be resolved.
///
/// Warnings never fail a read; the caller logs them and returns whatever
/// was resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntegrityWarning {
    /// A `record_tracks` row points at a track that was not returned.
    MissingTrack { record_id: DbId, track_id: DbId },
    /// The track's owner row was absent from the join.
    MissingOwner { track_id: DbId },
    /// The track has both or neither owner references set.
    AmbiguousOwner { track_id: DbId },
    /// A cart row references a record that no longer exists.
    MissingRecord { record_id: DbId },
}

impl fmt::Display for IntegrityWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingTrack {
                record_id,
                track_id,
            } => write!(f, "track {track_id} linked to record {record_id} not found"),
            Self::MissingOwner { track_id } => {
                write!(f, "owner of track {track_id} not found")
            }
            Self::AmbiguousOwner { track_id } => write!(
                f,
                "track {track_id} must reference exactly one musician or ensemble"
            ),
            Self::MissingRecord { record_id } => write!(f, "record {record_id} not found"),
        }
    }
}

/// Record-to-track association pairs grouped by record.
#[derive(Debug, Default)]
pub struct TrackLinks {
    by_record: HashMap<DbId, Vec<DbId>>,
    track_ids: Vec<DbId>,
}

impl TrackLinks {
    /// Group `(record_id, track_id)` pairs.
    ///
    /// Per-record order follows the input order. The distinct track id list
    /// keeps first-seen order.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (DbId, DbId)>,
    {
        let mut by_record: HashMap<DbId, Vec<DbId>> = HashMap::new();
        let mut track_ids = Vec::new();
        let mut seen = HashSet::new();

        for (record_id, track_id) in pairs {
            by_record.entry(record_id).or_default().push(track_id);
            if seen.insert(track_id) {
                track_ids.push(track_id);
            }
        }

        Self {
            by_record,
            track_ids,
        }
    }

    /// Distinct track ids referenced by any record.
    pub fn track_ids(&self) -> &[DbId] {
        &self.track_ids
    }

    /// Track ids linked to one record (empty when it has none).
    pub fn for_record(&self, record_id: DbId) -> &[DbId] {
        self.by_record
            .get(&record_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.track_ids.is_empty()
    }
}

/// Output of [`attach_tracks`].
#[derive(Debug)]
pub struct Assembly<R, T> {
    /// Every input record, in input order, with its resolved tracks.
    pub entries: Vec<(R, Vec<T>)>,
    pub warnings: Vec<IntegrityWarning>,
}

/// Attach resolved tracks to every record that links them.
///
/// Records keep their input order and none are dropped; a record without
/// links gets an empty list. A link whose track is absent from `tracks`
/// is skipped and reported as [`IntegrityWarning::MissingTrack`].
pub fn attach_tracks<R, T, F>(
    records: Vec<R>,
    record_id: F,
    links: &TrackLinks,
    tracks: &HashMap<DbId, T>,
) -> Assembly<R, T>
where
    T: Clone,
    F: Fn(&R) -> DbId,
{
    let mut warnings = Vec::new();
    let entries = records
        .into_iter()
        .map(|record| {
            let id = record_id(&record);
            let resolved = links
                .for_record(id)
                .iter()
                .filter_map(|track_id| match tracks.get(track_id) {
                    Some(track) => Some(track.clone()),
                    None => {
                        warnings.push(IntegrityWarning::MissingTrack {
                            record_id: id,
                            track_id: *track_id,
                        });
                        None
                    }
                })
                .collect();
            (record, resolved)
        })
        .collect();

    Assembly { entries, warnings }
}

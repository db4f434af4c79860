//! Repository for the `tracks` table.

use recordshop_core::catalog::TrackOwner;
use recordshop_core::types::DbId;
use sqlx::PgPool;

use crate::models::track::{NewTrack, Track, TrackWithOwnerRow};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, duration, musician_id, ensemble_id";

/// Track columns plus owner name columns, for queries joining
/// `musicians m` and `ensembles e`.
const OWNER_COLUMNS: &str = "t.id, t.name, t.duration, t.musician_id, t.ensemble_id, \
    m.first_name AS musician_first_name, m.last_name AS musician_last_name, \
    e.name AS ensemble_name";

/// Left joins from `tracks t` to both possible owners.
const OWNER_JOINS: &str = "FROM tracks t \
    LEFT JOIN musicians m ON m.id = t.musician_id \
    LEFT JOIN ensembles e ON e.id = t.ensemble_id";

/// Provides read access to tracks and the owned-track insert used by
/// musician and ensemble creation.
pub struct TrackRepo;

impl TrackRepo {
    /// Find a bare track row by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Track>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tracks WHERE id = $1");
        sqlx::query_as::<_, Track>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a track joined with its owner.
    pub async fn find_with_owner(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<TrackWithOwnerRow>, sqlx::Error> {
        let query = format!("SELECT {OWNER_COLUMNS} {OWNER_JOINS} WHERE t.id = $1");
        sqlx::query_as::<_, TrackWithOwnerRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every track joined with its owner, ordered by id.
    pub async fn list_with_owner(pool: &PgPool) -> Result<Vec<TrackWithOwnerRow>, sqlx::Error> {
        let query = format!("SELECT {OWNER_COLUMNS} {OWNER_JOINS} ORDER BY t.id");
        sqlx::query_as::<_, TrackWithOwnerRow>(&query)
            .fetch_all(pool)
            .await
    }

    /// Fetch a batch of tracks joined with their owners in one round-trip.
    ///
    /// Ids that match no row are simply absent from the result.
    pub async fn find_many_with_owner(
        pool: &PgPool,
        ids: &[DbId],
    ) -> Result<Vec<TrackWithOwnerRow>, sqlx::Error> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let query = format!("SELECT {OWNER_COLUMNS} {OWNER_JOINS} WHERE t.id = ANY($1)");
        sqlx::query_as::<_, TrackWithOwnerRow>(&query)
            .bind(ids)
            .fetch_all(pool)
            .await
    }

    /// Count the tracks owned by an ensemble.
    pub async fn count_for_ensemble(pool: &PgPool, ensemble_id: DbId) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM tracks WHERE ensemble_id = $1")
            .bind(ensemble_id)
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    /// Insert tracks owned by `owner` within an existing transaction.
    ///
    /// Exactly one of `musician_id` / `ensemble_id` is written, matching the
    /// `ck_tracks_single_owner` constraint.
    pub(crate) async fn insert_owned_inner(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        owner: TrackOwner,
        tracks: &[NewTrack],
    ) -> Result<Vec<Track>, sqlx::Error> {
        let query = format!(
            "INSERT INTO tracks (name, duration, musician_id, ensemble_id) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );

        let mut created = Vec::with_capacity(tracks.len());
        for track in tracks {
            let row = sqlx::query_as::<_, Track>(&query)
                .bind(track.name.trim())
                .bind(track.duration)
                .bind(owner.musician_id())
                .bind(owner.ensemble_id())
                .fetch_one(&mut **tx)
                .await?;
            created.push(row);
        }
        Ok(created)
    }
}

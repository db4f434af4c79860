//! Repository for the `musicians` table.

use recordshop_core::catalog::TrackOwner;
use recordshop_core::types::DbId;
use sqlx::PgPool;

use crate::models::musician::{CreateMusician, Musician, MusicianWithEnsemble, MusicianWithTracks};
use crate::repositories::TrackRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, first_name, last_name, role, ensemble_id, created_at";

/// Provides CRUD operations for musicians.
pub struct MusicianRepo;

impl MusicianRepo {
    /// Insert a musician and their personal tracks in one transaction.
    ///
    /// An `ensemble_id` naming no ensemble fails on the foreign key and
    /// nothing is written.
    pub async fn create_with_tracks(
        pool: &PgPool,
        input: &CreateMusician,
    ) -> Result<MusicianWithTracks, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO musicians (first_name, last_name, role, ensemble_id) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        let musician = sqlx::query_as::<_, Musician>(&query)
            .bind(input.first_name.trim())
            .bind(input.last_name.trim())
            .bind(&input.role)
            .bind(input.ensemble_id)
            .fetch_one(&mut *tx)
            .await?;

        let tracks =
            TrackRepo::insert_owned_inner(&mut tx, TrackOwner::Musician(musician.id), &input.tracks)
                .await?;

        tx.commit().await?;
        Ok(MusicianWithTracks { musician, tracks })
    }

    /// Find a musician by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Musician>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM musicians WHERE id = $1");
        sqlx::query_as::<_, Musician>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all musicians with their ensemble name, ordered by last then first name.
    pub async fn list(pool: &PgPool) -> Result<Vec<MusicianWithEnsemble>, sqlx::Error> {
        sqlx::query_as::<_, MusicianWithEnsemble>(
            "SELECT m.id, m.first_name, m.last_name, m.role, m.ensemble_id, m.created_at, \
                    e.name AS ensemble_name \
             FROM musicians m \
             LEFT JOIN ensembles e ON e.id = m.ensemble_id \
             ORDER BY m.last_name, m.first_name, m.id",
        )
        .fetch_all(pool)
        .await
    }

    /// Delete a musician. Their tracks, and the record links of those
    /// tracks, are deleted by cascade.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM musicians WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

//! Repository for the `ensembles` table.

use recordshop_core::catalog::TrackOwner;
use recordshop_core::types::DbId;
use sqlx::PgPool;

use crate::models::ensemble::{CreateEnsemble, Ensemble, EnsembleWithTracks};
use crate::repositories::TrackRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, ensemble_type, created_at";

/// Provides CRUD operations for ensembles.
pub struct EnsembleRepo;

impl EnsembleRepo {
    /// Insert an ensemble and its own tracks in one transaction.
    ///
    /// A duplicate name fails on `uq_ensembles_name` and nothing is written.
    pub async fn create_with_tracks(
        pool: &PgPool,
        input: &CreateEnsemble,
    ) -> Result<EnsembleWithTracks, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO ensembles (name, ensemble_type) \
             VALUES ($1, $2) \
             RETURNING {COLUMNS}"
        );
        let ensemble = sqlx::query_as::<_, Ensemble>(&query)
            .bind(input.name.trim())
            .bind(&input.ensemble_type)
            .fetch_one(&mut *tx)
            .await?;

        let tracks =
            TrackRepo::insert_owned_inner(&mut tx, TrackOwner::Ensemble(ensemble.id), &input.tracks)
                .await?;

        tx.commit().await?;
        Ok(EnsembleWithTracks { ensemble, tracks })
    }

    /// Whether an ensemble with this ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM ensembles WHERE id = $1)")
                .bind(id)
                .fetch_one(pool)
                .await?;
        Ok(exists)
    }

    /// List all ensembles ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Ensemble>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM ensembles ORDER BY name, id");
        sqlx::query_as::<_, Ensemble>(&query).fetch_all(pool).await
    }

    /// Delete an ensemble. Its tracks are deleted by cascade and its
    /// musicians lose their membership.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM ensembles WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

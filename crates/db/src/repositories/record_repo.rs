//! Repository for the `records` and `record_tracks` tables.

use std::collections::HashSet;

use recordshop_core::types::DbId;
use sqlx::PgPool;

use crate::models::record::{CreateRecord, Record, UpdateRecord};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, label, wholesale_address, wholesale_price, retail_price, \
    release_date, sold_last_year, sold_current_year, stock, created_at, updated_at";

/// Provides CRUD operations for records and their track links.
pub struct RecordRepo;

impl RecordRepo {
    /// Insert a record and link it to existing tracks in one transaction.
    ///
    /// Sales counters start at zero. Track ids that name no track are
    /// skipped with a warning; duplicate ids are linked once.
    pub async fn create(pool: &PgPool, input: &CreateRecord) -> Result<Record, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO records \
                (title, label, wholesale_address, wholesale_price, retail_price, release_date, stock) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        let record = sqlx::query_as::<_, Record>(&query)
            .bind(input.title.trim())
            .bind(&input.label)
            .bind(&input.wholesale_address)
            .bind(input.wholesale_price)
            .bind(input.retail_price)
            .bind(input.release_date)
            .bind(input.stock)
            .fetch_one(&mut *tx)
            .await?;

        Self::link_tracks_inner(&mut tx, record.id, &input.track_ids).await?;

        tx.commit().await?;
        Ok(record)
    }

    /// Find a record by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Record>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM records WHERE id = $1");
        sqlx::query_as::<_, Record>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch a batch of records ordered by id. Unknown ids are absent from the result.
    pub async fn find_many(pool: &PgPool, ids: &[DbId]) -> Result<Vec<Record>, sqlx::Error> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let query = format!("SELECT {COLUMNS} FROM records WHERE id = ANY($1) ORDER BY id");
        sqlx::query_as::<_, Record>(&query)
            .bind(ids)
            .fetch_all(pool)
            .await
    }

    /// Whether a record with this ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM records WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await?;
        Ok(exists)
    }

    /// List all records in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Record>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM records ORDER BY id");
        sqlx::query_as::<_, Record>(&query).fetch_all(pool).await
    }

    /// List records by current-year sales, best first. Ties keep insertion order.
    pub async fn list_bestsellers(pool: &PgPool) -> Result<Vec<Record>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM records ORDER BY sold_current_year DESC, id ASC");
        sqlx::query_as::<_, Record>(&query).fetch_all(pool).await
    }

    /// Distinct ids of records listing at least one track owned by the ensemble.
    pub async fn ids_for_ensemble(
        pool: &PgPool,
        ensemble_id: DbId,
    ) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT DISTINCT rt.record_id \
             FROM record_tracks rt \
             JOIN tracks t ON t.id = rt.track_id \
             WHERE t.ensemble_id = $1 \
             ORDER BY rt.record_id",
        )
        .bind(ensemble_id)
        .fetch_all(pool)
        .await
    }

    /// All `(record_id, track_id)` links for a batch of records in one round-trip.
    ///
    /// Ordered by record, then track id.
    pub async fn track_links(
        pool: &PgPool,
        record_ids: &[DbId],
    ) -> Result<Vec<(DbId, DbId)>, sqlx::Error> {
        if record_ids.is_empty() {
            return Ok(Vec::new());
        }
        sqlx::query_as(
            "SELECT record_id, track_id FROM record_tracks \
             WHERE record_id = ANY($1) \
             ORDER BY record_id, track_id",
        )
        .bind(record_ids)
        .fetch_all(pool)
        .await
    }

    /// Update a record. Only non-`None` fields are applied.
    ///
    /// If `track_ids` is `Some`, replaces all track links in the same
    /// transaction. Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateRecord,
    ) -> Result<Option<Record>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE records SET \
                title = COALESCE($2, title), \
                label = COALESCE($3, label), \
                wholesale_address = COALESCE($4, wholesale_address), \
                wholesale_price = COALESCE($5, wholesale_price), \
                retail_price = COALESCE($6, retail_price), \
                release_date = COALESCE($7, release_date), \
                stock = COALESCE($8, stock), \
                sold_last_year = COALESCE($9, sold_last_year), \
                sold_current_year = COALESCE($10, sold_current_year), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let record = sqlx::query_as::<_, Record>(&query)
            .bind(id)
            .bind(input.title.as_deref().map(str::trim))
            .bind(&input.label)
            .bind(&input.wholesale_address)
            .bind(input.wholesale_price)
            .bind(input.retail_price)
            .bind(input.release_date)
            .bind(input.stock)
            .bind(input.sold_last_year)
            .bind(input.sold_current_year)
            .fetch_optional(&mut *tx)
            .await?;

        if let Some(ref record) = record {
            if let Some(ref track_ids) = input.track_ids {
                sqlx::query("DELETE FROM record_tracks WHERE record_id = $1")
                    .bind(record.id)
                    .execute(&mut *tx)
                    .await?;
                Self::link_tracks_inner(&mut tx, record.id, track_ids).await?;
            }
        }

        tx.commit().await?;
        Ok(record)
    }

    /// Delete a record. Cart rows and track links go with it; tracks stay.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM records WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Internal helpers
    // -----------------------------------------------------------------------

    /// Link a record to the existing tracks among `track_ids` within a transaction.
    ///
    /// Returns the number of links written.
    async fn link_tracks_inner(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        record_id: DbId,
        track_ids: &[DbId],
    ) -> Result<u64, sqlx::Error> {
        if track_ids.is_empty() {
            return Ok(0);
        }

        let existing: Vec<DbId> = sqlx::query_scalar("SELECT id FROM tracks WHERE id = ANY($1)")
            .bind(track_ids)
            .fetch_all(&mut **tx)
            .await?;

        let existing_set: HashSet<DbId> = existing.iter().copied().collect();
        let mut reported = HashSet::new();
        for &track_id in track_ids {
            if !existing_set.contains(&track_id) && reported.insert(track_id) {
                tracing::warn!(record_id, track_id, "Track not found, skipping link");
            }
        }

        if existing.is_empty() {
            return Ok(0);
        }

        let result = sqlx::query(
            "INSERT INTO record_tracks (record_id, track_id) \
             SELECT $1, UNNEST($2::BIGINT[]) \
             ON CONFLICT DO NOTHING",
        )
        .bind(record_id)
        .bind(&existing)
        .execute(&mut **tx)
        .await?;

        Ok(result.rows_affected())
    }
}

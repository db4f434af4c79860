//! Catalog aggregation: records resolved to their tracks and owner names.
//!
//! Every read that returns records with tracks goes through
//! [`CatalogRepo::resolve_tracks`], which batches the association and
//! track lookups so the number of queries does not grow with the number
//! of records.

use std::collections::HashMap;

use recordshop_core::catalog::{attach_tracks, IntegrityWarning, TrackLinks};
use recordshop_core::types::DbId;
use sqlx::PgPool;

use crate::models::cart_item::CartEntry;
use crate::models::record::{Record, RecordWithTracks};
use crate::models::track::TrackDetail;
use crate::repositories::{CartRepo, RecordRepo, TrackRepo};

/// Read-side aggregation over records, tracks, and carts.
pub struct CatalogRepo;

impl CatalogRepo {
    /// Attach resolved tracks to each record.
    ///
    /// Output order matches input order and every record is present, with
    /// an empty track list when it links none. Runs at most two queries;
    /// none for empty input. Dangling links are logged and skipped.
    pub async fn resolve_tracks(
        pool: &PgPool,
        records: Vec<Record>,
    ) -> Result<Vec<RecordWithTracks>, sqlx::Error> {
        if records.is_empty() {
            return Ok(Vec::new());
        }

        let record_ids: Vec<DbId> = records.iter().map(|r| r.id).collect();
        let links = TrackLinks::from_pairs(RecordRepo::track_links(pool, &record_ids).await?);

        let mut tracks: HashMap<DbId, TrackDetail> = HashMap::new();
        if !links.is_empty() {
            let rows = TrackRepo::find_many_with_owner(pool, links.track_ids()).await?;
            for row in rows {
                let (detail, warning) = row.into_detail();
                if let Some(warning) = warning {
                    log_warning(&warning);
                }
                tracks.insert(detail.id, detail);
            }
        }

        let assembly = attach_tracks(records, |r| r.id, &links, &tracks);
        for warning in &assembly.warnings {
            log_warning(warning);
        }

        Ok(assembly
            .entries
            .into_iter()
            .map(|(record, tracks)| RecordWithTracks { record, tracks })
            .collect())
    }

    /// Full catalog ordered by record id.
    pub async fn list_records(pool: &PgPool) -> Result<Vec<RecordWithTracks>, sqlx::Error> {
        let records = RecordRepo::list(pool).await?;
        Self::resolve_tracks(pool, records).await
    }

    /// One record with its tracks, or `None` if it does not exist.
    pub async fn find_record(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<RecordWithTracks>, sqlx::Error> {
        let Some(record) = RecordRepo::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        Ok(Self::resolve_tracks(pool, vec![record]).await?.pop())
    }

    /// Records ranked by current-year sales, best first.
    pub async fn bestsellers(pool: &PgPool) -> Result<Vec<RecordWithTracks>, sqlx::Error> {
        let records = RecordRepo::list_bestsellers(pool).await?;
        Self::resolve_tracks(pool, records).await
    }

    /// Records listing at least one track of the ensemble, ordered by id.
    pub async fn records_for_ensemble(
        pool: &PgPool,
        ensemble_id: DbId,
    ) -> Result<Vec<RecordWithTracks>, sqlx::Error> {
        let ids = RecordRepo::ids_for_ensemble(pool, ensemble_id).await?;
        let records = RecordRepo::find_many(pool, &ids).await?;
        Self::resolve_tracks(pool, records).await
    }

    /// A user's cart with every record resolved, ordered by record id.
    ///
    /// Rows whose record disappeared between the two reads are dropped.
    pub async fn cart_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<CartEntry>, sqlx::Error> {
        let items = CartRepo::list_for_user(pool, user_id).await?;
        if items.is_empty() {
            return Ok(Vec::new());
        }

        let record_ids: Vec<DbId> = items.iter().map(|i| i.record_id).collect();
        let records = RecordRepo::find_many(pool, &record_ids).await?;
        let mut resolved: HashMap<DbId, RecordWithTracks> = Self::resolve_tracks(pool, records)
            .await?
            .into_iter()
            .map(|r| (r.record.id, r))
            .collect();

        let mut entries = Vec::with_capacity(items.len());
        for item in items {
            match resolved.remove(&item.record_id) {
                Some(record) => entries.push(CartEntry {
                    record_id: item.record_id,
                    quantity: item.quantity,
                    record,
                }),
                None => log_warning(&IntegrityWarning::MissingRecord {
                    record_id: item.record_id,
                }),
            }
        }
        Ok(entries)
    }
}

fn log_warning(warning: &IntegrityWarning) {
    tracing::warn!(%warning, "Catalog integrity warning");
}

//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. Multi-statement writes open a
//! transaction and only commit once every statement succeeded; dropping
//! the transaction on an early `?` return rolls it back.

pub mod cart_repo;
pub mod catalog_repo;
pub mod ensemble_repo;
pub mod musician_repo;
pub mod record_repo;
pub mod track_repo;
pub mod user_repo;

pub use cart_repo::CartRepo;
pub use catalog_repo::CatalogRepo;
pub use ensemble_repo::EnsembleRepo;
pub use musician_repo::MusicianRepo;
pub use record_repo::RecordRepo;
pub use track_repo::TrackRepo;
pub use user_repo::UserRepo;

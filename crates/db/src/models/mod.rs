//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - `Deserialize` + `Validate` DTOs for inserts and updates
//! - Serialized response shapes where the row alone is not enough
//!
//! Wire format is camelCase throughout.

pub mod cart_item;
pub mod ensemble;
pub mod musician;
pub mod record;
pub mod report;
pub mod track;
pub mod user;

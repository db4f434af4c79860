//! Domain types and pure logic for the record store.
//!
//! Nothing in this crate touches the database. The catalog assembly,
//! cart quantity rules and input validation live here so they can be
//! unit-tested without a running PostgreSQL instance.

pub mod cart;
pub mod catalog;
pub mod error;
pub mod roles;
pub mod types;
pub mod validation;

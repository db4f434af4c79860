pub mod auth;
pub mod cart;
pub mod ensembles;
pub mod musicians;
pub mod profile;
pub mod records;
pub mod reports;
pub mod tracks;

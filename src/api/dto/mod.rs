//! Data Transfer Objects for requests and responses.
//!
//! DTOs use Serde for (de)serialization and validator for input validation.

pub mod health;
pub mod shorten;

//! Data Transfer Objects for API requests and responses.
//!
//! DTOs use Serde for JSON and validator for input validation. Field names
//! are camelCase on the wire; the frontend depends on that casing.

pub mod health;
pub mod shorten;

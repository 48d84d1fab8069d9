//! Domain layer containing business entities and repository contracts.
//!
//! This layer has no dependencies on infrastructure or presentation code.
//! Repository traits defined here are implemented by
//! [`crate::infrastructure::persistence`], and business logic lives in
//! [`crate::application::services`].

pub mod entities;
pub mod repositories;

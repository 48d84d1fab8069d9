//! Utility functions shared across the application.
//!
//! - [`base62`] - Short code encoding of sequential counter IDs
//! - [`url_normalizer`] - URL normalization and sanitization

pub mod base62;
pub mod url_normalizer;

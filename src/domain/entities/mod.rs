//! Core business data structures.

mod short_url;

pub use short_url::{NewShortUrl, ShortUrl};

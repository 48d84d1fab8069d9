//! Business logic services.
//!
//! - [`ShortenerService`] - URL normalization, deduplication, code allocation,
//!   persistence and resolution
//! - [`CounterRange`] - in-process ID allocator over reserved counter ranges

mod counter_range;
mod shortener_service;

pub use counter_range::CounterRange;
pub use shortener_service::ShortenerService;

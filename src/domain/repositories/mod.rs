//! Data access trait definitions.
//!
//! Implemented by [`crate::infrastructure::persistence`]; mocked with
//! `mockall` in service unit tests.

mod counter_repository;
mod url_repository;

pub use counter_repository::CounterRepository;
pub use url_repository::UrlRepository;

#[cfg(test)]
pub use counter_repository::MockCounterRepository;
#[cfg(test)]
pub use url_repository::MockUrlRepository;

//! PostgreSQL repository implementations.

mod pg_counter_repository;
mod pg_url_repository;

pub use pg_counter_repository::PgCounterRepository;
pub use pg_url_repository::PgUrlRepository;

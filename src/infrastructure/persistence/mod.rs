//! Repository implementations.
//!
//! PostgreSQL repositories use SQLx runtime queries against the schema in
//! `migrations/`. The in-memory repositories back `STORAGE_BACKEND=memory` and
//! the HTTP integration tests.
//!
//! # Repositories
//!
//! - [`PgUserRepository`] / [`MemoryUserRepository`] - User accounts
//! - [`PgWebsiteRepository`] / [`MemoryWebsiteRepository`] - Short-name entries

pub mod memory;
pub mod pg_user_repository;
pub mod pg_website_repository;

pub use memory::{MemoryUserRepository, MemoryWebsiteRepository};
pub use pg_user_repository::PgUserRepository;
pub use pg_website_repository::PgWebsiteRepository;

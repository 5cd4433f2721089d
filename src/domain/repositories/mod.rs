//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated via
//! `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`UserRepository`] - User account storage
//! - [`WebsiteRepository`] - Short-name entry storage
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod user_repository;
pub mod website_repository;

pub use user_repository::UserRepository;
pub use website_repository::WebsiteRepository;

#[cfg(test)]
pub use user_repository::MockUserRepository;
#[cfg(test)]
pub use website_repository::MockWebsiteRepository;

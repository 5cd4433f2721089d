//! Repository trait for website entry data access.

use crate::domain::entities::{NewWebsiteEntry, WebsiteEntry};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for short-name entries.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgWebsiteRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryWebsiteRepository`] - In-process implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WebsiteRepository: Send + Sync {
    /// Creates a new entry.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::DuplicateName`] if the name is already registered.
    /// Uniqueness is enforced atomically by the store.
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn create(&self, new_entry: NewWebsiteEntry) -> Result<WebsiteEntry, AppError>;

    /// Finds an entry by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<WebsiteEntry>, AppError>;

    /// Finds an entry by exact, case-sensitive name match.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_name(&self, name: &str) -> Result<Option<WebsiteEntry>, AppError>;

    /// Lists entries owned by `owner_id` in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn list_by_owner(&self, owner_id: i64) -> Result<Vec<WebsiteEntry>, AppError>;

    /// Lists every entry in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn list_all(&self) -> Result<Vec<WebsiteEntry>, AppError>;

    /// Permanently removes an entry.
    ///
    /// Returns `Ok(true)` if a row was removed, `Ok(false)` if none matched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Checks if the backing store is reachable.
    async fn health_check(&self) -> bool;
}

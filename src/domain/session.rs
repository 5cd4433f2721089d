//! Explicit session handle passed into account operations.

use crate::error::AppError;
use async_trait::async_trait;

/// A per-request session binding the caller to at most one principal.
///
/// Account operations receive the handle explicitly instead of reading an
/// ambient "current user". The web layer implements it for
/// `tower_sessions::Session` (see [`crate::web::session`]).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionHandle: Send + Sync {
    /// Binds the session to `user_id`, replacing any previous principal.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the session store fails.
    async fn bind_principal(&self, user_id: i64) -> Result<(), AppError>;

    /// Returns the bound principal id, if any.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the session store fails.
    async fn principal_id(&self) -> Result<Option<i64>, AppError>;

    /// Unbinds the principal. Succeeds when nothing is bound.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the session store fails.
    async fn clear_principal(&self) -> Result<(), AppError>;
}

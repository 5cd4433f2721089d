//! Session layer configuration, principal binding, and flash messages.

use async_trait::async_trait;
use tower_sessions::{Expiry, Session, SessionManagerLayer, SessionStore};

use crate::domain::session::SessionHandle;
use crate::error::AppError;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "redirector_session";

/// Keys stored in the session.
pub mod keys {
    /// Id of the authenticated user.
    pub const PRINCIPAL_ID: &str = "principal_id";
    /// Pending one-shot messages.
    pub const FLASH: &str = "flash";
}

/// Builds the session layer over `store`.
///
/// Cookies are `HttpOnly`, `SameSite=Lax`, scoped to `/`, and expire after
/// `expiry_seconds` of inactivity. `secure` adds the `Secure` attribute.
pub fn create_session_layer<S>(store: S, secure: bool, expiry_seconds: i64) -> SessionManagerLayer<S>
where
    S: SessionStore + Clone,
{
    SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::seconds(expiry_seconds),
        ))
        .with_secure(secure)
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
}

#[async_trait]
impl SessionHandle for Session {
    async fn bind_principal(&self, user_id: i64) -> Result<(), AppError> {
        // New id on privilege change.
        self.cycle_id().await?;
        self.insert(keys::PRINCIPAL_ID, user_id).await?;
        Ok(())
    }

    async fn principal_id(&self) -> Result<Option<i64>, AppError> {
        Ok(self.get::<i64>(keys::PRINCIPAL_ID).await?)
    }

    async fn clear_principal(&self) -> Result<(), AppError> {
        self.remove::<i64>(keys::PRINCIPAL_ID).await?;
        Ok(())
    }
}

/// Queues a message for the next page render.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the session store fails.
pub async fn push_flash(session: &Session, message: impl Into<String>) -> Result<(), AppError> {
    let mut pending = session
        .get::<Vec<String>>(keys::FLASH)
        .await?
        .unwrap_or_default();
    pending.push(message.into());
    session.insert(keys::FLASH, pending).await?;
    Ok(())
}

/// Removes and returns every pending message, oldest first.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the session store fails.
pub async fn take_flashes(session: &Session) -> Result<Vec<String>, AppError> {
    Ok(session
        .remove::<Vec<String>>(keys::FLASH)
        .await?
        .unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tower_sessions::MemoryStore;

    fn new_session() -> Session {
        Session::new(None, Arc::new(MemoryStore::default()), None)
    }

    #[tokio::test]
    async fn test_bind_and_clear_principal() {
        let session = new_session();

        assert_eq!(session.principal_id().await.unwrap(), None);

        session.bind_principal(42).await.unwrap();
        assert_eq!(session.principal_id().await.unwrap(), Some(42));

        session.clear_principal().await.unwrap();
        assert_eq!(session.principal_id().await.unwrap(), None);

        // Clearing an anonymous session is a no-op.
        session.clear_principal().await.unwrap();
        assert_eq!(session.principal_id().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_flashes_are_consumed_once() {
        let session = new_session();

        push_flash(&session, "first").await.unwrap();
        push_flash(&session, "second").await.unwrap();

        assert_eq!(take_flashes(&session).await.unwrap(), vec!["first", "second"]);
        assert!(take_flashes(&session).await.unwrap().is_empty());
    }
}

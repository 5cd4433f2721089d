//! Account directory: registration, authentication, and session binding.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, info};

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::domain::session::SessionHandle;
use crate::error::AppError;
use crate::utils::password::{hash_password, verify_password};

/// Service owning user identities and authentication decisions.
///
/// Holds no session state of its own: every session-affecting operation takes
/// the caller's [`SessionHandle`] explicitly.
pub struct AccountService<R: UserRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: UserRepository + ?Sized> AccountService<R> {
    /// Creates a new account service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a user without touching any session.
    ///
    /// Used by [`Self::register`] and by the admin CLI.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if email or password is empty.
    /// Returns [`AppError::DuplicateEmail`] if the email is already registered.
    /// Returns [`AppError::Internal`] on storage or hashing errors.
    pub async fn create_user(&self, email: &str, password: &str) -> Result<User, AppError> {
        if email.is_empty() || password.is_empty() {
            return Err(AppError::bad_request(
                "Email and password are required",
                json!({ "email_present": !email.is_empty(), "password_present": !password.is_empty() }),
            ));
        }

        if self.repository.find_by_email(email).await?.is_some() {
            return Err(AppError::DuplicateEmail {
                email: email.to_string(),
            });
        }

        let plaintext = password.to_string();
        let password_hash = tokio::task::spawn_blocking(move || hash_password(&plaintext))
            .await
            .map_err(|e| {
                AppError::internal("Password hashing task failed", json!({ "reason": e.to_string() }))
            })??;

        let user = self
            .repository
            .create(NewUser {
                email: email.to_string(),
                password_hash,
            })
            .await?;

        info!(user_id = user.id, "Registered new user");
        Ok(user)
    }

    /// Registers a new account and logs it in.
    ///
    /// # Errors
    ///
    /// See [`Self::create_user`]. Returns [`AppError::Internal`] if the session
    /// cannot be bound.
    pub async fn register<S>(&self, email: &str, password: &str, session: &S) -> Result<User, AppError>
    where
        S: SessionHandle + ?Sized,
    {
        let user = self.create_user(email, password).await?;
        session.bind_principal(user.id).await?;
        Ok(user)
    }

    /// Checks an email/password pair without touching any session.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::UserNotFound`] if no user has this email.
    /// Returns [`AppError::InvalidCredential`] if the password does not verify.
    pub async fn verify_credentials(&self, email: &str, password: &str) -> Result<User, AppError> {
        let user = self
            .repository
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::UserNotFound {
                email: email.to_string(),
            })?;

        let plaintext = password.to_string();
        let credential = user.password_hash.clone();
        let verified = tokio::task::spawn_blocking(move || verify_password(&plaintext, &credential))
            .await
            .map_err(|e| {
                AppError::internal("Password verification task failed", json!({ "reason": e.to_string() }))
            })?;

        if !verified {
            debug!(user_id = user.id, "Password verification failed");
            return Err(AppError::InvalidCredential);
        }

        Ok(user)
    }

    /// Authenticates an email/password pair and binds the session on success.
    ///
    /// A failed attempt leaves the session untouched.
    ///
    /// # Errors
    ///
    /// See [`Self::verify_credentials`]. Returns [`AppError::Internal`] if the
    /// session cannot be bound.
    pub async fn authenticate<S>(
        &self,
        email: &str,
        password: &str,
        session: &S,
    ) -> Result<User, AppError>
    where
        S: SessionHandle + ?Sized,
    {
        let user = self.verify_credentials(email, password).await?;
        session.bind_principal(user.id).await?;
        info!(user_id = user.id, "User logged in");
        Ok(user)
    }

    /// Ends the authenticated session. Ending an anonymous session is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the session store fails.
    pub async fn end_session<S>(&self, session: &S) -> Result<(), AppError>
    where
        S: SessionHandle + ?Sized,
    {
        session.clear_principal().await
    }

    /// Returns the user bound to `session`, or `None` when anonymous.
    ///
    /// A session bound to an id that no longer resolves is treated as anonymous.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on session or storage errors.
    pub async fn current_principal<S>(&self, session: &S) -> Result<Option<User>, AppError>
    where
        S: SessionHandle + ?Sized,
    {
        match session.principal_id().await? {
            Some(user_id) => self.repository.find_by_id(user_id).await,
            None => Ok(None),
        }
    }

    /// Lists all registered users.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        self.repository.list().await
    }
}

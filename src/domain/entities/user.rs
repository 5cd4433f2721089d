//! User entity: an account identity with a password credential.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A registered account.
///
/// `password_hash` is an opaque PHC or legacy PBKDF2 string produced by
/// [`crate::utils::password`]; the plaintext is never stored.
#[derive(Clone)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User instance.
    pub fn new(id: i64, email: String, password_hash: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            email,
            password_hash,
            created_at,
        }
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("password_hash", &"<redacted>")
            .field("created_at", &self.created_at)
            .finish()
    }
}

/// Input data for creating a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
}

/// The authenticated principal as seen by handlers and templates.
///
/// Carries identity only, never the credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrincipalView {
    pub id: i64,
    pub email: String,
}

impl From<&User> for PrincipalView {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_credential() {
        let user = User::new(
            1,
            "a@x.com".to_string(),
            "$argon2id$v=19$secret".to_string(),
            Utc::now(),
        );

        let rendered = format!("{:?}", user);
        assert!(rendered.contains("a@x.com"));
        assert!(!rendered.contains("secret"));
    }

    #[test]
    fn test_principal_view_from_user() {
        let user = User::new(42, "b@x.com".to_string(), "hash".to_string(), Utc::now());
        let view = PrincipalView::from(&user);

        assert_eq!(view.id, 42);
        assert_eq!(view.email, "b@x.com");
    }
}

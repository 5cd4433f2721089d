//! Name registry: short-name creation, deletion, listing, and resolution.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde_json::json;
use tracing::{info, warn};

use crate::domain::entities::{NewWebsiteEntry, PrincipalView, WebsiteEntry};
use crate::domain::repositories::WebsiteRepository;
use crate::error::AppError;

/// Single-segment paths served by other routes. An entry with one of these
/// names could never be resolved.
pub const RESERVED_NAMES: &[&str] = &[
    "login", "register", "logout", "settings", "data", "contact", "health", "static",
];

/// How entries relate to the users that create them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OwnershipMode {
    /// Entries belong to their creator; only the creator may delete them.
    #[default]
    Scoped,
    /// Entries have no owner; any authenticated user may delete any entry.
    Global,
}

impl FromStr for OwnershipMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "scoped" => Ok(Self::Scoped),
            "global" => Ok(Self::Global),
            other => Err(format!(
                "unknown ownership mode `{other}`, expected `scoped` or `global`"
            )),
        }
    }
}

impl fmt::Display for OwnershipMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scoped => f.write_str("scoped"),
            Self::Global => f.write_str("global"),
        }
    }
}

/// Service owning the short name → destination mapping.
///
/// Names are matched byte for byte: no trimming, no case folding.
pub struct RegistryService<R: WebsiteRepository + ?Sized> {
    repository: Arc<R>,
    mode: OwnershipMode,
}

impl<R: WebsiteRepository + ?Sized> RegistryService<R> {
    pub fn new(repository: Arc<R>, mode: OwnershipMode) -> Self {
        Self { repository, mode }
    }

    pub fn mode(&self) -> OwnershipMode {
        self.mode
    }

    /// Registers `name` → `destination` on behalf of `owner`.
    ///
    /// # Errors
    ///
    /// - [`AppError::Unauthenticated`] if `owner` is `None`
    /// - [`AppError::Validation`] if either field is empty or the name is reserved
    /// - [`AppError::DuplicateName`] if the name is taken
    /// - [`AppError::Internal`] on storage errors
    pub async fn create_entry(
        &self,
        name: &str,
        destination: &str,
        owner: Option<&PrincipalView>,
    ) -> Result<WebsiteEntry, AppError> {
        let owner = owner.ok_or(AppError::Unauthenticated)?;

        if name.is_empty() || destination.is_empty() {
            return Err(AppError::bad_request(
                "Website name and address are required",
                json!({ "name_present": !name.is_empty(), "destination_present": !destination.is_empty() }),
            ));
        }

        if name.contains('/') {
            return Err(AppError::bad_request(
                "Website name must be a single path segment",
                json!({ "name": name }),
            ));
        }

        if RESERVED_NAMES.contains(&name) {
            return Err(AppError::bad_request(
                format!("The name `{name}` is reserved"),
                json!({ "name": name, "reserved": RESERVED_NAMES }),
            ));
        }

        // Fast path only; the store enforces uniqueness.
        if self.repository.find_by_name(name).await?.is_some() {
            return Err(AppError::DuplicateName {
                name: name.to_string(),
            });
        }

        let owner_id = match self.mode {
            OwnershipMode::Scoped => Some(owner.id),
            OwnershipMode::Global => None,
        };

        let entry = self
            .repository
            .create(NewWebsiteEntry {
                name: name.to_string(),
                destination: destination.to_string(),
                owner_id,
            })
            .await?;

        info!(entry_id = entry.id, name = %entry.name, user_id = owner.id, "Created website entry");
        Ok(entry)
    }

    /// Permanently removes entry `entry_id` on behalf of `requester`.
    ///
    /// # Errors
    ///
    /// - [`AppError::Unauthenticated`] if `requester` is `None`
    /// - [`AppError::NotFound`] if no such entry exists
    /// - [`AppError::Forbidden`] if the requester does not own it (scoped mode)
    /// - [`AppError::Internal`] on storage errors
    pub async fn delete_entry(
        &self,
        entry_id: i64,
        requester: Option<&PrincipalView>,
    ) -> Result<(), AppError> {
        let requester = requester.ok_or(AppError::Unauthenticated)?;

        let entry = self
            .repository
            .find_by_id(entry_id)
            .await?
            .ok_or(AppError::NotFound { id: entry_id })?;

        if self.mode == OwnershipMode::Scoped && !entry.is_owned_by(requester.id) {
            warn!(
                entry_id,
                user_id = requester.id,
                "Refused to delete website entry owned by another user"
            );
            return Err(AppError::Forbidden { id: entry_id });
        }

        if !self.repository.delete(entry_id).await? {
            return Err(AppError::NotFound { id: entry_id });
        }

        info!(entry_id, user_id = requester.id, "Deleted website entry");
        Ok(())
    }

    /// Lists the entries visible to `owner`, in insertion order.
    ///
    /// Scoped mode returns only the owner's entries; global mode returns all.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn list_for_owner(&self, owner: &PrincipalView) -> Result<Vec<WebsiteEntry>, AppError> {
        match self.mode {
            OwnershipMode::Scoped => self.repository.list_by_owner(owner.id).await,
            OwnershipMode::Global => self.repository.list_all().await,
        }
    }

    /// Lists every entry regardless of owner.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn list_all(&self) -> Result<Vec<WebsiteEntry>, AppError> {
        self.repository.list_all().await
    }

    /// Looks up the destination for `name`.
    ///
    /// The destination is returned as stored. It is never resolved again, so
    /// a destination that happens to be another short name is emitted as is.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn resolve(&self, name: &str) -> Result<Option<String>, AppError> {
        Ok(self
            .repository
            .find_by_name(name)
            .await?
            .map(|entry| entry.destination))
    }

    pub async fn health_check(&self) -> bool {
        self.repository.health_check().await
    }
}

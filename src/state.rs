//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{AccountService, OwnershipMode, RegistryService};
use crate::domain::repositories::{UserRepository, WebsiteRepository};

/// Services shared by every request.
///
/// Repositories are held as trait objects so one router serves both the
/// PostgreSQL and the in-memory backend.
#[derive(Clone)]
pub struct AppState {
    pub account_service: Arc<AccountService<dyn UserRepository>>,
    pub registry_service: Arc<RegistryService<dyn WebsiteRepository>>,
}

impl AppState {
    pub fn new(
        users: Arc<dyn UserRepository>,
        websites: Arc<dyn WebsiteRepository>,
        ownership_mode: OwnershipMode,
    ) -> Self {
        Self {
            account_service: Arc::new(AccountService::new(users)),
            registry_service: Arc::new(RegistryService::new(websites, ownership_mode)),
        }
    }
}

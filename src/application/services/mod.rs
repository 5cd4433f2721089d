//! Business logic services for the application layer.

pub mod account_service;
pub mod registry_service;

pub use account_service::AccountService;
pub use registry_service::{OwnershipMode, RESERVED_NAMES, RegistryService};

//! Application layer services implementing business logic.
//!
//! Services consume repository traits and the explicit session contract, and
//! provide the API that HTTP handlers and the admin CLI call.
//!
//! # Available Services
//!
//! - [`services::account_service::AccountService`] - Registration and authentication
//! - [`services::registry_service::RegistryService`] - Short-name entries and resolution

pub mod services;

//! Core domain entities.
//!
//! # Entity Types
//!
//! - [`User`] - An account identity with a password credential
//! - [`WebsiteEntry`] - A short name mapped to a destination
//!
//! Creation inputs are separate structs (`NewUser`, `NewWebsiteEntry`); entities
//! are never updated in place.

pub mod user;
pub mod website;

pub use user::{NewUser, PrincipalView, User};
pub use website::{NewWebsiteEntry, WebsiteEntry};

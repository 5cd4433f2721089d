//! Domain layer: entities, repository contracts, and the session contract.
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Business rules live in [`crate::application::services`].
//!
//! - [`entities`] - Users and website entries
//! - [`repositories`] - Data access traits
//! - [`session`] - Explicit per-request principal binding

pub mod entities;
pub mod repositories;
pub mod session;

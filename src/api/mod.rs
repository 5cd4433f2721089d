//! Machine-facing JSON endpoints and shared HTTP middleware.
//!
//! # Modules
//!
//! - [`dto`] - Response payloads
//! - [`handlers`] - JSON handlers
//! - [`middleware`] - Request tracing
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

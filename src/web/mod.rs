//! Browser-facing layer: pages, forms, sessions, and short-name redirects.
//!
//! Uses Askama templates for server-side rendering and tower-sessions for
//! cookie sessions.
//!
//! # Modules
//!
//! - [`handlers`] - Page, form, and redirect handlers
//! - [`middleware`] - Login requirement for protected pages
//! - [`routes`] - Route configuration
//! - [`session`] - Session layer, principal binding, flash messages
//! - [`extract`] - Optional principal extractor
//! - [`forms`] - Form payloads and validation

pub mod extract;
pub mod forms;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod session;

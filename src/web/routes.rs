//! Web route configuration.

use crate::state::AppState;
use crate::web::handlers::{
    contact_handler, create_website_handler, delete_website_handler, index_handler, login_handler,
    login_page_handler, logout_handler, register_handler, register_page_handler, resolve_handler,
    settings_handler,
};
use axum::{
    Router,
    routing::{get, post},
};

/// Routes requiring an authenticated session.
///
/// Protected via [`crate::web::middleware::web_auth`].
///
/// # Endpoints
///
/// - `GET  /settings`    - Entries of the current user and the add form
/// - `POST /data`        - Create an entry
/// - `GET  /delete/{id}` - Delete an entry
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/settings", get(settings_handler))
        .route("/data", post(create_website_handler))
        .route("/delete/{id}", get(delete_website_handler))
}

/// Public routes.
///
/// # Endpoints
///
/// - `GET  /`         - Landing page
/// - `GET  /login`    - Redirect to the login dialog
/// - `POST /login`    - Authenticate
/// - `GET  /register` - Registration page
/// - `POST /register` - Register and log in
/// - `GET  /logout`   - End the session
/// - `GET  /contact`  - Contact text
/// - `GET  /{name}`   - Short-name redirect
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index_handler))
        .route("/login", get(login_page_handler).post(login_handler))
        .route("/register", get(register_page_handler).post(register_handler))
        .route("/logout", get(logout_handler))
        .route("/contact", get(contact_handler))
        .route("/{name}", get(resolve_handler))
}

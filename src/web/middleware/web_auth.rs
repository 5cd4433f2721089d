//! Session-based authentication middleware for protected pages.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use tower_sessions::Session;

use crate::domain::entities::PrincipalView;
use crate::error::AppError;
use crate::state::AppState;
use crate::web::handlers::error::WebError;

/// Requires an authenticated session.
///
/// # Authentication Flow
///
/// 1. Read the principal id bound to the session cookie
/// 2. Load the user via [`crate::application::services::AccountService`]
/// 3. On success, insert a [`PrincipalView`] request extension and continue
/// 4. When anonymous, redirect to `/?show_login_modal=true`
///
/// A session whose user no longer exists counts as anonymous.
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, routing::get, middleware};
/// use crate::web::middleware::web_auth;
///
/// let protected = Router::new()
///     .route("/settings", get(settings_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), web_auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    session: Session,
    mut req: Request,
    next: Next,
) -> Result<Response, WebError> {
    let user = st
        .account_service
        .current_principal(&session)
        .await?
        .ok_or(AppError::Unauthenticated)?;

    req.extensions_mut().insert(PrincipalView::from(&user));

    Ok(next.run(req).await)
}

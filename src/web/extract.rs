//! Request extractors for the web layer.

use axum::{extract::FromRequestParts, http::request::Parts};
use tower_sessions::Session;

use crate::domain::entities::PrincipalView;
use crate::state::AppState;
use crate::web::handlers::error::WebError;

/// The principal bound to the request's session, if any.
///
/// Never rejects anonymous requests; use the
/// [`crate::web::middleware::web_auth`] layer for routes that require login.
pub struct CurrentPrincipal(pub Option<PrincipalView>);

impl FromRequestParts<AppState> for CurrentPrincipal {
    type Rejection = WebError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(session) = parts.extensions.get::<Session>().cloned() else {
            return Ok(Self(None));
        };

        let user = state.account_service.current_principal(&session).await?;

        Ok(Self(user.as_ref().map(PrincipalView::from)))
    }
}

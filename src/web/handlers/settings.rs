//! Account settings page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Extension, extract::State, response::IntoResponse};
use tower_sessions::Session;

use crate::domain::entities::{PrincipalView, WebsiteEntry};
use crate::state::AppState;
use crate::web::handlers::error::WebError;
use crate::web::session::take_flashes;

/// Template for the settings page.
///
/// Renders `templates/settings.html` with:
/// - The principal's entries, each with a delete link
/// - The add-website form
#[derive(Template, WebTemplate)]
#[template(path = "settings.html")]
pub struct SettingsTemplate {
    pub principal: Option<PrincipalView>,
    pub websites: Vec<WebsiteEntry>,
    pub flashes: Vec<String>,
}

/// Lists the principal's entries.
///
/// # Endpoint
///
/// `GET /settings` (login required)
pub async fn settings_handler(
    State(state): State<AppState>,
    Extension(principal): Extension<PrincipalView>,
    session: Session,
) -> Result<impl IntoResponse, WebError> {
    let websites = state.registry_service.list_for_owner(&principal).await?;
    let flashes = take_flashes(&session).await?;

    Ok(SettingsTemplate {
        principal: Some(principal),
        websites,
        flashes,
    })
}

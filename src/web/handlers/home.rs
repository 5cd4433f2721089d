//! Landing and contact page handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::Query;
use axum::response::IntoResponse;
use serde::Deserialize;
use tower_sessions::Session;

use crate::domain::entities::PrincipalView;
use crate::web::extract::CurrentPrincipal;
use crate::web::handlers::error::WebError;
use crate::web::session::take_flashes;

/// Query flags that open a dialog on the landing page.
#[derive(Debug, Default, Deserialize)]
pub struct IndexQuery {
    pub show_login_modal: Option<String>,
    pub show_sign_up_modal: Option<String>,
}

/// A flag is set when present with any value other than `false` or `0`.
fn flag(value: Option<&str>) -> bool {
    matches!(value, Some(v) if !v.eq_ignore_ascii_case("false") && v != "0")
}

#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub principal: Option<PrincipalView>,
    pub flashes: Vec<String>,
    pub show_login_modal: bool,
    pub show_sign_up_modal: bool,
}

/// Renders the landing page.
///
/// # Endpoint
///
/// `GET /`
///
/// Consumes pending flash messages.
pub async fn index_handler(
    CurrentPrincipal(principal): CurrentPrincipal,
    session: Session,
    Query(query): Query<IndexQuery>,
) -> Result<impl IntoResponse, WebError> {
    let flashes = take_flashes(&session).await?;

    Ok(IndexTemplate {
        principal,
        flashes,
        show_login_modal: flag(query.show_login_modal.as_deref()),
        show_sign_up_modal: flag(query.show_sign_up_modal.as_deref()),
    })
}

/// `GET /contact`
pub async fn contact_handler() -> &'static str {
    "ContactPage"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag() {
        assert!(flag(Some("true")));
        assert!(flag(Some("True")));
        assert!(flag(Some("")));
        assert!(!flag(Some("false")));
        assert!(!flag(Some("0")));
        assert!(!flag(None));
    }
}

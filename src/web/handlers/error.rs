//! HTML rendering of application errors.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};

use crate::error::AppError;

/// Landing page with the login dialog open.
pub const LOGIN_REDIRECT: &str = "/?show_login_modal=true";

/// Landing page with the sign-up dialog open.
pub const SIGN_UP_REDIRECT: &str = "/?show_sign_up_modal=true";

#[derive(Template, WebTemplate)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub status: u16,
    pub title: String,
    pub message: String,
}

/// An [`AppError`] rendered for a browser.
///
/// `Unauthenticated` becomes a redirect to the login dialog; everything else
/// becomes an error page carrying the error's status code. Internal errors are
/// logged and shown without details.
#[derive(Debug)]
pub struct WebError(pub AppError);

impl From<AppError> for WebError {
    fn from(e: AppError) -> Self {
        Self(e)
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let error = self.0;

        if matches!(error, AppError::Unauthenticated) {
            return Redirect::to(LOGIN_REDIRECT).into_response();
        }

        let status = error.status();
        let message = match &error {
            AppError::Internal { message, details } => {
                tracing::error!(%details, "{}", message);
                "Something went wrong on our side. Please try again later.".to_string()
            }
            AppError::Forbidden { .. } => "You can only manage your own websites.".to_string(),
            other => other.to_string(),
        };

        let template = ErrorTemplate {
            status: status.as_u16(),
            title: status
                .canonical_reason()
                .unwrap_or("Error")
                .to_string(),
            message,
        };

        (status, template).into_response()
    }
}

/// Fallback for unmatched routes.
pub async fn not_found_handler() -> Response {
    not_found_page()
}

/// The generic 404 page.
pub fn not_found_page() -> Response {
    (
        StatusCode::NOT_FOUND,
        ErrorTemplate {
            status: 404,
            title: "Not Found".to_string(),
            message: "The page you are looking for does not exist.".to_string(),
        },
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header::LOCATION;
    use serde_json::json;

    #[test]
    fn test_unauthenticated_redirects_to_login() {
        let response = WebError(AppError::Unauthenticated).into_response();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[LOCATION], LOGIN_REDIRECT);
    }

    #[test]
    fn test_forbidden_renders_403() {
        let response = WebError(AppError::Forbidden { id: 3 }).into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_internal_renders_500() {
        let response = WebError(AppError::internal("boom", json!({}))).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

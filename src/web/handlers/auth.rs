//! Login, registration, and logout handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;
use validator::Validate;

use crate::domain::entities::PrincipalView;
use crate::error::AppError;
use crate::state::AppState;
use crate::web::extract::CurrentPrincipal;
use crate::web::forms::{LoginForm, RegisterForm, validation_messages};
use crate::web::handlers::error::{LOGIN_REDIRECT, SIGN_UP_REDIRECT, WebError};
use crate::web::session::push_flash;

pub const USER_NOT_FOUND_MESSAGE: &str = "User does not exist, please sign up.";
pub const INVALID_PASSWORD_MESSAGE: &str = "Incorrect password, please try again";
pub const DUPLICATE_EMAIL_MESSAGE: &str = "User already exist!";

#[derive(Template, WebTemplate)]
#[template(path = "register.html")]
pub struct RegisterTemplate {
    pub principal: Option<PrincipalView>,
    pub email: String,
    pub errors: Vec<String>,
}

/// `GET /login`
///
/// The login form lives in a dialog on the landing page.
pub async fn login_page_handler() -> Redirect {
    Redirect::to(LOGIN_REDIRECT)
}

/// Authenticates the submitted credentials.
///
/// # Endpoint
///
/// `POST /login`
///
/// # Outcomes
///
/// - success: session bound, redirect to `/`
/// - unknown email: flash, redirect to the sign-up dialog
/// - wrong password or missing fields: flash, redirect to the login dialog
pub async fn login_handler(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Redirect, WebError> {
    if let Err(errors) = form.validate() {
        for message in validation_messages(&errors) {
            push_flash(&session, message).await?;
        }
        return Ok(Redirect::to(LOGIN_REDIRECT));
    }

    match state
        .account_service
        .authenticate(&form.email, &form.password, &session)
        .await
    {
        Ok(_) => Ok(Redirect::to("/")),
        Err(AppError::UserNotFound { .. }) => {
            push_flash(&session, USER_NOT_FOUND_MESSAGE).await?;
            Ok(Redirect::to(SIGN_UP_REDIRECT))
        }
        Err(AppError::InvalidCredential) => {
            push_flash(&session, INVALID_PASSWORD_MESSAGE).await?;
            Ok(Redirect::to(LOGIN_REDIRECT))
        }
        Err(e) => Err(e.into()),
    }
}

/// `GET /register`
pub async fn register_page_handler(CurrentPrincipal(principal): CurrentPrincipal) -> impl IntoResponse {
    RegisterTemplate {
        principal,
        email: String::new(),
        errors: Vec::new(),
    }
}

/// Creates an account and logs it in.
///
/// # Endpoint
///
/// `POST /register`
///
/// # Outcomes
///
/// - success: session bound, redirect to `/`
/// - email taken: flash, redirect to the login dialog
/// - invalid input: form re-rendered with messages (400)
pub async fn register_handler(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<RegisterForm>,
) -> Result<Response, WebError> {
    if let Err(errors) = form.validate() {
        return Ok(render_register_errors(form.email, validation_messages(&errors)));
    }

    match state
        .account_service
        .register(&form.email, &form.password, &session)
        .await
    {
        Ok(_) => Ok(Redirect::to("/").into_response()),
        Err(AppError::DuplicateEmail { .. }) => {
            push_flash(&session, DUPLICATE_EMAIL_MESSAGE).await?;
            Ok(Redirect::to(LOGIN_REDIRECT).into_response())
        }
        Err(AppError::Validation { message, .. }) => {
            Ok(render_register_errors(form.email, vec![message]))
        }
        Err(e) => Err(e.into()),
    }
}

fn render_register_errors(email: String, errors: Vec<String>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        RegisterTemplate {
            principal: None,
            email,
            errors,
        },
    )
        .into_response()
}

/// `GET /logout`
pub async fn logout_handler(
    State(state): State<AppState>,
    session: Session,
) -> Result<Redirect, WebError> {
    state.account_service.end_session(&session).await?;
    Ok(Redirect::to("/"))
}

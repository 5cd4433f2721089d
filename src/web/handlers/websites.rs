//! Website entry mutation handlers.

use axum::{
    Extension, Form,
    extract::{Path, State, rejection::PathRejection},
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;
use validator::Validate;

use crate::domain::entities::PrincipalView;
use crate::error::AppError;
use crate::state::AppState;
use crate::web::forms::{WebsiteForm, validation_messages};
use crate::web::handlers::error::{WebError, not_found_page};
use crate::web::session::push_flash;

/// Registers a new short name for the principal.
///
/// # Endpoint
///
/// `POST /data` (login required)
///
/// # Outcomes
///
/// - success: redirect to `/`
/// - invalid input, reserved or taken name: flash, redirect to `/settings`
pub async fn create_website_handler(
    State(state): State<AppState>,
    Extension(principal): Extension<PrincipalView>,
    session: Session,
    Form(form): Form<WebsiteForm>,
) -> Result<Redirect, WebError> {
    if let Err(errors) = form.validate() {
        for message in validation_messages(&errors) {
            push_flash(&session, message).await?;
        }
        return Ok(Redirect::to("/settings"));
    }

    match state
        .registry_service
        .create_entry(&form.name, &form.address, Some(&principal))
        .await
    {
        Ok(_) => Ok(Redirect::to("/")),
        Err(AppError::DuplicateName { name }) => {
            push_flash(&session, format!("The name \"{name}\" is already taken.")).await?;
            Ok(Redirect::to("/settings"))
        }
        Err(AppError::Validation { message, .. }) => {
            push_flash(&session, message).await?;
            Ok(Redirect::to("/settings"))
        }
        Err(e) => Err(e.into()),
    }
}

/// Deletes one of the principal's entries.
///
/// # Endpoint
///
/// `GET /delete/{id}` (login required)
///
/// # Response Codes
///
/// - **303 See Other**: deleted, back to `/settings`
/// - **403 Forbidden**: entry belongs to another user
/// - **404 Not Found**: no such entry, or the id is not an integer
pub async fn delete_website_handler(
    State(state): State<AppState>,
    Extension(principal): Extension<PrincipalView>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Response, WebError> {
    let Ok(Path(id)) = id else {
        return Ok(not_found_page());
    };

    state
        .registry_service
        .delete_entry(id, Some(&principal))
        .await?;

    Ok(Redirect::to("/settings").into_response())
}

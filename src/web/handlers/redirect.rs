//! Short-name resolution handler.

use axum::{
    extract::{Path, State},
    response::Redirect,
};
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

use crate::state::AppState;
use crate::web::handlers::error::WebError;

/// Bytes escaped in a `Location` value. Non-ASCII is always escaped; reserved
/// URI characters and existing `%XX` escapes pass through.
const LOCATION_ESCAPE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'\\')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Redirects a short name to its destination.
///
/// # Endpoint
///
/// `GET /{name}`
///
/// # Response Codes
///
/// - **307 Temporary Redirect**: name registered, `Location` is the stored
///   destination with non-ASCII and unsafe bytes percent-encoded
/// - **303 See Other**: unknown name, back to the landing page
///
/// Destinations are followed one hop only.
pub async fn resolve_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Redirect, WebError> {
    let Some(destination) = state.registry_service.resolve(&name).await? else {
        tracing::debug!(name = %name, "Unknown short name");
        return Ok(Redirect::to("/"));
    };

    Ok(Redirect::temporary(&location_for(&destination)))
}

/// Encodes `destination` into a valid header value.
fn location_for(destination: &str) -> String {
    utf8_percent_encode(destination, LOCATION_ESCAPE).to_string()
}

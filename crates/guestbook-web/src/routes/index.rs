//! GET / - entry list and submission form

use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::Html;

use crate::error::WebError;
use crate::flash::session_from_headers;
use crate::render;
use crate::state::AppState;

/// GET / - Render all entries, newest first, plus any pending flash.
///
/// Reading the flash removes it, so it is shown exactly once. It is only
/// read after the entries load, so a failed render keeps it pending.
pub async fn index(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Html<String>, WebError> {
    let entries = state.repo().list()?;
    let flash = session_from_headers(&headers)
        .and_then(|session| state.flash().take(session))
        .unwrap_or_default();

    Ok(Html(render::index_page(&entries, &flash)))
}

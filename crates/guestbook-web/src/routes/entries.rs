//! POST /entries - guestbook submissions

use axum::extract::rejection::FormRejection;
use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Form;
use guestbook_core::validation::validate;
use guestbook_core::{EntryRepository, GuestbookError, NewEntry};
use serde::Deserialize;
use uuid::Uuid;

use crate::flash::{session_cookie, session_from_headers, Flash};
use crate::state::AppState;

pub const SUCCESS_MESSAGE: &str = "Your guestbook entry was added successfully!";
pub const STORAGE_FAILURE_MESSAGE: &str =
    "An error occurred while saving your entry. Please try again.";

/// Submitted form fields; any of them may be missing.
#[derive(Debug, Default, Deserialize)]
pub struct EntryForm {
    pub visitor_name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

/// POST /entries - Validate and store a submission, then redirect to `/`.
///
/// The outcome is reported through the flash, so this always answers with a
/// redirect. A body that cannot be decoded is handled as an empty form.
pub async fn create_entry(
    State(state): State<AppState>,
    headers: HeaderMap,
    form: Result<Form<EntryForm>, FormRejection>,
) -> Response {
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "Unreadable entry submission");
            EntryForm::default()
        }
    };

    let flash = submit(state.repo(), form);

    let existing = session_from_headers(&headers);
    let session = existing.unwrap_or_else(Uuid::new_v4);
    state.flash().set(session, flash);

    let redirect = Redirect::to("/");
    match existing {
        Some(_) => redirect.into_response(),
        None => ([(SET_COOKIE, session_cookie(session))], redirect).into_response(),
    }
}

fn submit(repo: &dyn EntryRepository, form: EntryForm) -> Flash {
    let errors = validate(
        form.visitor_name.as_deref(),
        form.email.as_deref(),
        form.message.as_deref(),
    );
    if !errors.is_empty() {
        return Flash::errors(errors);
    }

    let entry = NewEntry {
        visitor_name: form.visitor_name.unwrap_or_default(),
        email: form.email,
        message: form.message.unwrap_or_default(),
    };

    match repo.create(&entry) {
        Ok(id) => {
            tracing::info!(id, "Guestbook entry added");
            Flash::success(SUCCESS_MESSAGE)
        }
        Err(GuestbookError::Validation(errors)) => Flash::errors(errors),
        Err(err) => {
            tracing::error!(error = %err, "Failed to save guestbook entry");
            Flash::errors(vec![STORAGE_FAILURE_MESSAGE.to_string()])
        }
    }
}

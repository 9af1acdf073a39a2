//! Error types for guestbook-web
//!
//! Handler errors become a generic HTML 500 page; details go to the log only.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use guestbook_core::GuestbookError;
use thiserror::Error;

use crate::render;

/// Error returned by page handlers
#[derive(Debug, Error)]
pub enum WebError {
    #[error("Storage error: {0}")]
    Storage(#[from] GuestbookError),
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        match &self {
            WebError::Storage(err) => tracing::error!(error = %err, "Failed to serve page"),
        }
        (StatusCode::INTERNAL_SERVER_ERROR, Html(render::error_page())).into_response()
    }
}

/// Server error type
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn storage_error_is_500_without_details() {
        let err = WebError::from(GuestbookError::Storage("disk on fire".into()));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("An error occurred"));
        assert!(!html.contains("disk on fire"));
    }
}

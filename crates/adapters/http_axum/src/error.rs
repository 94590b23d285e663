//! HTTP error response mapping.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use birdview_domain::error::BirdviewError;

/// Maps [`BirdviewError`] to an HTML response with appropriate status code.
///
/// The render service has already logged the failure with its path and
/// template; the response body stays generic.
#[derive(Debug)]
pub struct PageError(BirdviewError);

impl PageError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            err if err.is_not_found() => StatusCode::NOT_FOUND,
            BirdviewError::Route(_) | BirdviewError::Render(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<BirdviewError> for PageError {
    fn from(err: BirdviewError) -> Self {
        Self(err)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = if status == StatusCode::NOT_FOUND {
            "Page not found"
        } else {
            "Internal server error"
        };
        (status, Html(format!("<h1>{message}</h1>"))).into_response()
    }
}

//! HTTP mapping for [`mailcheck_common::Error`]

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use mailcheck_common::Error;
use tracing::debug;

/// Error returned from handlers, rendered as a plain-text body
#[derive(Debug)]
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        debug!(code = self.0.code(), status = status.as_u16(), "Request failed");
        (status, self.0.message()).into_response()
    }
}

//! Mapping of store errors onto HTTP responses.

use std::net::SocketAddr;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

use domainboard_core::Error;

/// Failure to start or keep running the server.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// A store error on its way out of a handler.
///
/// Bodies are plain text. Anything other than a missing or duplicate id is
/// logged and reported as a bare `500 Server error`.
#[derive(Debug)]
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            Error::NotFound { .. } => (StatusCode::NOT_FOUND, "Domain not found").into_response(),
            Error::Conflict { .. } => {
                (StatusCode::CONFLICT, "Domain already exists").into_response()
            }
            err => {
                error!(error = %err, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Server error").into_response()
            }
        }
    }
}

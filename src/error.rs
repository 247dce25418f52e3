//! Defines the app level error type and its conversion to JSON error responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A partial update was requested without any fields set.
    ///
    /// This is the only error the client is told apart from a server error.
    #[error("No data to update")]
    NoFieldsToUpdate,

    /// The requested record could not be found.
    ///
    /// Internally, this error occurs when an update matches no rows.
    #[error("the requested record could not be found")]
    NotFound,

    /// The remote store answered with a non-success status code.
    ///
    /// `message` is the store's own error message, or the raw response body
    /// if the store did not send one.
    #[error("the store rejected the request ({status}): {message}")]
    Store {
        /// The HTTP status code returned by the store.
        status: u16,
        /// The message returned by the store.
        message: String,
    },

    /// The remote store could not be reached or its response could not be read.
    #[error("could not reach the store: {0}")]
    Connection(String),

    /// The store returned a body that does not match the expected schema.
    #[error("unexpected response from the store: {0}")]
    InvalidResponse(String),

    /// The store returned no row for a write that should have returned one.
    #[error("the store did not return the {0} that was written")]
    MissingRecord(&'static str),

    /// The server could not be configured.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The HTTP server stopped with an error.
    #[error("the server stopped unexpectedly: {0}")]
    Server(String),

    /// The in-memory store's lock was poisoned.
    #[error("could not acquire the store lock")]
    #[cfg(test)]
    LockError,
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            Error::InvalidResponse(error.to_string())
        } else {
            Error::Connection(error.to_string())
        }
    }
}

/// The JSON body sent to the client when a request fails.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ErrorBody {
    /// A human readable description of the error.
    pub detail: String,
}

impl Error {
    /// The status code the client receives for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::NoFieldsToUpdate => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("An unexpected error occurred: {self}");
        }

        (
            status,
            Json(ErrorBody {
                detail: self.to_string(),
            }),
        )
            .into_response()
    }
}

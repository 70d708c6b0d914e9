use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Torre API error: {0}")]
    Upstream(String),

    #[error("Profile not found: {0}")]
    ProfileNotFound(String),

    #[error("Malformed profile field '{field}': expected {expected}")]
    MalformedProfile {
        field: &'static str,
        expected: &'static str,
    },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::ProfileNotFound(_) => StatusCode::NOT_FOUND,
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            Error::Upstream(_) | Error::Network(_) | Error::MalformedProfile { .. } => {
                StatusCode::BAD_GATEWAY
            }
            Error::Serialization(_) | Error::Config(_) | Error::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn code(&self) -> &'static str {
        match self {
            Error::Upstream(_) => "UPSTREAM_ERROR",
            Error::ProfileNotFound(_) => "NOT_FOUND",
            Error::MalformedProfile { .. } => "MALFORMED_UPSTREAM_DATA",
            Error::Validation(_) => "VALIDATION_ERROR",
            Error::Config(_) => "CONFIG_ERROR",
            Error::Network(_) => "NETWORK_ERROR",
            Error::Serialization(_) => "SERIALIZATION_ERROR",
            Error::Io(_) => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let message = if status.is_server_error() {
            tracing::error!("{}", self);
            match status {
                StatusCode::BAD_GATEWAY => "The Torre.ai service could not be reached".to_string(),
                _ => "An internal server error occurred".to_string(),
            }
        } else {
            self.to_string()
        };

        let body = Json(json!({
            "error": {
                "code": self.code(),
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

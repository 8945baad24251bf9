//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// Coarse classification used by the view layer to pick an error message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Request rejected by the transport or answered with a non-2xx status.
    Network,
    /// Body could not be decoded or lacks a required field.
    MalformedResponse,
    /// Signup / login rejected by the backend.
    Auth,
    Other,
}

impl SdkError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SdkError::Http(HttpError::Decode(_)) => ErrorKind::MalformedResponse,
            SdkError::Http(_) => ErrorKind::Network,
            SdkError::Auth(_) => ErrorKind::Auth,
            SdkError::MalformedResponse(_) | SdkError::Serde(_) => ErrorKind::MalformedResponse,
            SdkError::Other(_) => ErrorKind::Other,
        }
    }

    /// Short text suitable for an inline error slot in place of content.
    pub fn user_message(&self) -> String {
        match self.kind() {
            ErrorKind::Network => "Failed to load data. Check your connection and try again.".into(),
            ErrorKind::MalformedResponse => "Received unexpected data from the server.".into(),
            ErrorKind::Auth => self.to_string(),
            ErrorKind::Other => "An error occurred".into(),
        }
    }
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Rate limited (retry after {retry_after_ms:?}ms)")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Could not decode response body: {0}")]
    Decode(String),

    #[error("Timeout")]
    Timeout,

    #[error("Max retries exceeded after {attempts} attempts: {last_error}")]
    MaxRetriesExceeded { attempts: u32, last_error: String },
}

impl HttpError {
    /// Whether the backend answered with a client-side rejection (4xx other than 429).
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            HttpError::Unauthorized
                | HttpError::Forbidden(_)
                | HttpError::BadRequest(_)
                | HttpError::Conflict(_)
        )
    }
}

/// Authentication errors.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("Signup rejected: {0}")]
    SignupRejected(String),

    #[error("Login rejected: {0}")]
    LoginRejected(String),
}

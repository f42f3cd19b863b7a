//! Error types surfaced to front-ends.
//!
//! ERROR HANDLING
//! ==============
//! Every failure resolves to either an inline message or a redirect. Views
//! call [`ApiError::user_message`] to get display text; the dispatcher has
//! already handled the redirect side of a rejected authorization by the time
//! the caller sees [`ApiError::Unauthorized`].

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Error returned by a durable storage backend when a write fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No storage is reachable in the current environment.
    #[error("session storage is unavailable")]
    Unavailable,
    /// The backend refused or failed the write.
    #[error("session storage write failed: {0}")]
    Write(String),
}

/// Error returned by the dispatcher and the domain services.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Input rejected locally before any request was issued.
    #[error("{0}")]
    Validation(String),
    /// The backend answered 401; the session has already been cleared.
    #[error("authorization rejected")]
    Unauthorized { message: Option<String> },
    /// The backend answered with a non-success status other than 401.
    #[error("request failed with HTTP {status}")]
    Status { status: u16, message: Option<String> },
    /// The request never produced a response.
    #[error("transport error: {0}")]
    Transport(String),
    /// The response body did not match the expected shape.
    #[error("response decode failed: {0}")]
    Decode(#[from] serde_json::Error),
    /// The session that issued the request ended before the response arrived.
    #[error("session ended before the response arrived")]
    SessionEnded,
    /// A bearer-mode login response carried no token.
    #[error("login response did not include a token")]
    MissingToken,
    /// Persisting the session failed.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ApiError {
    /// Message suitable for inline display.
    ///
    /// Validation text and server-supplied messages win; everything else
    /// falls back to `fallback`.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            Self::Unauthorized { message: Some(message) }
            | Self::Status { message: Some(message), .. } => message.clone(),
            _ => fallback.to_owned(),
        }
    }

    /// HTTP status carried by this error, if the backend produced one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { .. } => Some(401),
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

//! Failure taxonomy for backend calls.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here is fatal. `Display` output is the text pages show inline, so
//! every variant renders to something a clinician can act on.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

pub const CONNECTIVITY_MESSAGE: &str = "Connection to the JAGAT-X server failed";
pub const UNEXPECTED_RESPONSE_MESSAGE: &str = "Unexpected response from the JAGAT-X server";
pub const SERVER_ERROR_MESSAGE: &str = "The server could not complete the request";

/// Login failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The backend refused the identity/secret pair; carries its detail verbatim.
    #[error("{0}")]
    Rejected(String),
    /// The backend could not be reached or answered without a usable detail.
    #[error("{}", CONNECTIVITY_MESSAGE)]
    Unreachable,
    /// A 2xx response whose body did not match the login envelope schema.
    #[error("{}", UNEXPECTED_RESPONSE_MESSAGE)]
    MalformedResponse,
}

/// Failures from the analysis and audit endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed with status {status}")]
    Status { status: u16, detail: Option<String> },
    #[error("could not decode response: {0}")]
    Decode(String),
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Inline message for the UI: backend detail when present, else a generic one.
    pub fn message(&self) -> String {
        match self {
            Self::Network(_) => CONNECTIVITY_MESSAGE.to_owned(),
            Self::Status { detail, .. } => {
                detail.as_deref().unwrap_or(SERVER_ERROR_MESSAGE).to_owned()
            }
            Self::Decode(_) | Self::Unavailable => SERVER_ERROR_MESSAGE.to_owned(),
        }
    }
}

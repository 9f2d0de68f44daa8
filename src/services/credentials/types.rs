/*
 * Responsibility
 * - Types shared by the credential checks (expected pair, decoded pair, outcome)
 * - No HTTP framework knowledge here except the status an outcome maps to
 */
use std::fmt;

use axum::http::StatusCode;

/// The single client this service accepts.
///
/// Built once at startup from `Config` and injected into `CredentialValidator`.
#[derive(Clone, PartialEq, Eq)]
pub struct ExpectedCredentials {
    client_id: String,
    client_secret: String,
}

impl ExpectedCredentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }
}

// Never print the secret, even in debug logs of `Config`.
impl fmt::Debug for ExpectedCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExpectedCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

/// Username/password pair decoded from `Authorization: Basic ...`.
#[derive(Clone, PartialEq, Eq)]
pub struct BasicCredentials {
    pub username: String,
    pub secret: String,
}

impl fmt::Debug for BasicCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicCredentials")
            .field("username", &self.username)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// Why a Basic header could not be turned into `BasicCredentials`.
///
/// Only used for logging; callers collapse every variant into
/// `Validation::InvalidAuthorization`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BasicAuthError {
    #[error("authorization header is missing")]
    Missing,
    #[error("authorization scheme is not Basic")]
    MissingScheme,
    #[error("basic credentials are empty")]
    EmptyCredentials,
    #[error("basic credentials are not valid base64")]
    InvalidBase64,
    #[error("decoded credentials are not valid UTF-8")]
    InvalidUtf8,
    #[error("decoded credentials have no ':' separator")]
    MissingSeparator,
    #[error("client credentials do not match")]
    Mismatch,
}

/// Outcome of checking one token request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validation {
    Valid,
    InvalidClientId,
    InvalidAuthorization,
}

impl Validation {
    /// Status a rejected request is answered with; `None` when it passes.
    pub fn rejection_status(&self) -> Option<StatusCode> {
        match self {
            Self::Valid => None,
            Self::InvalidClientId => Some(StatusCode::BAD_REQUEST),
            Self::InvalidAuthorization => Some(StatusCode::UNAUTHORIZED),
        }
    }
}

//! Client credential validation for the token endpoint.
//!
//! Two layers:
//! - `check` returns a `Validation` and never touches a response. Middleware uses this.
//! - `validate_*` write the rejection status into a caller-supplied `Response`
//!   and return `bool`, for callers that own the response object themselves.
//!
//! `validate_access_token_request` is built on `check`, so both follow the
//! same order: `client_id` first, then the Basic header. A bad `client_id`
//! never looks at the header.

use axum::http::{HeaderMap, Request, Response, StatusCode, Uri, header};
use sha2::{Digest, Sha256};
use tracing::debug;

use super::types::{BasicAuthError, BasicCredentials, ExpectedCredentials, Validation};

const CLIENT_ID_PARAM: &str = "client_id";

#[derive(Debug, Clone)]
pub struct CredentialValidator {
    expected: ExpectedCredentials,
}

impl CredentialValidator {
    pub fn new(expected: ExpectedCredentials) -> Self {
        Self { expected }
    }

    pub fn expected_client_id(&self) -> &str {
        self.expected.client_id()
    }

    /// Run both checks in order without writing a response.
    pub fn check(&self, client_id: Option<&str>, authorization: Option<&str>) -> Validation {
        if !self.client_id_matches(client_id) {
            return Validation::InvalidClientId;
        }

        match self.verify_authorization(authorization) {
            Ok(()) => Validation::Valid,
            Err(reason) => {
                debug!(%reason, "basic credentials rejected");
                Validation::InvalidAuthorization
            }
        }
    }

    /// `true` iff `candidate` is exactly the expected client id.
    ///
    /// On mismatch the response status is set to 400.
    pub fn validate_client_id<B>(
        &self,
        candidate: Option<&str>,
        response: &mut Response<B>,
    ) -> bool {
        if self.client_id_matches(candidate) {
            return true;
        }
        *response.status_mut() = StatusCode::BAD_REQUEST;
        false
    }

    /// `true` iff the header is `Basic <base64(id:secret)>` carrying the expected pair.
    ///
    /// Malformed values of any kind are `false`.
    pub fn validate_authorization_header(&self, header_value: Option<&str>) -> bool {
        self.verify_authorization(header_value).is_ok()
    }

    /// Validate a token request, writing 400 (bad `client_id`) or 401 (bad
    /// credentials) into `response`. On success the response is left as-is.
    pub fn validate_access_token_request<B, R>(
        &self,
        request: &Request<B>,
        response: &mut Response<R>,
    ) -> bool {
        let client_id = client_id_param(request.uri());
        let outcome = self.check(client_id.as_deref(), authorization_header(request.headers()));

        match outcome.rejection_status() {
            Some(status) => {
                *response.status_mut() = status;
                false
            }
            None => true,
        }
    }

    fn client_id_matches(&self, candidate: Option<&str>) -> bool {
        candidate == Some(self.expected.client_id())
    }

    fn verify_authorization(&self, header_value: Option<&str>) -> Result<(), BasicAuthError> {
        let creds = BasicCredentials::parse(header_value.ok_or(BasicAuthError::Missing)?)?;

        let username_ok = creds.username == self.expected.client_id();
        let secret_ok = secrets_equal(&creds.secret, self.expected.client_secret());
        if username_ok && secret_ok {
            Ok(())
        } else {
            Err(BasicAuthError::Mismatch)
        }
    }
}

// Digests have a fixed length, so the comparison does not leak how many
// leading bytes of the secret matched.
fn secrets_equal(candidate: &str, expected: &str) -> bool {
    Sha256::digest(candidate.as_bytes()) == Sha256::digest(expected.as_bytes())
}

/// First `client_id` query parameter, percent-decoded.
pub(crate) fn client_id_param(uri: &Uri) -> Option<String> {
    let query = uri.query()?;
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == CLIENT_ID_PARAM)
        .map(|(_, value)| value.into_owned())
}

/// `Authorization` header as text. Non-visible-ASCII values are treated as absent.
pub(crate) fn authorization_header(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
}

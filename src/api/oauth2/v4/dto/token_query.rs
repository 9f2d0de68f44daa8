use serde::Deserialize;

/// Query string of `GET /oauth2/v4/token`, as seen by the handler.
///
/// `client_id` is checked by the client auth middleware before the handler
/// runs, so only `grant_type` is read here. It is echoed back, not validated.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenQuery {
    pub grant_type: Option<String>,
}

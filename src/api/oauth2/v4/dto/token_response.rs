use serde::Serialize;

/// Body returned once the client credentials were accepted.
#[derive(Debug, Clone, Serialize)]
pub struct TokenAccepted {
    pub client_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grant_type: Option<String>,
}

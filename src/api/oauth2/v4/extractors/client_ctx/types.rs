/*
 * Responsibility
 * - The "authenticated client" contract seen by handlers
 * - Middleware validates the credentials and stores this in request extensions;
 *   handlers only ever receive this type
 */

/// Context attached to a token request whose client credentials passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientCtx {
    pub client_id: String,
}

impl ClientCtx {
    pub fn new(client_id: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
        }
    }
}

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::AppError;
use crate::state::AppState;

use super::ClientCtx;

/// Extractor for `ClientCtx`.
///
/// Assumes `middleware::auth::client` already ran and inserted the context.
/// A missing context means the route was wired without that middleware,
/// which is a server bug rather than a client error.
pub struct ClientCtxExtractor(pub ClientCtx);

impl FromRequestParts<AppState> for ClientCtxExtractor
where
    AppState: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<ClientCtx>()
            .cloned()
            .map(ClientCtxExtractor)
            .ok_or_else(|| {
                tracing::error!("ClientCtx missing; client auth middleware not applied");
                AppError::Internal
            })
    }
}

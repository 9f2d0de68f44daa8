//! Client credential check for the token endpoint → `ClientCtx` in extensions.
//!
//! Order matters: `client_id` from the query string is checked first (400 on
//! mismatch), and only then the `Authorization: Basic` header (401).

use axum::{
    Router,
    body::Body,
    extract::State,
    http::Request,
    middleware::{self, Next},
    response::Response,
};

use crate::api::oauth2::v4::extractors::ClientCtx;
use crate::error::AppError;
use crate::services::credentials::{
    Validation,
    core::{authorization_header, client_id_param},
};
use crate::state::AppState;

/// Guard every route of `router` with the client credential check.
///
/// ```ignore
/// let token = Router::new().route("/token", get(token));
/// let token = middleware::auth::client::apply(token, state.clone());
/// ```
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    // route_layer: unknown paths stay 404 instead of turning into 400/401
    router.route_layer(middleware::from_fn_with_state(state, client_middleware))
}

async fn client_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let client_id = client_id_param(req.uri());
    let authorization = authorization_header(req.headers());

    match state.validator.check(client_id.as_deref(), authorization) {
        Validation::Valid => {}
        Validation::InvalidClientId => {
            tracing::warn!(
                has_client_id = client_id.is_some(),
                "token request rejected: unknown client_id"
            );
            return Err(AppError::InvalidClientId);
        }
        Validation::InvalidAuthorization => {
            tracing::warn!(
                has_authorization = authorization.is_some(),
                "token request rejected: client authentication failed"
            );
            return Err(AppError::InvalidAuthorization);
        }
    }

    let ctx = ClientCtx::new(state.validator.expected_client_id());

    // middleware → extractor
    req.extensions_mut().insert(ctx);

    Ok(next.run(req).await)
}

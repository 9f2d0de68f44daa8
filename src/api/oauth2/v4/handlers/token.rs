use axum::Json;
use axum::extract::Query;
use axum::http::StatusCode;

use crate::api::oauth2::v4::dto::{token_query::TokenQuery, token_response::TokenAccepted};
use crate::api::oauth2::v4::extractors::ClientCtxExtractor;

pub async fn token(
    ClientCtxExtractor(client): ClientCtxExtractor,
    Query(query): Query<TokenQuery>,
) -> (StatusCode, Json<TokenAccepted>) {
    tracing::info!(
        client_id = %client.client_id,
        grant_type = query.grant_type.as_deref().unwrap_or("-"),
        "token request accepted"
    );

    (
        StatusCode::OK,
        Json(TokenAccepted {
            client_id: client.client_id,
            grant_type: query.grant_type,
        }),
    )
}

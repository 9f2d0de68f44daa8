use axum::{Router, routing::get};

use crate::api::oauth2::v4::handlers::token::token;
use crate::middleware::auth::client;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    let router = Router::new().route("/token", get(token));

    client::apply(router, state)
}

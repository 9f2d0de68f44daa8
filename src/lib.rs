//! Client-credential gate for an OAuth2 token endpoint.
//!
//! `services::credentials` holds the checks; the rest wires them into an axum
//! service exposing `GET /oauth2/v4/token`.
pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod services;
pub mod state;

/*
 * Responsibility
 * - Public surface of the middleware layer
 * - http: cross-cutting transport concerns; auth: credential checks
 */
pub mod auth;
pub mod http;

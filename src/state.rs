/*
 * Responsibility
 * - Shared context attached to the Router (AppState)
 * - Cheap to clone; everything inside sits behind Arc
 */
use std::sync::Arc;

use crate::services::credentials::CredentialValidator;

#[derive(Clone, Debug)]
pub struct AppState {
    pub validator: Arc<CredentialValidator>,
}

impl AppState {
    pub fn new(validator: Arc<CredentialValidator>) -> Self {
        Self { validator }
    }
}

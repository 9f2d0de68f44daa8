pub mod basic;
pub mod core;
pub mod types;

pub use self::core::CredentialValidator;
pub use types::{ExpectedCredentials, Validation};

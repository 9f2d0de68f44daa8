//! `Authorization: Basic` decoding (RFC 7617).
//!
//! This only turns a header value into a username/secret pair. Comparing the
//! pair against the expected client lives in `core`.

use base64::{
    Engine as _, alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
};

use super::types::{BasicAuthError, BasicCredentials};

const BASIC_PREFIX: &str = "Basic ";

// Standard alphabet; trailing `=` padding is optional.
const CREDENTIALS_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

impl BasicCredentials {
    /// Decode `Basic <base64(username:secret)>`.
    ///
    /// The prefix is case-sensitive and must be followed by exactly one space.
    /// The decoded text is split on the first `:`, so the secret may itself
    /// contain colons. No trimming is applied to either segment.
    pub fn parse(header_value: &str) -> Result<Self, BasicAuthError> {
        let encoded = header_value
            .strip_prefix(BASIC_PREFIX)
            .ok_or(BasicAuthError::MissingScheme)?;

        if encoded.is_empty() {
            return Err(BasicAuthError::EmptyCredentials);
        }

        let bytes = CREDENTIALS_ENGINE
            .decode(encoded)
            .map_err(|_| BasicAuthError::InvalidBase64)?;
        let decoded = String::from_utf8(bytes).map_err(|_| BasicAuthError::InvalidUtf8)?;

        let (username, secret) = decoded
            .split_once(':')
            .ok_or(BasicAuthError::MissingSeparator)?;

        Ok(Self {
            username: username.to_string(),
            secret: secret.to_string(),
        })
    }
}

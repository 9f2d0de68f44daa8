/*
 * Responsibility
 * - Load settings from the environment (.env is honored via dotenvy)
 * - Validate them up front so a misconfigured process fails at startup
 */
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;
use std::{env, fmt};

use crate::services::credentials::ExpectedCredentials;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    fn parse(value: Option<String>) -> Self {
        match value
            .unwrap_or_else(|| "development".to_string())
            .to_ascii_lowercase()
            .as_str()
        {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "missing configuration: {}", key),
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Limits applied to every request by `middleware::http`.
#[derive(Debug, Clone, Copy)]
pub struct HttpLimits {
    pub request_timeout: Duration,
    pub body_limit_bytes: usize,
}

impl Default for HttpLimits {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(30),
            body_limit_bytes: 1024 * 1024,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,
    // The one client allowed to call the token endpoint
    pub credentials: ExpectedCredentials,
    pub http: HttpLimits,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key/value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port: u16 = parse_or(&lookup, "PORT", 3000)?;
        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let app_env = AppEnv::parse(lookup("APP_ENV"));

        let client_id = required(&lookup, "OAUTH_CLIENT_ID")?;
        let client_secret = required(&lookup, "OAUTH_CLIENT_SECRET")?;

        let defaults = HttpLimits::default();
        let timeout_seconds: u64 = parse_or(
            &lookup,
            "REQUEST_TIMEOUT_SECONDS",
            defaults.request_timeout.as_secs(),
        )?;
        if timeout_seconds == 0 {
            return Err(ConfigError::Invalid("REQUEST_TIMEOUT_SECONDS"));
        }
        let body_limit_bytes: usize =
            parse_or(&lookup, "REQUEST_BODY_LIMIT_BYTES", defaults.body_limit_bytes)?;

        Ok(Self {
            addr,
            app_env,
            credentials: ExpectedCredentials::new(client_id, client_secret),
            http: HttpLimits {
                request_timeout: Duration::from_secs(timeout_seconds),
                body_limit_bytes,
            },
        })
    }
}

fn required<F>(lookup: &F, key: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let value = lookup(key).ok_or(ConfigError::Missing(key))?;
    if value.is_empty() {
        return Err(ConfigError::Invalid(key));
    }
    Ok(value)
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid(key)),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    const MINIMAL: &[(&str, &str)] = &[
        ("OAUTH_CLIENT_ID", "client"),
        ("OAUTH_CLIENT_SECRET", "secret"),
    ];

    #[test]
    fn minimal_config_uses_defaults() {
        let config = Config::from_lookup(lookup_from(MINIMAL)).unwrap();
        assert_eq!(config.addr.port(), 3000);
        assert_eq!(config.app_env, AppEnv::Development);
        assert_eq!(config.credentials, ExpectedCredentials::new("client", "secret"));
        assert_eq!(config.http.request_timeout, Duration::from_secs(30));
        assert_eq!(config.http.body_limit_bytes, 1024 * 1024);
    }

    #[test]
    fn overrides_are_applied() {
        let mut pairs = MINIMAL.to_vec();
        pairs.extend([
            ("PORT", "8080"),
            ("APP_ENV", "PROD"),
            ("REQUEST_TIMEOUT_SECONDS", "5"),
            ("REQUEST_BODY_LIMIT_BYTES", "2048"),
        ]);
        let config = Config::from_lookup(lookup_from(&pairs)).unwrap();
        assert_eq!(config.addr.port(), 8080);
        assert!(config.app_env.is_production());
        assert_eq!(config.http.request_timeout, Duration::from_secs(5));
        assert_eq!(config.http.body_limit_bytes, 2048);
    }

    #[test]
    fn credentials_are_required() {
        let err = Config::from_lookup(lookup_from(&[("OAUTH_CLIENT_SECRET", "s")])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("OAUTH_CLIENT_ID"));

        let err = Config::from_lookup(lookup_from(&[("OAUTH_CLIENT_ID", "c")])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("OAUTH_CLIENT_SECRET"));

        let err = Config::from_lookup(lookup_from(&[
            ("OAUTH_CLIENT_ID", ""),
            ("OAUTH_CLIENT_SECRET", "s"),
        ]))
        .unwrap_err();
        assert_eq!(err, ConfigError::Invalid("OAUTH_CLIENT_ID"));
    }

    #[test]
    fn unparsable_numbers_are_rejected() {
        let mut pairs = MINIMAL.to_vec();
        pairs.push(("PORT", "not-a-port"));
        let err = Config::from_lookup(lookup_from(&pairs)).unwrap_err();
        assert_eq!(err, ConfigError::Invalid("PORT"));

        let mut pairs = MINIMAL.to_vec();
        pairs.push(("REQUEST_TIMEOUT_SECONDS", "0"));
        let err = Config::from_lookup(lookup_from(&pairs)).unwrap_err();
        assert_eq!(err, ConfigError::Invalid("REQUEST_TIMEOUT_SECONDS"));
    }

    #[test]
    fn debug_does_not_leak_secret() {
        let mut pairs = MINIMAL.to_vec();
        pairs[1] = ("OAUTH_CLIENT_SECRET", "very-private-value");
        let config = Config::from_lookup(lookup_from(&pairs)).unwrap();
        assert!(!format!("{config:?}").contains("very-private-value"));
    }
}

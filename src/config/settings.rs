//! Runtime settings read from the environment.

use std::env;

use thiserror::Error;

use super::constants::{
    DEFAULT_CORS_ORIGINS, DEFAULT_DATABASE_URL, DEFAULT_JWT_EXPIRATION_HOURS, DEV_JWT_SECRET,
    MIN_JWT_SECRET_LENGTH,
};

/// Problems with the process environment, reported before anything starts
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("JWT_SECRET must be set in release builds")]
    MissingJwtSecret,

    #[error("JWT_SECRET must be at least {} characters long", MIN_JWT_SECRET_LENGTH)]
    JwtSecretTooShort,

    #[error("{name} has an invalid value: {value:?}")]
    InvalidValue { name: &'static str, value: String },
}

/// Settings shared by every command
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    jwt_secret: String,
    pub jwt_expiration_hours: i64,
    /// Browser origins allowed to call the API
    pub cors_origins: Vec<String>,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .field("jwt_secret", &"[REDACTED]")
            .field("jwt_expiration_hours", &self.jwt_expiration_hours)
            .field("cors_origins", &self.cors_origins)
            .finish()
    }
}

impl Config {
    /// Read `.env` (if present) and the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let jwt_secret = match lookup("JWT_SECRET") {
            Some(secret) => secret,
            None if cfg!(debug_assertions) => {
                tracing::warn!("JWT_SECRET not set, using insecure development secret");
                DEV_JWT_SECRET.to_string()
            }
            None => return Err(ConfigError::MissingJwtSecret),
        };
        if jwt_secret.len() < MIN_JWT_SECRET_LENGTH {
            return Err(ConfigError::JwtSecretTooShort);
        }

        let jwt_expiration_hours = match lookup("JWT_EXPIRATION_HOURS") {
            None => DEFAULT_JWT_EXPIRATION_HOURS,
            Some(value) => value
                .parse()
                .ok()
                .filter(|hours: &i64| *hours > 0)
                .ok_or(ConfigError::InvalidValue {
                    name: "JWT_EXPIRATION_HOURS",
                    value,
                })?,
        };

        Ok(Self {
            database_url: lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            jwt_secret,
            jwt_expiration_hours,
            cors_origins: parse_origins(
                &lookup("CORS_ORIGINS").unwrap_or_else(|| DEFAULT_CORS_ORIGINS.to_string()),
            ),
        })
    }

    /// Defaults plus an explicit signing secret; the secret is not length-checked.
    pub fn with_jwt_secret(jwt_secret: impl Into<String>) -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            jwt_secret: jwt_secret.into(),
            jwt_expiration_hours: DEFAULT_JWT_EXPIRATION_HOURS,
            cors_origins: parse_origins(DEFAULT_CORS_ORIGINS),
        }
    }

    pub fn jwt_secret_bytes(&self) -> &[u8] {
        self.jwt_secret.as_bytes()
    }
}

fn parse_origins(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    const SECRET: &str = "a-perfectly-long-signing-secret-0123";

    #[test]
    fn test_defaults() {
        let config = load(&[("JWT_SECRET", SECRET)]).unwrap();

        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.jwt_expiration_hours, DEFAULT_JWT_EXPIRATION_HOURS);
        assert_eq!(config.jwt_secret_bytes(), SECRET.as_bytes());
    }

    #[test]
    fn test_cors_origins_split() {
        let config = load(&[
            ("JWT_SECRET", SECRET),
            ("CORS_ORIGINS", "https://app.example.com, http://localhost:5173,,"),
        ])
        .unwrap();

        assert_eq!(
            config.cors_origins,
            vec!["https://app.example.com", "http://localhost:5173"]
        );
    }

    #[test]
    fn test_short_secret_rejected() {
        assert_eq!(
            load(&[("JWT_SECRET", "short")]).unwrap_err(),
            ConfigError::JwtSecretTooShort
        );
    }

    #[test]
    fn test_bad_expiration_rejected() {
        let err = load(&[("JWT_SECRET", SECRET), ("JWT_EXPIRATION_HOURS", "soon")]).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { name: "JWT_EXPIRATION_HOURS", .. }
        ));

        let err = load(&[("JWT_SECRET", SECRET), ("JWT_EXPIRATION_HOURS", "0")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_debug_build_falls_back_to_dev_secret() {
        if cfg!(debug_assertions) {
            let config = load(&[]).unwrap();
            assert_eq!(config.jwt_secret_bytes(), DEV_JWT_SECRET.as_bytes());
        }
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = Config::with_jwt_secret("super-secret-signing-key-of-32-chars");
        let rendered = format!("{:?}", config);

        assert!(rendered.contains("[REDACTED]"));
        assert!(!rendered.contains("super-secret"));
    }
}

//! Authentication configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::result::AppResult;

/// Secrets that ship in sample configs and must never sign real tokens.
const PLACEHOLDER_SECRETS: &[&str] = &["change_this_to_a_strong_secret", "CHANGE_ME_IN_PRODUCTION"];

/// Authentication and credential configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256). Required; there is no default.
    #[serde(default)]
    pub jwt_secret: String,
    /// Token lifetime: `"1d"`, `"12h"`, `"30m"`, `"45s"` or plain seconds.
    #[serde(default = "default_token_ttl")]
    pub token_ttl: String,
    /// Minimum password length.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::new(),
            token_ttl: default_token_ttl(),
            password_min_length: default_password_min(),
        }
    }
}

impl AuthConfig {
    /// Parsed token lifetime.
    pub fn token_ttl(&self) -> AppResult<Duration> {
        parse_duration(&self.token_ttl)
    }

    /// Rejects a missing or placeholder signing secret.
    pub fn validate(&self) -> AppResult<()> {
        let secret = self.jwt_secret.trim();
        if secret.is_empty() {
            return Err(AppError::configuration(
                "auth.jwt_secret is not set; refusing to start without a signing secret",
            ));
        }
        if PLACEHOLDER_SECRETS.contains(&secret) {
            return Err(AppError::configuration(
                "auth.jwt_secret is a placeholder value; configure a real secret",
            ));
        }
        self.token_ttl()?;
        Ok(())
    }
}

/// Parses `"<n>"`, `"<n>s"`, `"<n>m"`, `"<n>h"` or `"<n>d"` into a duration.
pub fn parse_duration(raw: &str) -> AppResult<Duration> {
    let raw = raw.trim();
    let invalid = || AppError::configuration(format!("Invalid duration: '{raw}'"));

    let (digits, multiplier) = match raw.char_indices().last() {
        Some((idx, 's')) => (&raw[..idx], 1),
        Some((idx, 'm')) => (&raw[..idx], 60),
        Some((idx, 'h')) => (&raw[..idx], 3_600),
        Some((idx, 'd')) => (&raw[..idx], 86_400),
        Some(_) => (raw, 1),
        None => return Err(invalid()),
    };

    let value: u64 = digits.trim().parse().map_err(|_| invalid())?;
    if value == 0 {
        return Err(invalid());
    }

    let secs = value.checked_mul(multiplier).ok_or_else(invalid)?;
    Ok(Duration::from_secs(secs))
}

fn default_token_ttl() -> String {
    "1d".to_string()
}

fn default_password_min() -> usize {
    3
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_duration_units() {
        assert_eq!(parse_duration("1d").unwrap(), Duration::from_secs(86_400));
        assert_eq!(parse_duration("12h").unwrap(), Duration::from_secs(43_200));
        assert_eq!(parse_duration("30m").unwrap(), Duration::from_secs(1_800));
        assert_eq!(parse_duration("45s").unwrap(), Duration::from_secs(45));
        assert_eq!(parse_duration("3600").unwrap(), Duration::from_secs(3_600));
    }

    #[test]
    fn test_parse_duration_rejects_garbage() {
        assert!(parse_duration("").is_err());
        assert!(parse_duration("0").is_err());
        assert!(parse_duration("1w").is_err());
        assert!(parse_duration("d").is_err());
    }

    #[test]
    fn test_parse_duration_rejects_overflow() {
        assert!(parse_duration("999999999999999d").is_err());
        assert!(parse_duration(&format!("{}h", u64::MAX)).is_err());
        assert_eq!(
            parse_duration("213503982334601h").unwrap(),
            Duration::from_secs(213_503_982_334_601 * 3600)
        );
    }

    #[test]
    fn test_missing_secret_fails_validation() {
        let config = AuthConfig::default();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_placeholder_secret_fails_validation() {
        let config = AuthConfig {
            jwt_secret: "change_this_to_a_strong_secret".to_string(),
            ..AuthConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_real_secret_passes_validation() {
        let config = AuthConfig {
            jwt_secret: "7f3c1d0e9b8a4c2e".to_string(),
            ..AuthConfig::default()
        };
        assert!(config.validate().is_ok());
    }
}

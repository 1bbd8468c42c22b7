//! Opaque credentials issued by the remote API on login
//!
//! Both token kinds wrap a [`SecretString`] so they are redacted from `Debug`
//! output and therefore from the traces.

use secrecy::{ExposeSecret, SecretString};
use std::fmt::Debug;

#[derive(Clone, serde::Deserialize)]
pub struct AccessToken(SecretString);

#[derive(Clone, serde::Deserialize)]
pub struct RefreshToken(SecretString);

/// The tokens returned together by a successful login. They are always stored
/// and cleared as a pair.
#[derive(Clone, Debug)]
pub struct TokenPair {
    pub access: AccessToken,
    pub refresh: RefreshToken,
}

/// What was found in durable storage. Either slot may be missing.
#[derive(Clone, Debug, Default)]
pub struct StoredTokens {
    pub access: Option<AccessToken>,
    pub refresh: Option<RefreshToken>,
}

impl AccessToken {
    pub fn expose_secret(&self) -> &str {
        self.0.expose_secret()
    }

    /// Value for the `Authorization` header
    pub fn bearer_header_value(&self) -> String {
        format!("Bearer {}", self.expose_secret())
    }
}

impl RefreshToken {
    pub fn expose_secret(&self) -> &str {
        self.0.expose_secret()
    }
}

impl From<String> for AccessToken {
    fn from(value: String) -> Self {
        Self(value.into())
    }
}

impl From<String> for RefreshToken {
    fn from(value: String) -> Self {
        Self(value.into())
    }
}

impl Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AccessToken([REDACTED])")
    }
}

impl Debug for RefreshToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RefreshToken([REDACTED])")
    }
}

impl From<TokenPair> for StoredTokens {
    fn from(value: TokenPair) -> Self {
        Self {
            access: Some(value.access),
            refresh: Some(value.refresh),
        }
    }
}

impl StoredTokens {
    pub fn has_access_token(&self) -> bool {
        self.access.is_some()
    }
}

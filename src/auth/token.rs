//! Access token values returned by the OAuth endpoints.

use crate::types::string_or_number;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// An OAuth access token.
///
/// Owned by the caller and passed into each authenticated call. `Debug`
/// never prints the value.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AccessToken").field(&"[REDACTED]").finish()
    }
}

impl From<String> for AccessToken {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for AccessToken {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Result of exchanging an authorization code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortLivedToken {
    pub access_token: AccessToken,
    #[serde(deserialize_with = "string_or_number")]
    pub user_id: String,
}

/// Result of exchanging or refreshing into a long-lived token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LongLivedToken {
    pub access_token: AccessToken,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
    /// Lifetime in seconds as reported by the server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<u64>,
    /// Expiration timestamp (milliseconds since epoch), computed on receipt.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<u64>,
}

impl LongLivedToken {
    /// Stamp `expires_at` from `expires_in` relative to `now_ms`.
    pub(crate) fn stamped(mut self, now_ms: u64) -> Self {
        self.expires_at = self
            .expires_in
            .map(|secs| now_ms.saturating_add(secs.saturating_mul(1000)));
        self
    }

    /// Check if the token is expired. Tokens without an expiry never are.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|at| now_millis() >= at)
    }

    /// Check if the token expires within `window`, e.g. to schedule a refresh.
    #[must_use]
    pub fn expires_within(&self, window: Duration) -> bool {
        let Some(expires_at) = self.expires_at else {
            return false;
        };
        #[allow(clippy::cast_possible_truncation)]
        let window_ms = window.as_millis() as u64;
        expires_at.saturating_sub(now_millis()) < window_ms
    }
}

#[allow(clippy::cast_possible_truncation)] // ms since epoch won't overflow u64
pub(crate) fn now_millis() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

//! Access token signing.
//!
//! Tokens are JWTs signed with the HMAC secret shared between this bridge and
//! the gateway server, which verifies them on connect/subscribe. Two scopes
//! exist: whole-connection tokens and per-channel subscription tokens.
//! Nothing is persisted here; verification is the server's job.

use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

/// Token signing errors.
#[derive(Debug, Error)]
pub enum TokenError {
    /// No signing secret configured.
    #[error("token signing secret is not configured")]
    MissingSecret,

    /// The JWT library rejected the claims or key.
    #[error("token encoding failed: {0}")]
    Encode(#[from] jsonwebtoken::errors::Error),
}

/// Claims for a whole-connection token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionClaims {
    /// Subject: the user identifier, empty for anonymous connections.
    pub sub: String,
    /// Expiration as a unix timestamp; omitted for non-expiring tokens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<u64>,
    /// Issued-at unix timestamp.
    pub iat: u64,
    /// Extra info attached to the connection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<Value>,
    /// Channels the connection may subscribe to without further checks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channels: Option<Vec<String>>,
}

/// Claims for a per-channel subscription token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscriptionClaims {
    /// Subject: the user identifier.
    pub sub: String,
    /// The channel the token is bound to, exactly as the client addressed it.
    pub channel: String,
    /// Expiration as a unix timestamp; omitted for non-expiring tokens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<u64>,
    /// Issued-at unix timestamp.
    pub iat: u64,
    /// Extra info attached to the subscription.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<Value>,
}

/// Signs access tokens with the gateway's shared secret.
pub struct TokenIssuer {
    key: EncodingKey,
    header: Header,
}

impl TokenIssuer {
    /// Create an issuer from the shared HMAC secret.
    ///
    /// # Errors
    ///
    /// Fails with `MissingSecret` when the secret is empty.
    pub fn new(secret: &str) -> Result<Self, TokenError> {
        if secret.is_empty() {
            return Err(TokenError::MissingSecret);
        }

        Ok(Self {
            key: EncodingKey::from_secret(secret.as_bytes()),
            header: Header::new(Algorithm::HS256),
        })
    }

    /// Sign a whole-connection token.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding fails.
    pub fn connection_token(
        &self,
        user: &str,
        exp: u64,
        info: Option<Value>,
        channels: Option<Vec<String>>,
    ) -> Result<String, TokenError> {
        let claims = ConnectionClaims {
            sub: user.to_string(),
            exp: expiry(exp),
            iat: now(),
            info,
            channels,
        };

        Ok(encode(&self.header, &claims, &self.key)?)
    }

    /// Sign a per-channel subscription token.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding fails.
    pub fn subscription_token(
        &self,
        user: &str,
        channel: &str,
        exp: u64,
        info: Option<Value>,
    ) -> Result<String, TokenError> {
        let claims = SubscriptionClaims {
            sub: user.to_string(),
            channel: channel.to_string(),
            exp: expiry(exp),
            iat: now(),
            info,
        };

        Ok(encode(&self.header, &claims, &self.key)?)
    }
}

/// A zero expiration means the token does not expire.
fn expiry(exp: u64) -> Option<u64> {
    (exp > 0).then_some(exp)
}

fn now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs()
}

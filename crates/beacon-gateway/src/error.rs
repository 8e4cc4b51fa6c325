//! Gateway error types.

use crate::token::TokenError;
use beacon_core::NamespaceError;
use beacon_transport::TransportError;
use thiserror::Error;

/// Errors surfaced by the access gateway.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The canonical channel name is empty or unusable.
    #[error("invalid channel name: {0:?}")]
    InvalidChannelName(String),

    /// Access denied: guarded channel without an identity, or the host
    /// policy refused.
    #[error("access to channel denied")]
    Forbidden,

    /// Token signing failed.
    #[error("token issuance failed: {0}")]
    TokenIssuance(#[from] TokenError),

    /// The namespace prefixes in the configuration are unusable.
    #[error("invalid namespace configuration: {0}")]
    Namespace(#[from] NamespaceError),

    /// The server accepted the call but answered with an error payload.
    #[error("broadcast rejected by server: {message}")]
    Broadcast {
        /// Server-provided message, verbatim.
        message: String,
    },

    /// The call never completed or the response was unusable.
    #[error("transport failure: {0}")]
    Transport(#[from] TransportError),
}

impl GatewayError {
    /// Whether this error must map to an access-denied response at the
    /// host's request boundary.
    #[must_use]
    pub fn is_access_denied(&self) -> bool {
        matches!(self, Self::InvalidChannelName(_) | Self::Forbidden)
    }
}

//! Injected authorization capabilities.
//!
//! The broadcaster gates entry to the host's channel policy; it never
//! implements the policy itself. Both capabilities receive the canonical
//! (prefix-stripped) channel name.

use crate::error::GatewayError;
use async_trait::async_trait;
use beacon_core::{Identity, RequestContext};
use serde::Serialize;
use serde_json::Value;

/// Host-side identity resolution.
#[async_trait]
pub trait IdentityResolver: Send + Sync {
    /// Resolve the identity behind a request, if any.
    ///
    /// `None` means the request is anonymous, which is a valid state:
    /// guarded tiers reject it before the policy ever runs, public tiers
    /// proceed without it.
    async fn resolve(&self, ctx: &RequestContext, channel: &str) -> Option<Identity>;
}

/// Host-side per-channel access policy.
#[async_trait]
pub trait ChannelPolicy: Send + Sync {
    /// Decide whether this request may access the channel.
    ///
    /// The broadcaster returns the outcome unchanged.
    async fn allows(&self, ctx: &RequestContext, channel: &str)
        -> Result<AuthGrant, GatewayError>;
}

/// A successful authorization outcome.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AuthGrant {
    /// Optional member payload supplied by the policy (e.g. presence info).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<Value>,
}

impl AuthGrant {
    /// A plain grant with no member payload.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A grant carrying a member payload.
    #[must_use]
    pub fn with_info(info: Value) -> Self {
        Self { info: Some(info) }
    }
}

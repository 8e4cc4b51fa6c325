//! The access gateway: channel authorization and event dispatch.
//!
//! `Broadcaster` sits between the host application and the pub/sub gateway
//! server. It gates channel access, issues subscription tokens, and fans a
//! single event out to a set of channels in one batched server call.

use crate::auth::{AuthGrant, ChannelPolicy, IdentityResolver};
use crate::config::GatewayConfig;
use crate::error::GatewayError;
use crate::metrics;
use crate::token::TokenIssuer;
use beacon_core::{classify, validate_channel_name, Identity, NamespaceConfig, RequestContext};
use beacon_transport::Transport;
use serde::Serialize;
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Reserved payload key carrying the event name.
const EVENT_KEY: &str = "event";

/// Response structure for a granted channel token, shaped for direct
/// serialization back to the requesting client.
#[derive(Debug, Clone, Serialize)]
pub struct ChannelTokenGrant {
    /// The raw channel name the token is scoped to.
    pub channel: String,
    /// The signed token.
    pub token: String,
}

/// The access gateway between the host application and the pub/sub server.
///
/// Holds only immutable configuration and shared capabilities, so one
/// instance can serve any number of concurrent requests.
pub struct Broadcaster {
    transport: Arc<dyn Transport>,
    identities: Arc<dyn IdentityResolver>,
    policy: Arc<dyn ChannelPolicy>,
    tokens: TokenIssuer,
    namespaces: Option<NamespaceConfig>,
}

impl Broadcaster {
    /// Build a broadcaster from configuration and injected capabilities.
    ///
    /// # Errors
    ///
    /// Fails when the token secret is missing or the namespace prefixes
    /// collide.
    pub fn new(
        config: &GatewayConfig,
        transport: Arc<dyn Transport>,
        identities: Arc<dyn IdentityResolver>,
        policy: Arc<dyn ChannelPolicy>,
    ) -> Result<Self, GatewayError> {
        let tokens = TokenIssuer::new(&config.token_secret)?;
        let namespaces = config.namespace_config()?;

        Ok(Self {
            transport,
            identities,
            policy,
            tokens,
            namespaces,
        })
    }

    /// Authorize a request against a channel.
    ///
    /// Guarded tiers require a resolved identity before the host policy is
    /// consulted; the policy outcome is returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns `Forbidden` for an empty canonical name or an anonymous
    /// request on a guarded channel, and whatever the host policy returns
    /// otherwise.
    pub async fn authorize(
        &self,
        raw_channel: &str,
        ctx: &RequestContext,
    ) -> Result<AuthGrant, GatewayError> {
        let class = classify(raw_channel, self.namespaces.as_ref());

        if class.canonical.is_empty() {
            debug!(channel = %raw_channel, "Authorization denied: empty canonical name");
            metrics::record_denied("invalid_channel");
            return Err(GatewayError::Forbidden);
        }

        if class.tier.is_guarded()
            && self
                .identities
                .resolve(ctx, &class.canonical)
                .await
                .is_none()
        {
            debug!(
                channel = %raw_channel,
                tier = ?class.tier,
                "Authorization denied: no identity for guarded channel"
            );
            metrics::record_denied("anonymous");
            return Err(GatewayError::Forbidden);
        }

        self.policy.allows(ctx, &class.canonical).await
    }

    /// Issue a subscription token for a channel.
    ///
    /// The channel and identity are revalidated rather than assuming
    /// [`authorize`](Self::authorize) ran first. The token binds the raw
    /// channel name: the subscriber presents it for the channel exactly as
    /// the client addressed it.
    ///
    /// # Errors
    ///
    /// Returns `InvalidChannelName` for an unusable canonical name,
    /// `Forbidden` when no identity resolves, `TokenIssuance` when signing
    /// fails.
    pub async fn issue_channel_token(
        &self,
        raw_channel: &str,
        ctx: &RequestContext,
    ) -> Result<ChannelTokenGrant, GatewayError> {
        let class = classify(raw_channel, self.namespaces.as_ref());
        validate_channel_name(&class.canonical)
            .map_err(|_| GatewayError::InvalidChannelName(raw_channel.to_string()))?;

        let identity = self
            .identities
            .resolve(ctx, &class.canonical)
            .await
            .ok_or(GatewayError::Forbidden)?;

        let token = self.tokens.subscription_token(
            identity.as_str(),
            raw_channel,
            ctx.token_exp,
            ctx.info.clone(),
        )?;

        debug!(channel = %raw_channel, user = %identity, "Issued subscription token");
        metrics::record_token_issued("subscription");

        Ok(ChannelTokenGrant {
            channel: raw_channel.to_string(),
            token,
        })
    }

    /// Issue a whole-connection token.
    ///
    /// `identity` may be absent for anonymous connections; `exp` of 0 means
    /// the token does not expire; `channels` optionally pre-authorizes a set
    /// of channels at connect time.
    ///
    /// # Errors
    ///
    /// Returns `TokenIssuance` when signing fails.
    pub fn issue_connection_token(
        &self,
        identity: Option<&Identity>,
        exp: u64,
        info: Option<Value>,
        channels: Option<Vec<String>>,
    ) -> Result<String, GatewayError> {
        let sub = identity.map(Identity::as_str).unwrap_or_default();
        let token = self.tokens.connection_token(sub, exp, info, channels)?;
        metrics::record_token_issued("connection");
        Ok(token)
    }

    /// Publish one event to a set of channels in a single batched call.
    ///
    /// An empty channel list is a valid no-op. Duplicate channels are passed
    /// through as given. The event name is merged into the payload under the
    /// reserved `event` key, overwriting any caller-supplied value. With
    /// namespace mode active every channel is rewritten before transmission.
    ///
    /// # Errors
    ///
    /// Returns `Broadcast` when the server answers with an error payload or
    /// an unexpected shape, `Transport` when the call never completes.
    pub async fn publish(
        &self,
        channels: &[String],
        event: &str,
        payload: Map<String, Value>,
    ) -> Result<(), GatewayError> {
        if channels.is_empty() {
            trace!(event = %event, "Publish with no target channels, skipping");
            return Ok(());
        }

        let mut payload = payload;
        payload.insert(EVENT_KEY.to_string(), Value::String(event.to_string()));

        let outbound: Vec<String> = match &self.namespaces {
            Some(ns) => channels.iter().map(|c| ns.rewrite_outbound(c)).collect(),
            None => channels.to_vec(),
        };

        debug!(event = %event, channels = outbound.len(), "Broadcasting event");
        let response = self
            .transport
            .broadcast(&outbound, Value::Object(payload), false)
            .await?;

        if let Some(message) = broadcast_failure(&response) {
            warn!(event = %event, error = %message, "Broadcast rejected by server");
            metrics::record_broadcast_error();
            return Err(GatewayError::Broadcast { message });
        }

        metrics::record_publish(outbound.len());
        Ok(())
    }
}

/// Evaluate a delivered server response.
///
/// Success is a JSON mapping without an `error` field; anything else fails,
/// carrying the server's message.
fn broadcast_failure(response: &Value) -> Option<String> {
    match response.as_object() {
        Some(map) => map.get("error").map(error_message),
        None => Some(format!("unexpected response shape: {response}")),
    }
}

/// Extract a readable message from an error value.
///
/// Fault objects carry a `message` field; any other value is rendered as-is.
fn error_message(error: &Value) -> String {
    if let Some(message) = error.get("message").and_then(Value::as_str) {
        return message.to_string();
    }
    match error {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

//! Transport abstraction for the gateway server API.
//!
//! The trait mirrors the remote server's command surface so the gateway core
//! can be driven against the real HTTP client or an in-memory test double.
//! Implementations return the decoded JSON body verbatim; interpreting an
//! `error` field inside a delivered body is the caller's concern.

use crate::command::StreamPosition;
use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Transport errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request timed out.
    #[error("request timed out")]
    Timeout,

    /// The request could not be sent or failed mid-flight.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered outside the 2xx range.
    #[error("unexpected status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, verbatim.
        body: String,
    },

    /// The response body was not valid JSON.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// Other error.
    #[error("{0}")]
    Other(String),
}

/// A client for the gateway server's command API.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send a message into a single channel.
    async fn publish(
        &self,
        channel: &str,
        data: Value,
        skip_history: bool,
    ) -> Result<Value, TransportError>;

    /// Send one message into multiple channels as a single batched call.
    async fn broadcast(
        &self,
        channels: &[String],
        data: Value,
        skip_history: bool,
    ) -> Result<Value, TransportError>;

    /// List clients currently subscribed to a channel.
    async fn presence(&self, channel: &str) -> Result<Value, TransportError>;

    /// Subscriber counts for a channel.
    async fn presence_stats(&self, channel: &str) -> Result<Value, TransportError>;

    /// Recent messages published into a channel.
    async fn history(
        &self,
        channel: &str,
        limit: u32,
        since: Option<StreamPosition>,
        reverse: bool,
    ) -> Result<Value, TransportError>;

    /// Drop the stored history for a channel.
    async fn history_remove(&self, channel: &str) -> Result<Value, TransportError>;

    /// Server-side subscribe of a user to a channel.
    async fn subscribe(
        &self,
        channel: &str,
        user: &str,
        client: Option<&str>,
    ) -> Result<Value, TransportError>;

    /// Server-side unsubscribe of a user from a channel.
    async fn unsubscribe(
        &self,
        channel: &str,
        user: &str,
        client: Option<&str>,
    ) -> Result<Value, TransportError>;

    /// Disconnect a user, optionally a single client connection.
    async fn disconnect(&self, user: &str, client: Option<&str>) -> Result<Value, TransportError>;

    /// List active channels, optionally filtered by a pattern.
    async fn channels(&self, pattern: Option<&str>) -> Result<Value, TransportError>;

    /// Information about the running server nodes.
    async fn info(&self) -> Result<Value, TransportError>;

    /// Get the transport name (e.g., "http").
    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_preserves_server_body() {
        let err = TransportError::Status {
            status: 403,
            body: "permission denied".to_string(),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("403"));
        assert!(rendered.contains("permission denied"));
    }
}

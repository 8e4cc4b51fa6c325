//! HTTP implementation of the gateway transport.
//!
//! Commands are POSTed to the server's API endpoint as JSON envelopes,
//! authenticated with an `Authorization: apikey ...` header.

use crate::command::{Command, StreamPosition};
use crate::traits::{Transport, TransportError};
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, trace};

/// Default API endpoint of a locally running gateway server.
const DEFAULT_API_URL: &str = "http://127.0.0.1:8000/api";

/// Default request deadline.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3);

/// Configuration for the HTTP transport.
#[derive(Debug, Clone)]
pub struct HttpTransportConfig {
    /// Full URL of the server's command endpoint.
    pub api_url: String,
    /// API key sent in the `Authorization` header.
    pub api_key: String,
    /// Request deadline; exceeding it surfaces as `TransportError::Timeout`.
    pub timeout: Duration,
}

impl Default for HttpTransportConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: String::new(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// HTTP command client for the gateway server.
pub struct HttpTransport {
    client: reqwest::Client,
    config: HttpTransportConfig,
}

impl HttpTransport {
    /// Build a transport with its own connection pool and deadline.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(config: HttpTransportConfig) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        debug!(api_url = %config.api_url, "HTTP transport ready");
        Ok(Self { client, config })
    }

    /// Send one command envelope and decode the response body.
    async fn send(&self, command: Command) -> Result<Value, TransportError> {
        trace!(method = command.method(), "Sending API command");

        let response = self
            .client
            .post(&self.config.api_url)
            .header("Authorization", format!("apikey {}", self.config.api_key))
            .json(&command)
            .send()
            .await
            .map_err(classify_reqwest_error)?;

        let status = response.status();
        let body = response.text().await.map_err(classify_reqwest_error)?;

        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| TransportError::MalformedResponse(e.to_string()))
    }
}

fn classify_reqwest_error(error: reqwest::Error) -> TransportError {
    if error.is_timeout() {
        TransportError::Timeout
    } else {
        TransportError::Request(error)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn publish(
        &self,
        channel: &str,
        data: Value,
        skip_history: bool,
    ) -> Result<Value, TransportError> {
        self.send(Command::publish(channel, data, skip_history)).await
    }

    async fn broadcast(
        &self,
        channels: &[String],
        data: Value,
        skip_history: bool,
    ) -> Result<Value, TransportError> {
        self.send(Command::broadcast(channels.to_vec(), data, skip_history))
            .await
    }

    async fn presence(&self, channel: &str) -> Result<Value, TransportError> {
        self.send(Command::presence(channel)).await
    }

    async fn presence_stats(&self, channel: &str) -> Result<Value, TransportError> {
        self.send(Command::presence_stats(channel)).await
    }

    async fn history(
        &self,
        channel: &str,
        limit: u32,
        since: Option<StreamPosition>,
        reverse: bool,
    ) -> Result<Value, TransportError> {
        self.send(Command::history(channel, limit, since, reverse))
            .await
    }

    async fn history_remove(&self, channel: &str) -> Result<Value, TransportError> {
        self.send(Command::history_remove(channel)).await
    }

    async fn subscribe(
        &self,
        channel: &str,
        user: &str,
        client: Option<&str>,
    ) -> Result<Value, TransportError> {
        self.send(Command::subscribe(channel, user, client.map(String::from)))
            .await
    }

    async fn unsubscribe(
        &self,
        channel: &str,
        user: &str,
        client: Option<&str>,
    ) -> Result<Value, TransportError> {
        self.send(Command::unsubscribe(channel, user, client.map(String::from)))
            .await
    }

    async fn disconnect(&self, user: &str, client: Option<&str>) -> Result<Value, TransportError> {
        self.send(Command::disconnect(user, client.map(String::from)))
            .await
    }

    async fn channels(&self, pattern: Option<&str>) -> Result<Value, TransportError> {
        self.send(Command::channels(pattern.map(String::from))).await
    }

    async fn info(&self) -> Result<Value, TransportError> {
        self.send(Command::info()).await
    }

    fn name(&self) -> &'static str {
        "http"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HttpTransportConfig::default();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
        assert!(config.api_key.is_empty());
    }

    #[test]
    fn test_transport_construction() {
        let transport = HttpTransport::new(HttpTransportConfig::default()).unwrap();
        assert_eq!(transport.name(), "http");
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_a_transport_error() {
        // Port 9 (discard) is not listening; the request must fail before
        // any body handling.
        let transport = HttpTransport::new(HttpTransportConfig {
            api_url: "http://127.0.0.1:9/api".to_string(),
            api_key: String::new(),
            timeout: Duration::from_millis(200),
        })
        .unwrap();

        let result = transport.info().await;
        assert!(matches!(
            result,
            Err(TransportError::Request(_) | TransportError::Timeout)
        ));
    }
}

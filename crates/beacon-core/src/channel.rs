//! Channel classification for Beacon.
//!
//! Raw channel names carry an access-tier prefix (`private-`, `presence-`) or,
//! in namespace mode, one of three configured namespace prefixes.
//! Classification maps a raw name to its tier and its canonical form with the
//! matched prefix stripped.

use crate::namespace::NamespaceConfig;
use serde::{Deserialize, Serialize};

/// Maximum channel name length accepted on the wire.
pub const MAX_CHANNEL_NAME_LENGTH: usize = 255;

/// Prefix marking encrypted private channels when namespace mode is off.
pub const PRIVATE_ENCRYPTED_PREFIX: &str = "private-encrypted-";

/// Prefix marking private channels when namespace mode is off.
pub const PRIVATE_PREFIX: &str = "private-";

/// Prefix marking presence channels when namespace mode is off.
pub const PRESENCE_PREFIX: &str = "presence-";

/// Validate a channel name.
///
/// # Errors
///
/// Returns an error message if the channel name is invalid.
pub fn validate_channel_name(name: &str) -> Result<(), &'static str> {
    if name.is_empty() {
        return Err("Channel name cannot be empty");
    }
    if name.len() > MAX_CHANNEL_NAME_LENGTH {
        return Err("Channel name too long");
    }
    // Check for valid ASCII printable characters
    if !name.chars().all(|c| c.is_ascii() && !c.is_ascii_control()) {
        return Err("Channel name contains invalid characters");
    }
    Ok(())
}

/// Access tier of a channel.
///
/// Every raw channel name maps to exactly one tier, derived from its prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessTier {
    /// Open to anonymous subscribers.
    Public,
    /// Requires a resolved identity and a signed subscription token.
    Private,
    /// Like private, with member state visible to subscribers.
    Presence,
}

impl AccessTier {
    /// Guarded tiers require a resolved identity before any policy check runs.
    #[must_use]
    pub fn is_guarded(self) -> bool {
        matches!(self, AccessTier::Private | AccessTier::Presence)
    }
}

/// Result of classifying a raw channel name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// Access tier derived from the name's prefix.
    pub tier: AccessTier,
    /// The name with the matched prefix stripped.
    pub canonical: String,
}

/// Classify a raw channel name into its access tier and canonical form.
///
/// With `namespaces` set, the configured prefixes are matched in the fixed
/// order default -> private -> presence and the first match determines both the
/// tier and the stripped prefix. Without it, the fixed literals are matched in
/// the order `private-encrypted-`, `private-`, `presence-`, each checked once,
/// first match wins; no match means the name is public and kept unchanged.
#[must_use]
pub fn classify(raw: &str, namespaces: Option<&NamespaceConfig>) -> Classification {
    if let Some(ns) = namespaces {
        return ns.classify(raw);
    }

    if let Some(rest) = raw.strip_prefix(PRIVATE_ENCRYPTED_PREFIX) {
        return Classification {
            tier: AccessTier::Private,
            canonical: rest.to_string(),
        };
    }
    if let Some(rest) = raw.strip_prefix(PRIVATE_PREFIX) {
        return Classification {
            tier: AccessTier::Private,
            canonical: rest.to_string(),
        };
    }
    if let Some(rest) = raw.strip_prefix(PRESENCE_PREFIX) {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_public() {
        let class = classify("news", None);
        assert_eq!(class.tier, AccessTier::Public);
        assert_eq!(class.canonical, "news");
    }

    #[test]
    fn test_classify_private() {
        let class = classify("private-room1", None);
        assert_eq!(class.tier, AccessTier::Private);
        assert_eq!(class.canonical, "room1");
    }

    #[test]
    fn test_classify_private_encrypted() {
        // The longer prefix is checked first, so the whole marker is stripped.
        let class = classify("private-encrypted-room1", None);
        assert_eq!(class.tier, AccessTier::Private);
        assert_eq!(class.canonical, "room1");
    }

    #[test]
    fn test_classify_presence() {
        let class = classify("presence-lobby", None);
        assert_eq!(class.tier, AccessTier::Presence);
        assert_eq!(class.canonical, "lobby");
    }

    #[test]
    fn test_classify_is_idempotent_on_canonical_names() {
        for raw in ["private-room1", "presence-lobby", "news"] {
            let first = classify(raw, None);
            let second = classify(&first.canonical, None);
            assert_eq!(second.canonical, first.canonical);
        }
    }

    #[test]
    fn test_prefix_must_lead_the_name() {
        // A tier marker in the middle of the name does not count.
        let class = classify("room-private-chat", None);
        assert_eq!(class.tier, AccessTier::Public);
        assert_eq!(class.canonical, "room-private-chat");
    }

    #[test]
    fn test_is_guarded() {
        assert!(!AccessTier::Public.is_guarded());
        assert!(AccessTier::Private.is_guarded());
        assert!(AccessTier::Presence.is_guarded());
    }

    #[test]
    fn test_channel_name_validation() {
        assert!(validate_channel_name("valid:channel").is_ok());
        assert!(validate_channel_name("").is_err());
        assert!(validate_channel_name("bad\nname").is_err());

        let long_name = "a".repeat(MAX_CHANNEL_NAME_LENGTH + 1);
        assert!(validate_channel_name(&long_name).is_err());
    }
}

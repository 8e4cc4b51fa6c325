//! Command envelopes for the gateway server API.
//!
//! Every call to the server is one JSON object of the form
//! `{"method": "...", "params": {...}}`. The `Command` enum models that
//! envelope; serde's tag/content attributes produce the wire shape directly.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Position in a channel's message stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamPosition {
    /// Offset within the epoch.
    pub offset: u64,
    /// Epoch identifier assigned by the server.
    pub epoch: String,
}

/// An API command envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", content = "params", rename_all = "snake_case")]
pub enum Command {
    /// Send a message into a single channel.
    Publish {
        /// Target channel.
        channel: String,
        /// Message payload.
        data: Value,
        /// Skip history storage for this message.
        skip_history: bool,
    },

    /// Send one message into multiple channels.
    Broadcast {
        /// Target channels, transmitted as given.
        channels: Vec<String>,
        /// Message payload.
        data: Value,
        /// Skip history storage for this message.
        skip_history: bool,
    },

    /// List clients subscribed to a channel.
    Presence {
        /// Channel name.
        channel: String,
    },

    /// Subscriber counts for a channel.
    PresenceStats {
        /// Channel name.
        channel: String,
    },

    /// Recent messages published into a channel.
    History {
        /// Channel name.
        channel: String,
        /// Maximum number of messages to return (0 = server default).
        limit: u32,
        /// Only messages after this position.
        #[serde(skip_serializing_if = "Option::is_none")]
        since: Option<StreamPosition>,
        /// Iterate from newest to oldest.
        reverse: bool,
    },

    /// Drop the stored history for a channel.
    HistoryRemove {
        /// Channel name.
        channel: String,
    },

    /// Server-side subscribe of a user to a channel.
    Subscribe {
        /// Channel name.
        channel: String,
        /// User identifier.
        user: String,
        /// Restrict to a single client connection.
        #[serde(skip_serializing_if = "Option::is_none")]
        client: Option<String>,
    },

    /// Server-side unsubscribe of a user from a channel.
    Unsubscribe {
        /// Channel name.
        channel: String,
        /// User identifier.
        user: String,
        /// Restrict to a single client connection.
        #[serde(skip_serializing_if = "Option::is_none")]
        client: Option<String>,
    },

    /// Disconnect a user.
    Disconnect {
        /// User identifier.
        user: String,
        /// Restrict to a single client connection.
        #[serde(skip_serializing_if = "Option::is_none")]
        client: Option<String>,
    },

    /// List active channels.
    Channels {
        /// Optional name pattern.
        #[serde(skip_serializing_if = "Option::is_none")]
        pattern: Option<String>,
    },

    /// Information about the running server nodes.
    Info {},
}

impl Command {
    /// The wire method name of this command.
    #[must_use]
    pub fn method(&self) -> &'static str {
        match self {
            Command::Publish { .. } => "publish",
            Command::Broadcast { .. } => "broadcast",
            Command::Presence { .. } => "presence",
            Command::PresenceStats { .. } => "presence_stats",
            Command::History { .. } => "history",
            Command::HistoryRemove { .. } => "history_remove",
            Command::Subscribe { .. } => "subscribe",
            Command::Unsubscribe { .. } => "unsubscribe",
            Command::Disconnect { .. } => "disconnect",
            Command::Channels { .. } => "channels",
            Command::Info {} => "info",
        }
    }

    /// Create a new Publish command.
    #[must_use]
    pub fn publish(channel: impl Into<String>, data: Value, skip_history: bool) -> Self {
        Command::Publish {
            channel: channel.into(),
            data,
            skip_history,
        }
    }

    /// Create a new Broadcast command.
    #[must_use]
    pub fn broadcast(channels: Vec<String>, data: Value, skip_history: bool) -> Self {
        Command::Broadcast {
            channels,
            data,
            skip_history,
        }
    }

    /// Create a new Presence command.
    #[must_use]
    pub fn presence(channel: impl Into<String>) -> Self {
        Command::Presence {
            channel: channel.into(),
        }
    }

    /// Create a new PresenceStats command.
    #[must_use]
    pub fn presence_stats(channel: impl Into<String>) -> Self {
        Command::PresenceStats {
            channel: channel.into(),
        }
    }

    /// Create a new History command.
    #[must_use]
    pub fn history(
        channel: impl Into<String>,
        limit: u32,
        since: Option<StreamPosition>,
        reverse: bool,
    ) -> Self {
        Command::History {
            channel: channel.into(),
            limit,
            since,
            reverse,
        }
    }

    /// Create a new HistoryRemove command.
    #[must_use]
    pub fn history_remove(channel: impl Into<String>) -> Self {
        Command::HistoryRemove {
            channel: channel.into(),
        }
    }

    /// Create a new Subscribe command.
    #[must_use]
    pub fn subscribe(
        channel: impl Into<String>,
        user: impl Into<String>,
        client: Option<String>,
    ) -> Self {
        Command::Subscribe {
            channel: channel.into(),
            user: user.into(),
            client,
        }
    }

    /// Create a new Unsubscribe command.
    #[must_use]
    pub fn unsubscribe(
        channel: impl Into<String>,
        user: impl Into<String>,
        client: Option<String>,
    ) -> Self {
        Command::Unsubscribe {
            channel: channel.into(),
            user: user.into(),
            client,
        }
    }

    /// Create a new Disconnect command.
    #[must_use]
    pub fn disconnect(user: impl Into<String>, client: Option<String>) -> Self {
        Command::Disconnect {
            user: user.into(),
            client,
        }
    }

    /// Create a new Channels command.
    #[must_use]
    pub fn channels(pattern: Option<String>) -> Self {
        Command::Channels { pattern }
    }

    /// Create a new Info command.
    #[must_use]
    pub fn info() -> Self {
        Command::Info {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_broadcast_envelope_shape() {
        let command = Command::broadcast(
            vec!["room1".to_string(), "room2".to_string()],
            json!({"event": "ping"}),
            false,
        );

        let wire = serde_json::to_value(&command).unwrap();
        assert_eq!(
            wire,
            json!({
                "method": "broadcast",
                "params": {
                    "channels": ["room1", "room2"],
                    "data": {"event": "ping"},
                    "skip_history": false,
                }
            })
        );
    }

    #[test]
    fn test_method_names_are_snake_case() {
        let command = Command::presence_stats("room1");
        let wire = serde_json::to_value(&command).unwrap();
        assert_eq!(wire["method"], "presence_stats");
        assert_eq!(command.method(), "presence_stats");
    }

    #[test]
    fn test_history_omits_absent_since() {
        let command = Command::history("room1", 10, None, false);
        let wire = serde_json::to_value(&command).unwrap();
        assert!(wire["params"].get("since").is_none());

        let since = StreamPosition {
            offset: 42,
            epoch: "xyz".to_string(),
        };
        let command = Command::history("room1", 10, Some(since), true);
        let wire = serde_json::to_value(&command).unwrap();
        assert_eq!(wire["params"]["since"]["offset"], 42);
        assert_eq!(wire["params"]["reverse"], true);
    }

    #[test]
    fn test_envelope_roundtrip() {
        let command = Command::subscribe("room1", "u1", Some("client-1".to_string()));
        let wire = serde_json::to_string(&command).unwrap();
        let back: Command = serde_json::from_str(&wire).unwrap();
        assert_eq!(back, command);
    }
}

//! # beacon-gateway
//!
//! Channel authorization and event dispatch for the Beacon bridge.
//!
//! The [`Broadcaster`] sits between a host application and a real-time
//! pub/sub gateway server:
//!
//! - **authorize** - Gate channel access by tier, identity, and the host's
//!   own policy
//! - **issue_channel_token / issue_connection_token** - Sign time-bounded
//!   access tokens the server verifies
//! - **publish** - Fan one event out to a set of channels in a single
//!   batched server call, with namespace remapping
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  Host app    │────▶│  Broadcaster │────▶│  Transport   │
//! └──────────────┘     └──────────────┘     └──────────────┘
//!                        │          │
//!                        ▼          ▼
//!                ┌────────────┐  ┌────────────┐
//!                │ Identity / │  │   Token    │
//!                │   Policy   │  │   Issuer   │
//!                └────────────┘  └────────────┘
//! ```
//!
//! Identity resolution and the per-channel access policy are injected
//! capabilities; the broadcaster only gates entry to them.
//!
//! ## Example
//!
//! ```rust,ignore
//! use beacon_gateway::{Broadcaster, GatewayConfig};
//! use beacon_transport::{HttpTransport, HttpTransportConfig};
//! use std::sync::Arc;
//!
//! let config = GatewayConfig::load()?;
//! let transport = Arc::new(HttpTransport::new(HttpTransportConfig {
//!     api_url: config.api_url.clone(),
//!     api_key: config.api_key.clone(),
//!     timeout: config.timeout(),
//! })?);
//! let gateway = Broadcaster::new(&config, transport, identities, policy)?;
//! ```

pub mod auth;
pub mod broadcaster;
pub mod config;
pub mod error;
pub mod metrics;
pub mod token;

pub use auth::{AuthGrant, ChannelPolicy, IdentityResolver};
pub use broadcaster::{Broadcaster, ChannelTokenGrant};
pub use config::{GatewayConfig, NamespacesConfig};
pub use error::GatewayError;
pub use token::{ConnectionClaims, SubscriptionClaims, TokenError, TokenIssuer};

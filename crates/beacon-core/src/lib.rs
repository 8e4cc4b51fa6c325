//! # beacon-core
//!
//! Core channel classification types for the Beacon gateway bridge.
//!
//! This crate provides the pure building blocks the gateway layers on top of:
//!
//! - **Classification** - Map a raw channel name to its access tier and
//!   canonical (prefix-stripped) form
//! - **AccessTier** - Public, private, or presence
//! - **NamespaceConfig** - Configured namespace prefixes and the outbound
//!   rewrite rule
//! - **Identity / RequestContext** - Request-scoped types handed to the
//!   injected host capabilities
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌──────────────┐
//! │  Raw name   │────▶│ Classifier  │────▶│ Tier + name  │
//! └─────────────┘     └─────────────┘     └──────────────┘
//!                            │
//!                            ▼
//!                     ┌─────────────┐
//!                     │ Namespaces  │
//!                     └─────────────┘
//! ```
//!
//! Everything here is pure: no I/O, no shared state, same input always
//! yields the same output.

pub mod channel;
pub mod context;
pub mod namespace;

pub use channel::{classify, validate_channel_name, AccessTier, Classification};
pub use context::{Identity, RequestContext};
pub use namespace::{NamespaceConfig, NamespaceError};

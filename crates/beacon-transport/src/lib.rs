//! # beacon-transport
//!
//! Transport layer for the Beacon gateway bridge.
//!
//! The pub/sub gateway server exposes a single JSON command endpoint. This
//! crate provides:
//!
//! - **Command** - Typed envelopes for every server API method
//! - **Transport** - The client abstraction the gateway core is written
//!   against
//! - **HttpTransport** - The production implementation over HTTP
//!
//! ## Transport Abstraction
//!
//! The gateway core only ever talks to `dyn Transport`, so tests can drive it
//! against an in-memory double while production uses `HttpTransport`.
//!
//! ```rust,ignore
//! use beacon_transport::{HttpTransport, HttpTransportConfig, Transport};
//!
//! let transport = HttpTransport::new(HttpTransportConfig::default())?;
//! let reply = transport.info().await?;
//! ```

pub mod command;
pub mod http;
pub mod traits;

pub use command::{Command, StreamPosition};
pub use http::{HttpTransport, HttpTransportConfig};
pub use traits::{Transport, TransportError};

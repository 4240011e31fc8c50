//! Middleware seam: the external pub/sub collaborator behind a narrow
//! trait pair.
//!
//! The harness needs exactly three things from the middleware: a
//! process-level session, a publishing endpoint bound to a named channel,
//! and a fire-and-forget publish carrying one 64-bit timestamp next to the
//! payload. Delivery, discovery and wire format all stay on the other side
//! of this seam.

pub mod zenoh_backend;

pub use zenoh_backend::ZenohTransport;

use crate::error::PinglatResult;

/// Session-level options, applied before any endpoint exists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransportOptions {
    /// Locators of peers or routers to connect to ("tcp/host:port").
    /// Empty means the middleware's own discovery.
    pub connect: Vec<String>,
    /// Middleware buffer depth per connection.
    pub buffer_count: u32,
    /// Publish without an internal buffer copy where the middleware
    /// supports it.
    pub zero_copy: bool,
}

/// A publishing endpoint bound to one named channel.
pub trait PublishEndpoint {
    /// Fire-and-forget publish of `payload` with `send_time_us` attached
    /// as the message's send-time metadata. No delivery confirmation.
    fn publish(&self, payload: &[u8], send_time_us: i64) -> PinglatResult<()>;
}

/// A process-level middleware session.
///
/// Opened once per invocation and borrowed by every run; endpoints live
/// strictly shorter than the session that produced them.
pub trait TransportSession {
    /// Acquire a publishing endpoint bound to `channel`.
    fn publisher<'a>(&'a self, channel: &str) -> PinglatResult<Box<dyn PublishEndpoint + 'a>>;
}

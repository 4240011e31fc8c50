//! Zenoh implementation of the transport seam.
//!
//! The session owns a tokio runtime and drives zenoh's async API with
//! blocking `block_on` calls, so the harness itself stays single-threaded
//! and sequential. The send timestamp rides as an 8-byte little-endian
//! attachment next to the payload.

use super::{PublishEndpoint, TransportOptions, TransportSession};
use crate::error::{PinglatError, PinglatResult};

/// Process-level zenoh session plus the runtime that drives it.
pub struct ZenohTransport {
    rt: tokio::runtime::Runtime,
    session: zenoh::Session,
}

impl ZenohTransport {
    /// Open a middleware session with `opts` applied. All network,
    /// buffering and shared-memory configuration happens here, before any
    /// endpoint exists.
    pub fn open(opts: &TransportOptions) -> PinglatResult<Self> {
        let rt = tokio::runtime::Runtime::new()
            .map_err(|e| PinglatError::Transport(format!("tokio runtime: {}", e)))?;

        let mut config = zenoh::Config::default();

        // Zero copy maps onto zenoh's shared-memory transport; buffer
        // depth onto the TX queue size for data-priority messages, the
        // closest analog of a publisher memory-buffer count.
        if opts.zero_copy {
            config
                .insert_json5("transport/shared_memory/enabled", "true")
                .map_err(|e| PinglatError::Config(format!("zero copy mode: {}", e)))?;
        }
        config
            .insert_json5(
                "transport/link/tx/queue/size/data",
                &opts.buffer_count.to_string(),
            )
            .map_err(|e| PinglatError::Config(format!("memory buffer count: {}", e)))?;

        if !opts.connect.is_empty() {
            let endpoints_json = serde_json::to_string(&opts.connect)
                .map_err(|e| PinglatError::Config(format!("connect endpoints: {}", e)))?;
            config
                .insert_json5("connect/endpoints", &endpoints_json)
                .map_err(|e| PinglatError::Config(format!("connect endpoints: {}", e)))?;
        }

        let session = rt
            .block_on(async { zenoh::open(config).await })
            .map_err(|e| PinglatError::Transport(format!("zenoh open failed: {}", e)))?;

        log::debug!("zenoh session established");
        Ok(Self { rt, session })
    }

    /// Close the session. Dropping the transport also tears the session
    /// down; closing explicitly surfaces errors instead of swallowing them.
    pub fn shutdown(self) -> PinglatResult<()> {
        self.rt
            .block_on(async { self.session.close().await })
            .map_err(|e| PinglatError::Transport(format!("zenoh close failed: {}", e)))
    }
}

impl TransportSession for ZenohTransport {
    fn publisher<'a>(&'a self, channel: &str) -> PinglatResult<Box<dyn PublishEndpoint + 'a>> {
        let publisher = self
            .rt
            .block_on(async { self.session.declare_publisher(channel.to_owned()).await })
            .map_err(|e| PinglatError::Transport(format!("zenoh publisher error: {}", e)))?;

        log::debug!("publisher declared on '{}'", channel);
        Ok(Box::new(ZenohPublisher {
            rt: &self.rt,
            publisher,
        }))
    }
}

/// Publishing endpoint bound to one key expression for the session's
/// lifetime.
pub struct ZenohPublisher<'a> {
    rt: &'a tokio::runtime::Runtime,
    publisher: zenoh::pubsub::Publisher<'a>,
}

impl PublishEndpoint for ZenohPublisher<'_> {
    fn publish(&self, payload: &[u8], send_time_us: i64) -> PinglatResult<()> {
        self.rt
            .block_on(async {
                self.publisher
                    .put(payload.to_vec())
                    .attachment(send_time_us.to_le_bytes().to_vec())
                    .await
            })
            .map_err(|e| PinglatError::Transport(format!("zenoh put error: {}", e)))
    }
}

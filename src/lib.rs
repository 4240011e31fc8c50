//! # pinglat
//!
//! End-to-end latency measurement over a pub/sub middleware — the sender
//! half. Publishes timestamped payloads of configurable size at a fixed
//! rate on the ping channel; a companion receiver computes the timing
//! statistics from the embedded send times.
//!
//! ## Architecture
//!
//! - **clock**: wall-clock microsecond timestamps embedded per send
//! - **payload**: fixed-size send buffers per size class
//! - **runner**: one measurement run (banner, warmup, timed loop, summary)
//! - **sweep**: geometric size sweep, 1 kB doubling to 16 MB
//! - **transport**: the external middleware behind a narrow seam, with a
//!   zenoh-backed production implementation
//! - **config** / **report**: CLI front end and JSON run reporting

pub mod clock;
pub mod config;
pub mod error;
pub mod payload;
pub mod report;
pub mod runner;
pub mod sweep;
pub mod transport;

// Re-exports for convenience
pub use config::{Cli, RunConfig, SizeSpec};
pub use error::{PinglatError, PinglatResult};
pub use report::{write_json_report, RunSummary, SessionReport};
pub use runner::{RunDriver, WARMUP_RUNS};
pub use sweep::{run_sweep, sweep_sizes};
pub use transport::{TransportOptions, ZenohTransport};

/// Channel every sender publishes on; the companion receiver subscribes
/// to the same name.
pub const PING_CHANNEL: &str = "ping";

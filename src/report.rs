//! Session reporting: which runs happened, with what configuration, and
//! how many messages each actually sent.
//!
//! The report intentionally carries no latency figures — those live on the
//! receiver side. JSON output exists so sweep results can be correlated
//! with the receiver's evaluation afterwards.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Sender-side record of one completed run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    /// Channel the run published on
    pub channel: String,
    /// Run count as requested on the command line
    pub runs_requested: i32,
    /// Measured sends; warmup iterations are excluded
    pub messages_sent: u64,
    /// Payload size in kB
    pub size_kb: usize,
    /// Inter-send delay in milliseconds
    pub delay_ms: i64,
    /// Transport buffer depth
    pub mem_buffer: u32,
    /// Whether zero-copy mode was on
    pub zero_copy: bool,
    /// RFC 3339 stamp taken when the run started
    pub started_at: String,
}

/// All runs of one invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionReport {
    /// Tool version for forward compatibility
    pub version: String,
    /// Timestamp when the report was generated
    pub generated_at: String,
    /// One entry per run, in execution order
    pub runs: Vec<RunSummary>,
}

impl SessionReport {
    pub fn new(runs: Vec<RunSummary>) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: chrono::Utc::now().to_rfc3339(),
            runs,
        }
    }
}

/// Write a report as pretty-printed JSON.
pub fn write_json_report<P: AsRef<Path>>(
    report: &SessionReport,
    path: P,
) -> std::io::Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, report)?;
    Ok(())
}

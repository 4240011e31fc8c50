//! Geometric payload-size sweep.

use crate::config::RunConfig;
use crate::error::PinglatResult;
use crate::report::RunSummary;
use crate::runner::RunDriver;
use crate::transport::TransportSession;

/// First size class of the sweep, in kB.
pub const SWEEP_START_KB: usize = 1;

/// Last size class of the sweep, in kB (16 MB).
pub const SWEEP_END_KB: usize = 16 * 1024;

/// Size classes in kB: 1, 2, 4, ..., 16384.
pub fn sweep_sizes() -> impl Iterator<Item = usize> {
    std::iter::successors(Some(SWEEP_START_KB), |kb| Some(kb * 2))
        .take_while(|kb| *kb <= SWEEP_END_KB)
}

/// Run the driver once per size class, strictly sequentially, with all
/// other configuration held constant. The transport session is borrowed
/// and stays up across the whole sweep.
pub fn run_sweep(
    transport: &dyn TransportSession,
    cfg: &RunConfig,
    driver: &RunDriver,
) -> PinglatResult<Vec<RunSummary>> {
    let mut summaries = Vec::new();
    for size_kb in sweep_sizes() {
        summaries.push(driver.execute(transport, cfg, size_kb)?);
    }
    Ok(summaries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SizeSpec;
    use crate::runner::WARMUP_RUNS;
    use crate::transport::testing::RecordingTransport;

    #[test]
    fn fifteen_doubling_size_classes() {
        let sizes: Vec<usize> = sweep_sizes().collect();
        assert_eq!(sizes.len(), 15);
        assert_eq!(sizes.first(), Some(&1));
        assert_eq!(sizes.last(), Some(&16384));
        for pair in sizes.windows(2) {
            assert_eq!(pair[1], pair[0] * 2);
        }
    }

    #[test]
    fn sweep_runs_the_driver_once_per_size() {
        let cfg = RunConfig {
            runs: 2,
            size: SizeSpec::Auto,
            delay_ms: 0,
            mem_buffer: 1,
            zero_copy: false,
            connect: Vec::new(),
        };
        let transport = RecordingTransport::default();
        let summaries = run_sweep(&transport, &cfg, &RunDriver::unpaced()).unwrap();

        assert_eq!(summaries.len(), 15);
        assert_eq!(transport.endpoints.borrow().len(), 15);
        assert_eq!(
            transport.publishes.borrow().len(),
            15 * (2 + WARMUP_RUNS)
        );

        let sizes: Vec<usize> = summaries.iter().map(|s| s.size_kb).collect();
        assert_eq!(sizes, sweep_sizes().collect::<Vec<_>>());
        assert!(summaries.iter().all(|s| s.messages_sent == 2));
    }
}

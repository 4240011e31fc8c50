//! One measurement run: configuration banner, endpoint acquisition,
//! warmup, timed send loop, summary.

use std::thread;
use std::time::Duration;

use crate::config::RunConfig;
use crate::error::PinglatResult;
use crate::report::RunSummary;
use crate::transport::TransportSession;
use crate::{clock, payload, PING_CHANNEL};

/// Extra sends before measurement begins, excluded from the reported count.
pub const WARMUP_RUNS: usize = 10;

/// Settling time after endpoint creation so discovery/matching can connect
/// a listener. No verification that one actually did.
pub const MATCH_SETTLE_DELAY: Duration = Duration::from_millis(2000);

/// Post-run wait so a downstream receiver can finish its own evaluation
/// before the endpoint goes away.
pub const RECEIVER_DRAIN_DELAY: Duration = Duration::from_millis(2000);

/// Drives a single measurement run against a borrowed transport session.
#[derive(Debug, Clone)]
pub struct RunDriver {
    pub settle_delay: Duration,
    pub drain_delay: Duration,
}

impl Default for RunDriver {
    fn default() -> Self {
        Self {
            settle_delay: MATCH_SETTLE_DELAY,
            drain_delay: RECEIVER_DRAIN_DELAY,
        }
    }
}

impl RunDriver {
    /// Execute one run at `size_kb`, publishing `cfg.measured_runs() +
    /// WARMUP_RUNS` messages on the ping channel. Warmup and measured
    /// iterations are mechanically identical; only the reported count
    /// distinguishes them.
    pub fn execute(
        &self,
        transport: &dyn TransportSession,
        cfg: &RunConfig,
        size_kb: usize,
    ) -> PinglatResult<RunSummary> {
        println!("--------------------------------------------");
        println!("Runs                    : {}", cfg.runs);
        println!("Message size            : {} kB", size_kb);
        println!("Message delay           : {} ms", cfg.delay_ms);
        println!("Memory buffer           : {}", cfg.mem_buffer);
        if cfg.zero_copy {
            println!("Zero copy               : ON");
        } else {
            println!("Zero copy               : OFF");
        }

        let started_at = chrono::Utc::now().to_rfc3339();

        let endpoint = transport.publisher(PING_CHANNEL)?;
        let payload = payload::build(size_kb);

        // Let publisher and any listener match before the first send.
        thread::sleep(self.settle_delay);

        let measured = cfg.measured_runs();
        let delay = Duration::from_millis(cfg.delay_ms.max(0) as u64);

        for _ in 0..measured + WARMUP_RUNS {
            endpoint.publish(&payload, clock::now_micros())?;
            thread::sleep(delay);
        }

        println!("Messages sent           : {}", measured);
        println!("--------------------------------------------");

        log::debug!("run at {} kB done, draining", size_kb);

        // Give the receiver time to evaluate before the endpoint drops.
        thread::sleep(self.drain_delay);

        Ok(RunSummary {
            channel: PING_CHANNEL.to_owned(),
            runs_requested: cfg.runs,
            messages_sent: measured as u64,
            size_kb,
            delay_ms: cfg.delay_ms,
            mem_buffer: cfg.mem_buffer,
            zero_copy: cfg.zero_copy,
            started_at,
        })
    }

    /// Driver with the settling waits disabled; tests only.
    #[cfg(test)]
    pub(crate) fn unpaced() -> Self {
        Self {
            settle_delay: Duration::ZERO,
            drain_delay: Duration::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SizeSpec;
    use crate::transport::testing::RecordingTransport;

    fn config(runs: i32) -> RunConfig {
        RunConfig {
            runs,
            size: SizeSpec::Fixed(4),
            delay_ms: 0,
            mem_buffer: 1,
            zero_copy: false,
            connect: Vec::new(),
        }
    }

    #[test]
    fn publishes_warmup_plus_measured() {
        let transport = RecordingTransport::default();
        let summary = RunDriver::unpaced()
            .execute(&transport, &config(5), 4)
            .unwrap();
        assert_eq!(transport.publishes.borrow().len(), 5 + WARMUP_RUNS);
        assert_eq!(summary.messages_sent, 5);
        assert_eq!(summary.runs_requested, 5);
    }

    #[test]
    fn zero_runs_still_warm_up() {
        let transport = RecordingTransport::default();
        let summary = RunDriver::unpaced()
            .execute(&transport, &config(0), 1)
            .unwrap();
        assert_eq!(transport.publishes.borrow().len(), WARMUP_RUNS);
        assert_eq!(summary.messages_sent, 0);
    }

    #[test]
    fn negative_runs_degrade_to_zero_measured() {
        let transport = RecordingTransport::default();
        let summary = RunDriver::unpaced()
            .execute(&transport, &config(-3), 1)
            .unwrap();
        assert_eq!(transport.publishes.borrow().len(), WARMUP_RUNS);
        assert_eq!(summary.messages_sent, 0);
    }

    #[test]
    fn publishes_full_size_payloads_on_the_ping_channel() {
        let transport = RecordingTransport::default();
        RunDriver::unpaced()
            .execute(&transport, &config(3), 4)
            .unwrap();
        assert_eq!(*transport.endpoints.borrow(), vec!["ping".to_string()]);
        for publish in transport.publishes.borrow().iter() {
            assert_eq!(publish.channel, "ping");
            assert_eq!(publish.payload_len, 4 * 1024);
        }
    }

    #[test]
    fn empty_payload_is_still_sent() {
        let transport = RecordingTransport::default();
        let summary = RunDriver::unpaced()
            .execute(&transport, &config(2), 0)
            .unwrap();
        assert_eq!(transport.publishes.borrow().len(), 2 + WARMUP_RUNS);
        assert_eq!(summary.size_kb, 0);
        assert!(transport
            .publishes
            .borrow()
            .iter()
            .all(|p| p.payload_len == 0));
    }

    #[test]
    fn send_timestamps_are_non_decreasing() {
        let transport = RecordingTransport::default();
        RunDriver::unpaced()
            .execute(&transport, &config(20), 1)
            .unwrap();
        let publishes = transport.publishes.borrow();
        for pair in publishes.windows(2) {
            assert!(
                pair[1].send_time_us >= pair[0].send_time_us,
                "timestamps regressed: {} -> {}",
                pair[0].send_time_us,
                pair[1].send_time_us
            );
        }
    }
}

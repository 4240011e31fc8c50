//! Command line parsing and the per-invocation configuration record.

use std::path::PathBuf;

use clap::Parser;

use crate::transport::TransportOptions;

/// Command line surface of the latency sender.
///
/// The core flags mirror the conventional latency-tool surface: run count,
/// payload size (negative sweeps all sizes), inter-send delay, transport
/// buffer depth and zero-copy switch.
#[derive(Parser, Debug)]
#[command(name = "pinglat")]
#[command(about = "Pub/sub end-to-end latency measurement sender")]
#[command(version)]
pub struct Cli {
    /// Number of messages to send.
    #[arg(
        short = 'r',
        long = "runs",
        default_value_t = 1000,
        allow_negative_numbers = true
    )]
    pub runs: i32,

    /// Message size in kB; a negative value sweeps all sizes from 1 kB to 16 MB.
    #[arg(
        short = 's',
        long = "size",
        default_value_t = -1,
        allow_negative_numbers = true
    )]
    pub size: i64,

    /// Delay between sends in milliseconds.
    #[arg(
        short = 'd',
        long = "delay",
        default_value_t = 50,
        allow_negative_numbers = true
    )]
    pub delay: i64,

    /// Number of transport memory buffers per connection.
    #[arg(
        short = 'b',
        long = "mem_buffer",
        default_value_t = 1,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub mem_buffer: u32,

    /// Switch zero copy transport mode on.
    #[arg(short = 'z', long = "zero_copy")]
    pub zero_copy: bool,

    /// Middleware endpoint(s) to connect to, e.g. tcp/192.168.1.10:7447.
    #[arg(short = 'c', long = "connect", value_name = "LOCATOR")]
    pub connect: Vec<String>,

    /// Write a JSON report of all runs to this path.
    #[arg(long = "json", value_name = "PATH")]
    pub json: Option<PathBuf>,

    /// Increase output verbosity (show debug messages).
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

/// Requested payload size class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeSpec {
    /// Sweep all sizes from 1 kB doubling to 16 MB.
    Auto,
    /// A single run at the given size in kB.
    Fixed(usize),
}

/// Immutable configuration for one invocation, shared by every run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub runs: i32,
    pub size: SizeSpec,
    pub delay_ms: i64,
    pub mem_buffer: u32,
    pub zero_copy: bool,
    pub connect: Vec<String>,
}

impl RunConfig {
    pub fn from_cli(cli: &Cli) -> Self {
        let size = if cli.size < 0 {
            SizeSpec::Auto
        } else {
            SizeSpec::Fixed(cli.size as usize)
        };
        Self {
            runs: cli.runs,
            size,
            delay_ms: cli.delay,
            mem_buffer: cli.mem_buffer,
            zero_copy: cli.zero_copy,
            connect: cli.connect.clone(),
        }
    }

    /// Measured iterations for one run; run counts below zero degrade to
    /// zero measured iterations rather than being rejected.
    pub fn measured_runs(&self) -> usize {
        self.runs.max(0) as usize
    }

    /// Session-level options handed to the transport when it is opened.
    pub fn transport_options(&self) -> TransportOptions {
        TransportOptions {
            connect: self.connect.clone(),
            buffer_count: self.mem_buffer,
            zero_copy: self.zero_copy,
        }
    }
}

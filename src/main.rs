use clap::Parser;
use colored::*;

use pinglat::config::{Cli, RunConfig, SizeSpec};
use pinglat::error::PinglatResult;
use pinglat::report::{write_json_report, SessionReport};
use pinglat::runner::RunDriver;
use pinglat::sweep::run_sweep;
use pinglat::transport::ZenohTransport;

fn main() {
    let cli = Cli::parse();

    // Initialize structured logging based on verbosity flag
    let log_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .format_target(false)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> PinglatResult<()> {
    let cfg = RunConfig::from_cli(&cli);

    // One session for the whole invocation; every run borrows it.
    let transport = ZenohTransport::open(&cfg.transport_options())?;
    let driver = RunDriver::default();

    let summaries = match cfg.size {
        SizeSpec::Auto => run_sweep(&transport, &cfg, &driver)?,
        SizeSpec::Fixed(size_kb) => vec![driver.execute(&transport, &cfg, size_kb)?],
    };

    if let Some(path) = &cli.json {
        write_json_report(&SessionReport::new(summaries), path)?;
        println!("Report written to: {}", path.display());
    }

    transport.shutdown()
}

//! `u-srtf` command line.
//!
//! Without arguments, runs the interactive prompt loop on stdin/stdout.
//! `u-srtf --random <count> [seed]` simulates one generated workload and
//! prints the report.
//!
//! Logs go to stderr; set `RUST_LOG` (default `warn`) to see them.

use std::io::{self, Write};

use anyhow::{bail, Context, Result};
use tracing_subscriber::EnvFilter;

use u_srtf::interactive::Session;
use u_srtf::report::TextReport;
use u_srtf::workload::WorkloadGenerator;
use u_srtf::{run, SimulationConfig, SimulationRequest};

fn main() -> Result<()> {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        None => {
            let stdin = io::stdin();
            let mut session = Session::new(stdin.lock(), io::stdout());
            session.run().context("interactive session failed")?;
        }
        Some("--random") => random_demo(&args[1..])?,
        Some(other) => bail!("unknown argument '{other}' (usage: u-srtf [--random <count> [seed]])"),
    }
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn random_demo(args: &[String]) -> Result<()> {
    let config = SimulationConfig::default();
    let count: usize = match args.first() {
        Some(raw) => raw.parse().with_context(|| format!("invalid count '{raw}'"))?,
        None => config.max_processes,
    };
    let seed: u64 = match args.get(1) {
        Some(raw) => raw.parse().with_context(|| format!("invalid seed '{raw}'"))?,
        None => 0,
    };

    let specs = WorkloadGenerator::new(seed).generate(count);
    let report = run(&SimulationRequest::new(specs).with_config(config))?;

    let mut out = io::stdout().lock();
    write!(out, "{}", TextReport::new(&report))?;
    Ok(())
}

//! Listener Registry Demo
//!
//! Command-line driver for the listener-registry library. It runs a scenario
//! of add/remove/dispatch steps against one registry and prints what fires:
//! - Built-in reference scenario by default
//! - Custom scenarios from a TOML file (`--scenario`)

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod config;
mod scenario;

/// Listener Registry Demo - run listener scenarios against a registry
#[derive(Parser, Debug)]
#[command(name = "listener-demo")]
#[command(about = "Register, remove and dispatch named-event listeners", long_about = None)]
#[command(version)]
struct Args {
    /// Path to a scenario file (default: built-in reference scenario)
    #[arg(short, long, value_name = "FILE")]
    scenario: Option<PathBuf>,

    /// Verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.verbose, args.quiet);

    log::info!("Listener Registry Demo v{}", env!("CARGO_PKG_VERSION"));
    log::info!("Using listener-registry library v{}", listener_registry::VERSION);

    let config = match &args.scenario {
        Some(path) => {
            log::info!("Loading scenario from: {:?}", path);
            config::load_config(path)?
        }
        None => config::default_config()?,
    };
    log::debug!(
        "Scenario has {} listener(s) and {} step(s)",
        config.listeners.len(),
        config.steps.len()
    );

    let report = scenario::run(&config)?;

    println!(
        "\n{} dispatch(es), {} invocation(s) in total",
        report.dispatches.len(),
        report.total_invocations()
    );

    Ok(())
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;
    use std::io::Write;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

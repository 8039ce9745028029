//! Entry point for the mocktop TUI. Parses args and runs the App.

mod app;
mod history;
mod ui;

use std::env;
use std::fs::File;
use std::sync::Arc;

use anyhow::Context;
use mocktop_sim::{DashboardSnapshot, MetricsSimulator, SimRanges};
use tracing::info;
use tracing_subscriber::EnvFilter;

use app::App;

struct ParsedArgs {
    seed: Option<u64>,
    once: bool,
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<ParsedArgs, String> {
    let mut it = args.into_iter();
    let prog = it.next().unwrap_or_else(|| "mocktop".into());
    let mut seed: Option<u64> = None;
    let mut once = false; // --once

    while let Some(arg) = it.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                return Err(format!("Usage: {prog} [--seed N|-s N] [--once]"));
            }
            "--seed" | "-s" => {
                seed = Some(parse_seed(&prog, it.next().as_deref())?);
            }
            "--once" => {
                once = true;
            }
            _ if arg.starts_with("--seed=") => {
                if let Some((_, v)) = arg.split_once('=') {
                    seed = Some(parse_seed(&prog, Some(v))?);
                }
            }
            _ => {
                return Err(format!(
                    "Unexpected argument. Usage: {prog} [--seed N|-s N] [--once]"
                ));
            }
        }
    }
    Ok(ParsedArgs { seed, once })
}

fn parse_seed(prog: &str, v: Option<&str>) -> Result<u64, String> {
    match v {
        Some(s) => s.parse::<u64>().map_err(|_| {
            format!("Invalid seed '{s}': expected an unsigned integer. Usage: {prog} [--seed N|-s N] [--once]")
        }),
        None => Err(format!(
            "Missing value for --seed. Usage: {prog} [--seed N|-s N] [--once]"
        )),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Reuse the same parsing logic for testability
    let parsed = match parse_args(env::args()) {
        Ok(v) => v,
        Err(msg) => {
            eprintln!("{msg}");
            return Ok(());
        }
    };

    init_logging()?;

    if parsed.once {
        return print_once(parsed.seed);
    }

    let mut app = App::new(build_simulator(parsed.seed)?);
    app.run().await
}

fn build_simulator(seed: Option<u64>) -> anyhow::Result<MetricsSimulator> {
    let ranges = SimRanges::default();
    let sim = match seed {
        Some(seed) => MetricsSimulator::seeded(ranges, seed)?,
        None => MetricsSimulator::new(ranges)?,
    };
    Ok(sim)
}

// One-shot mode: emit a single simulated snapshot as JSON and exit.
fn print_once(seed: Option<u64>) -> anyhow::Result<()> {
    let mut simulator = build_simulator(seed)?;
    let mut snapshot = DashboardSnapshot::default();
    snapshot.apply(simulator.sample());
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    info!(seed = ?seed, "One-shot snapshot printed.");
    Ok(())
}

// Logging is opt-in and file-only; the TUI owns the terminal.
// RUST_LOG filters, defaulting to debug.
fn init_logging() -> anyhow::Result<()> {
    let Some(path) = env::var_os("MOCKTOP_LOG") else {
        return Ok(());
    };
    let file = File::create(&path)
        .with_context(|| format!("create log file {}", path.to_string_lossy()))?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

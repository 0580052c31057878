use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use dotenvy::dotenv;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tick_trader::{TickOutcome, TickSnapshot, Trader, TraderConfig};

#[derive(Debug, Clone, Parser)]
struct Args {
    /// Product config (YAML). Built-in products are used when omitted.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// JSON-lines file of tick snapshots, or `-` for stdin.
    #[arg(long, default_value = "-")]
    pub input: String,

    /// Feed each tick's returned traderData into the next snapshot.
    #[arg(long)]
    pub replay: bool,
}

#[derive(Serialize)]
struct TickReport<'a> {
    timestamp: i64,
    #[serde(flatten)]
    outcome: &'a TickOutcome,
}

fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("tick_trader=info".parse()?),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => TraderConfig::load(path)?,
        None => TraderConfig::default(),
    };
    info!(
        products = config.products.len(),
        history_capacity = config.history_capacity,
        "trader config loaded"
    );

    let trader = Trader::new(&config);

    let reader: Box<dyn BufRead> = match args.input.as_str() {
        "-" => Box::new(BufReader::new(io::stdin())),
        path => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("failed to open snapshots {path}"))?,
        )),
    };

    let stdout = io::stdout();
    let ticks = run(&trader, reader, BufWriter::new(stdout.lock()), args.replay)?;
    info!(ticks, "snapshots processed");

    Ok(())
}

/// Processes one snapshot per non-blank line and writes one report per tick.
/// Returns the number of ticks processed.
fn run<R: BufRead, W: Write>(trader: &Trader, reader: R, mut out: W, replay: bool) -> Result<usize> {
    let mut carried: Option<String> = None;
    let mut ticks = 0_usize;

    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let line = line.with_context(|| format!("failed to read snapshot line {line_number}"))?;
        if line.trim().is_empty() {
            continue;
        }

        let mut snapshot: TickSnapshot = serde_json::from_str(&line)
            .with_context(|| format!("invalid snapshot on line {line_number}"))?;

        if replay {
            if let Some(trader_data) = carried.take() {
                snapshot.trader_data = trader_data;
            }
        }

        let outcome = trader.process_tick(&snapshot);

        let report = TickReport {
            timestamp: snapshot.timestamp,
            outcome: &outcome,
        };
        serde_json::to_writer(&mut out, &report)?;
        out.write_all(b"\n")?;

        carried = Some(outcome.trader_data);
        ticks += 1;
    }

    out.flush()?;
    Ok(ticks)
}

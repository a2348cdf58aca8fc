//! Tether CLI - binary entry point.
//!
//! Each subcommand drives one primitive and prints what it produces on stdout.
//! Logs go to stderr, filtered by `RUST_LOG` (default `warn`).
//!
//! ```text
//! main() -> init_tracing() -> load_config() -> Command::run()
//!                                                  |
//!          ticker | select | relay | request | list
//! ```

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use std::{
    io::{Write, stdout},
    path::{Path, PathBuf},
    time::Duration,
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use tether_config::{TetherConfig, delays_from_millis};
use tether_handoff::{
    SOURCE_COUNT, channel, read_from_both, read_then_write, select_ordered, send_request,
    write_to_both,
};
use tether_ticker::{TickerSettings, run_ticker};
use tether_types::{LineSink, List};

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .unwrap_or_else(|_| EnvFilter::new("error"));

    // stdout carries command output, so logs stay on stderr.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}

#[derive(Debug, Parser)]
#[command(name = "tether", version, about)]
struct Cli {
    /// Path to a TOML config file (overrides $TETHER_CONFIG and ~/.tether/config.toml).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the short/long tick loop until the deadline.
    Ticker(TickerOverrides),
    /// Service five delayed sources in readiness order.
    Select {
        /// Five comma-separated delays, e.g. `1,3,5,2,4`.
        #[arg(long, value_delimiter = ',')]
        delays_ms: Option<Vec<u64>>,
    },
    /// Fan a message out to two channels, read both back, then relay it once.
    Relay { msg: String },
    /// Send a request to a spawned server task and print its reply.
    Request { input: String },
    /// Push values into a list, print the snapshot, then pop everything.
    List { values: Vec<String> },
}

/// Ticker flags. Each one that is set wins over the config file.
#[derive(Debug, Default, Clone, Copy, Args)]
struct TickerOverrides {
    #[arg(long)]
    short_ms: Option<u64>,
    #[arg(long)]
    long_ms: Option<u64>,
    #[arg(long)]
    deadline_ms: Option<u64>,
}

/// Prints each line to stdout as it is emitted.
struct StdoutSink;

impl LineSink for StdoutSink {
    fn emit(&mut self, line: &str) {
        let mut out = stdout().lock();
        // A closed stdout (e.g. `| head`) should not abort the command.
        let _ = writeln!(out, "{line}");
        let _ = out.flush();
    }
}

fn load_config(explicit: Option<&Path>) -> Result<TetherConfig> {
    let loaded = match explicit {
        Some(path) => {
            if !path.exists() {
                bail!("config file {} does not exist", path.display());
            }
            TetherConfig::load_from(path)?
        }
        None => TetherConfig::load()?,
    };
    Ok(loaded.unwrap_or_default())
}

/// Layer flags over file values over defaults, then validate the result once.
fn ticker_settings(config: &TetherConfig, overrides: TickerOverrides) -> Result<TickerSettings> {
    let mut settings = config.ticker_settings();
    if let Some(ms) = overrides.short_ms {
        settings.short_interval = Duration::from_millis(ms);
    }
    if let Some(ms) = overrides.long_ms {
        settings.long_interval = Duration::from_millis(ms);
    }
    if let Some(ms) = overrides.deadline_ms {
        settings.deadline = Duration::from_millis(ms);
    }
    settings.validate()?;
    Ok(settings)
}

/// The `--delays-ms` flag wins over the config file.
fn select_delays(
    config: &TetherConfig,
    delays_ms: Option<&[u64]>,
) -> Result<[Duration; SOURCE_COUNT]> {
    let delays = match delays_ms {
        Some(raw) => delays_from_millis(raw).context("invalid --delays-ms")?,
        None => config.select_delays()?,
    };
    Ok(delays)
}

impl Command {
    async fn run(self, config: &TetherConfig, out: &mut impl LineSink) -> Result<()> {
        match self {
            Command::Ticker(overrides) => {
                let settings = ticker_settings(config, overrides)?;
                let report = run_ticker(&settings, out).await?;
                tracing::info!(
                    short_ticks = report.short_ticks,
                    long_ticks = report.long_ticks,
                    elapsed_ms = report.elapsed.as_millis() as u64,
                    "ticker finished"
                );
            }
            Command::Select { delays_ms } => {
                let delays = select_delays(config, delays_ms.as_deref())?;
                select_ordered(delays, out).await?;
            }
            Command::Relay { msg } => {
                let (tx_a, mut rx_a) = channel();
                let (tx_b, mut rx_b) = channel();
                write_to_both(&tx_a, &tx_b, &msg);
                out.emit(&read_from_both(&mut rx_a, &mut rx_b).await?);

                let (in_tx, mut in_rx) = channel();
                let (out_tx, mut out_rx) = channel();
                let relay = tokio::spawn(async move { read_then_write(&mut in_rx, &out_tx).await });
                in_tx.send(msg).await?;
                out.emit(&out_rx.recv().await?);
                relay.await.context("relay task panicked")??;
            }
            Command::Request { input } => {
                out.emit(&send_request(&input).await?);
            }
            Command::List { values } => {
                let mut list: List<String> = values.into_iter().collect();
                out.emit(&format!("elements: {:?}", list.all_elements()));
                out.emit(&format!("len: {}", list.len()));
                while let Some(value) = list.pop() {
                    out.emit(&format!("pop: {value}"));
                }
                let (_, present) = list.pop_with_presence();
                out.emit(&format!("pop on empty: present = {present}"));
            }
        }
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())
        .context("failed to load configuration")?;

    cli.command.run(&config, &mut StdoutSink).await
}

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod config;
mod data;
mod probe;
mod session;
mod summary;

use config::MonitorConfig;
use probe::{SystemCounters, SystemMetrics};
use session::MonitoringSession;
use summary::{SummaryRecord, SummaryStore};

#[derive(Parser, Debug)]
#[command(name = "devicewatch")]
#[command(about = "Samples device metrics and network throughput on a fixed interval")]
struct Args {
    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Polling interval in seconds (overrides config file)
    #[arg(short, long)]
    interval: Option<u64>,

    /// Sample history capacity (overrides config file)
    #[arg(long)]
    capacity: Option<usize>,

    /// Shared JSON file to write the widget summary to (overrides config file)
    #[arg(short, long)]
    summary: Option<PathBuf>,

    /// Stop after this many ticks instead of running until Ctrl-C
    #[arg(short, long)]
    ticks: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let mut config = MonitorConfig::load(args.config.as_deref())?;
    if let Some(interval_secs) = args.interval {
        config.interval_secs = interval_secs;
    }
    if let Some(capacity) = args.capacity {
        config.capacity = capacity;
    }
    if let Some(summary) = args.summary {
        config.summary_path = Some(summary);
    }
    config.validate()?;

    let counters = SystemCounters::new(config.interface_prefixes.clone());
    let mut session = MonitoringSession::new(
        Box::new(counters),
        Box::new(SystemMetrics::new()),
        config.capacity,
    );
    let store = config.summary_path.as_ref().map(SummaryStore::new);

    info!(
        interval_secs = config.interval_secs,
        capacity = config.capacity,
        "monitoring started"
    );

    let mut timer = interval(Duration::from_secs(config.interval_secs));
    timer.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut completed = 0u64;

    loop {
        tokio::select! {
            _ = timer.tick() => {
                let update = session.tick();
                report(&update);

                if let Some(ref store) = store {
                    if let Err(e) = store.save(&SummaryRecord::from_tick(&update)) {
                        warn!("summary write failed: {:#}", e);
                    }
                }

                completed += 1;
                if args.ticks.is_some_and(|n| completed >= n) {
                    break;
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("shutting down");
                break;
            }
        }
    }
    // Dropping the interval releases the recurring timer with the loop.

    Ok(())
}

/// Log one line per tick for the terminal consumer.
fn report(update: &session::TickUpdate) {
    let (up, down) = update
        .sample
        .map(|s| (s.upload_kbps, s.download_kbps))
        .unwrap_or((0.0, 0.0));

    info!(
        "up {:8.1} KB/s  down {:8.1} KB/s  cpu {:5.1}%  ram {:5.1}%  disk {:5.1}%  battery {:5.1}% ({:?})  total tx/rx {}/{} B",
        up,
        down,
        update.metrics.cpu_fraction * 100.0,
        update.metrics.ram_fraction * 100.0,
        update.metrics.storage_fraction * 100.0,
        update.metrics.battery_level * 100.0,
        update.metrics.battery_state,
        update.totals.bytes_sent,
        update.totals.bytes_received,
    );
}

//! Drives the search coordinator from a vault item export.
//!
//! Every stdin line is treated as the next state of the search box; the
//! ranked records are printed once the coordinator has settled.

use anyhow::{Context, bail};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver};
use std::time::{Duration, Instant};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use vault_core::provider::JsonFileProvider;
use vault_core::types::{AppConfig, Record};
use vault_search::{SearchConfig, SearchCoordinator};

const SETTLE_TIMEOUT: Duration = Duration::from_secs(10);
/// Upper bound on a wait without notifications, so a dead worker is noticed.
const MAX_WAIT: Duration = Duration::from_millis(100);

#[derive(Parser)]
#[command(name = "vault-search", version)]
struct Cli {
    /// JSON export of the vault item list.
    #[arg(long)]
    items: PathBuf,

    /// config.toml with a [search] section. Defaults apply when absent.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Overrides search.result_limit.
    #[arg(long)]
    limit: Option<usize>,

    /// Overrides search.debounce_interval_ms.
    #[arg(long)]
    debounce_ms: Option<u64>,

    /// Print each result set as a JSON array.
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let mut app_config = match &cli.config {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => AppConfig::default(),
    };
    if let Some(limit) = cli.limit {
        app_config.search.result_limit = limit;
    }
    if let Some(debounce_ms) = cli.debounce_ms {
        app_config.search.debounce_interval_ms = debounce_ms;
    }
    let errors = app_config.validate();
    if !errors.is_empty() {
        bail!("invalid config: {}", errors.join(", "));
    }

    let search_config = SearchConfig::from(&app_config.search);
    let wait = if search_config.debounce_interval.is_zero() {
        MAX_WAIT
    } else {
        search_config.debounce_interval.min(MAX_WAIT)
    };

    let (notify, tick_rx) = tick_channel();
    let mut coordinator = SearchCoordinator::new(search_config, notify);

    let provider = JsonFileProvider::new(&cli.items);
    let count = coordinator
        .refresh(&provider)
        .with_context(|| format!("failed to read items from {}", provider.path().display()))?;
    info!(count, "loaded vault items");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read query")?;
        coordinator.set_query(line.trim_end(), Instant::now());
        settle(&mut coordinator, &tick_rx, wait)?;
        print_results(&mut out, coordinator.current_results(), cli.json)?;
    }

    Ok(())
}

/// A notify callback posting one tick per finished search, and its receiver.
fn tick_channel() -> (Arc<dyn Fn() + Send + Sync>, Receiver<()>) {
    let (tick_tx, tick_rx) = mpsc::channel();
    let notify = Arc::new(move || {
        let _ = tick_tx.send(());
    });
    (notify, tick_rx)
}

/// Ticks until every submitted request has reported back, blocking on worker
/// notifications in between. `wait` bounds each block so a pending debounce
/// still fires.
fn settle(
    coordinator: &mut SearchCoordinator,
    ticks: &Receiver<()>,
    wait: Duration,
) -> anyhow::Result<()> {
    let deadline = Instant::now() + SETTLE_TIMEOUT;
    loop {
        coordinator.tick(Instant::now());
        if coordinator.is_done() {
            debug!(results = coordinator.current_results().len(), "search settled");
            return Ok(());
        }
        let now = Instant::now();
        if now >= deadline {
            bail!("search did not finish within {:?}", SETTLE_TIMEOUT);
        }
        let _ = ticks.recv_timeout(wait.min(deadline - now));
    }
}

fn print_results(out: &mut impl Write, records: &[Record], json: bool) -> anyhow::Result<()> {
    if json {
        serde_json::to_writer(&mut *out, records)?;
        writeln!(out)?;
        return Ok(());
    }

    if records.is_empty() {
        writeln!(out, "No items found")?;
    }
    for record in records {
        write!(out, "{}  [{}]  {}", record.title(), record.category(), record.id())?;
        if !record.tags().is_empty() {
            write!(out, "  #{}", record.tags().join(" #"))?;
        }
        writeln!(out)?;
    }
    writeln!(out)?;
    Ok(())
}

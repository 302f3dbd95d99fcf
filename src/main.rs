//! usersync binary
//!
//! One-shot reconciliation of remote user records into Postgres.
//! Intended to be invoked by an external timer trigger or by hand; either
//! way it is the same single run.

use clap::Parser;
use std::time::Duration;
use usersync::*;

/// Reconcile remote user records into Postgres.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Remote endpoint returning the JSON array of users.
    #[arg(long)]
    source: Option<String>,
    /// Postgres connection string.
    #[arg(long)]
    database: Option<String>,
    /// Attempts before a fetch failure becomes fatal.
    #[arg(long)]
    retries: Option<usize>,
    /// Seconds to wait between fetch attempts.
    #[arg(long)]
    delay: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    log();
    let args = Args::parse();
    let mut config = config::Config::from_env();
    if let Some(source) = args.source {
        config.source_url = source;
    }
    if let Some(database) = args.database {
        config.database_url = database;
    }
    if let Some(retries) = args.retries {
        config.retries = retries;
    }
    if let Some(delay) = args.delay {
        config.delay = Duration::from_secs(delay);
    }

    log::info!("reconciliation run starting");
    let client = save::db(&config.database_url).await?;
    let fetcher = fetch::Fetcher::new(&config.source_url)
        .with_retries(config.retries)
        .with_delay(config.delay);

    // Exhausted fetch retries re-raise to the caller; a failed write run is
    // logged and swallowed so a scheduling host never crashes on it, and the
    // next run self-heals through the idempotent upsert.
    match run::run(&fetcher, &client).await {
        Ok(count) => log::info!("run complete, {count} records reconciled"),
        Err(e) if e.is_transport() => return Err(e.into()),
        Err(e) => log::error!("run failed: {e}"),
    }
    Ok(())
}

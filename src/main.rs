mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::info;

use cli::{Cli, Command};
use order_clustering::{ClusteringConfig, ClusteringService, JsonSnapshotSource};

fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only the JSON result
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,order_clustering=debug".into()),
        ))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = ClusteringConfig::from_env().context("invalid clustering configuration")?;
    let source = JsonSnapshotSource::open(&cli.snapshot)
        .with_context(|| format!("cannot load snapshot {}", cli.snapshot.display()))?;
    let service = ClusteringService::new(source, config);
    info!(config = ?service.config(), "configuration loaded");

    let default_litres = service.config().default_litre_target as i64;
    let litres_or_default = |litres: Option<i64>| litres.unwrap_or(default_litres);

    let start_time = std::time::Instant::now();
    let output = match cli.command {
        Command::Cluster { distance, litres } => to_json(
            &service.get_clustered_coords(distance, litres_or_default(litres))?,
            cli.pretty,
        )?,
        Command::Anchored {
            anchors,
            litres,
            margin,
        } => to_json(
            &service.get_clustered_coords_along_with_specified(
                &anchors,
                litres_or_default(litres),
                margin,
            )?,
            cli.pretty,
        )?,
        Command::Undelivered => to_json(
            &service.get_all_undelivered_orders_with_litres()?,
            cli.pretty,
        )?,
        Command::WithinCapacity { litres } => to_json(
            &service.get_undelivered_coords_within_capacity(litres)?,
            cli.pretty,
        )?,
    };
    info!(elapsed = ?start_time.elapsed(), "done");

    println!("{}", output);
    Ok(())
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

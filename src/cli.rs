//! CLI argument parsing for the order-clustering binary.

use clap::{Parser, Subcommand};
use order_clustering::Coordinates;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "order-clustering",
    about = "Group paid, undelivered orders into delivery clusters"
)]
pub struct Cli {
    /// JSON snapshot of orders and bag types
    #[arg(long, short)]
    pub snapshot: PathBuf,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Free clustering of every undelivered location
    Cluster {
        /// Maximum distance from a cluster's seed, in km
        #[arg(long)]
        distance: f64,
        /// Litre target per cluster (defaults to the configured value)
        #[arg(long, allow_negative_numbers = true)]
        litres: Option<i64>,
    },
    /// Clusters seeded around the given points, then free clusters
    Anchored {
        /// Anchor as "<latitude>,<longitude>"; repeatable
        #[arg(long = "anchor", required = true, allow_hyphen_values = true)]
        anchors: Vec<Coordinates>,
        /// Litre target per cluster (defaults to the configured value)
        #[arg(long, allow_negative_numbers = true)]
        litres: Option<i64>,
        /// Extra km added to the configured base distance
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        margin: f64,
    },
    /// Every undelivered location with its litres, unclustered
    Undelivered,
    /// Coordinates of undelivered locations whose own volume fits the limit
    WithinCapacity {
        #[arg(long, allow_negative_numbers = true)]
        litres: i64,
    },
}

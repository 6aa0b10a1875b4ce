// Public modules
pub mod algorithms;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod source;
pub mod utils;

// Re-exports for convenience
pub use algorithms::greedy::GreedyClusterer;
pub use algorithms::Clusterer;
pub use config::ClusteringConfig;
pub use error::{ClusterError, SourceError};
pub use models::{ClusterParams, Coordinates, GroupedOrders, Location, PendingOrder};
pub use service::ClusteringService;
pub use source::{InMemorySource, JsonSnapshotSource, OrderLocationSource};

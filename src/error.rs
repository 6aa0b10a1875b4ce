//! Error types for the clustering core and its collaborators.

use crate::models::{BagTypeId, OrderId};
use thiserror::Error;

/// Failure reading from an order-location source
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read order snapshot: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed order snapshot: {0}")]
    Json(#[from] serde_json::Error),

    #[error("order source unavailable: {0}")]
    Unavailable(String),
}

/// Errors surfaced by the clustering operations
#[derive(Debug, Error)]
pub enum ClusterError {
    #[error("invalid parameter {name}: {value}")]
    InvalidParameter { name: &'static str, value: String },

    #[error("order {order_id} references unknown bag type {bag_type_id}")]
    UnknownBagType {
        order_id: OrderId,
        bag_type_id: BagTypeId,
    },

    #[error("litre total overflows at order {order_id}")]
    LitreOverflow { order_id: OrderId },

    #[error("order {order_id} has non-finite coordinates")]
    InvalidCoordinates { order_id: OrderId },

    #[error(transparent)]
    Source(#[from] SourceError),
}

/// Errors loading [`crate::config::ClusteringConfig`] from the environment
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} must be a number, got '{value}'")]
    NotANumber { key: &'static str, value: String },

    #[error("{key} must be positive, got '{value}'")]
    NotPositive { key: &'static str, value: String },
}

pub type Result<T, E = ClusterError> = std::result::Result<T, E>;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info};

use crate::error::SourceError;
use crate::models::{
    BagCatalog, BagType, BagTypeId, Coordinates, OrderId, OrderStatus, PendingOrder,
};
use crate::source::OrderLocationSource;

/// One order as exported from the order store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub id: OrderId,
    pub status: OrderStatus,
    /// Missing when the customer's address was never geocoded
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
    /// Bag type id -> quantity
    #[serde(default)]
    pub bags: HashMap<BagTypeId, u32>,
}

/// Serialized export of the order store
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub bag_types: Vec<BagType>,
    #[serde(default)]
    pub orders: Vec<OrderRecord>,
}

/// Source that serves a snapshot loaded from JSON
#[derive(Debug, Clone)]
pub struct JsonSnapshotSource {
    snapshot: Snapshot,
}

impl JsonSnapshotSource {
    /// Loads and parses a snapshot file
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, SourceError> {
        let path = path.as_ref();
        info!(path = %path.display(), "loading order snapshot");
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, SourceError> {
        let snapshot: Snapshot = serde_json::from_reader(reader)?;
        Ok(Self::from_snapshot(snapshot))
    }

    pub fn from_json(json: &str) -> Result<Self, SourceError> {
        let snapshot: Snapshot = serde_json::from_str(json)?;
        Ok(Self::from_snapshot(snapshot))
    }

    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        debug!(
            orders = snapshot.orders.len(),
            bag_types = snapshot.bag_types.len(),
            "snapshot loaded"
        );
        Self { snapshot }
    }
}

impl OrderLocationSource for JsonSnapshotSource {
    fn undelivered_orders(&self) -> Result<Vec<PendingOrder>, SourceError> {
        let orders: Vec<PendingOrder> = self
            .snapshot
            .orders
            .iter()
            .filter(|record| record.status.is_pending_delivery())
            .filter_map(|record| {
                let coordinates = record.coordinates?;
                Some(PendingOrder {
                    id: record.id,
                    coordinates,
                    bags: record.bags.clone(),
                })
            })
            .collect();

        debug!(undelivered = orders.len(), "selected paid orders with coordinates");
        Ok(orders)
    }

    fn bag_catalog(&self) -> Result<BagCatalog, SourceError> {
        Ok(self.snapshot.bag_types.iter().cloned().collect())
    }
}

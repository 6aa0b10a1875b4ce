// Location model grouping the pending orders that share one address

use crate::error::ClusterError;
use crate::models::{Coordinates, OrderId, PendingOrder};
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// A unique geographic point holding one or more pending orders
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    /// Coordinates shared by every order at this location
    pub coordinates: Coordinates,

    /// Orders at this address, in source order
    pub orders: Vec<PendingOrder>,
}

impl Location {
    /// Creates a location holding a single order
    pub fn from_order(order: PendingOrder) -> Self {
        Self {
            coordinates: order.coordinates,
            orders: vec![order],
        }
    }

    /// Ids of the orders at this location
    pub fn order_ids(&self) -> impl Iterator<Item = OrderId> + '_ {
        self.orders.iter().map(|o| o.id)
    }

    /// Collapses orders into locations by exact coordinate equality.
    ///
    /// Locations keep the order in which their first order appears, and orders
    /// within a location keep their input order. Non-finite coordinates are
    /// rejected.
    pub fn group_orders(orders: Vec<PendingOrder>) -> Result<Vec<Location>, ClusterError> {
        let mut index: HashMap<(u64, u64), usize> = HashMap::new();
        let mut locations: Vec<Location> = Vec::new();

        for order in orders {
            if !order.coordinates.is_finite() {
                return Err(ClusterError::InvalidCoordinates { order_id: order.id });
            }
            match index.entry(order.coordinates.dedup_key()) {
                Entry::Occupied(entry) => locations[*entry.get()].orders.push(order),
                Entry::Vacant(entry) => {
                    entry.insert(locations.len());
                    locations.push(Location::from_order(order));
                }
            }
        }

        Ok(locations)
    }
}

// Order model representing a customer's bag pickup request

use crate::models::{BagTypeId, Coordinates, OrderId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Lifecycle status of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    New,
    Paid,
    OnTheRoute,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Paid but not yet picked up
    pub fn is_pending_delivery(&self) -> bool {
        matches!(self, OrderStatus::Paid)
    }
}

/// An order waiting for delivery, with the bags it contains
#[derive(Debug, Clone, PartialEq)]
pub struct PendingOrder {
    /// Unique identifier of the order
    pub id: OrderId,

    /// Address coordinates of the customer
    pub coordinates: Coordinates,

    /// Map of bag type ids to ordered quantities
    pub bags: HashMap<BagTypeId, u32>,
}

impl PendingOrder {
    /// Creates a new order without any bags
    pub fn new(id: OrderId, coordinates: Coordinates) -> Self {
        Self {
            id,
            coordinates,
            bags: HashMap::new(),
        }
    }

    /// Builder-style variant of [`PendingOrder::add_bags`]
    pub fn with_bags(mut self, bag_type_id: BagTypeId, quantity: u32) -> Self {
        self.add_bags(bag_type_id, quantity);
        self
    }

    /// Adds bags of a type, merging with an existing line item
    pub fn add_bags(&mut self, bag_type_id: BagTypeId, quantity: u32) {
        if quantity > 0 {
            *self.bags.entry(bag_type_id).or_insert(0) += quantity;
        }
    }
}

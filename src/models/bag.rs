// Bag model describing the container types an order can be placed in

use crate::models::{BagTypeId, Litres};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A bag type offered to customers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BagType {
    /// Unique identifier of the bag type
    pub id: BagTypeId,

    /// Display name
    #[serde(default)]
    pub name: String,

    /// Unit capacity in litres
    pub capacity: Litres,
}

impl BagType {
    /// Creates a new bag type
    pub fn new<S: Into<String>>(id: BagTypeId, name: S, capacity: Litres) -> Self {
        Self {
            id,
            name: name.into(),
            capacity,
        }
    }
}

/// Catalog of known bag types keyed by id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BagCatalog {
    bag_types: HashMap<BagTypeId, BagType>,
}

impl BagCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a bag type
    pub fn insert(&mut self, bag_type: BagType) {
        self.bag_types.insert(bag_type.id, bag_type);
    }

    /// Unit capacity of a bag type, if it is known
    pub fn capacity_of(&self, id: BagTypeId) -> Option<Litres> {
        self.bag_types.get(&id).map(|b| b.capacity)
    }

    pub fn get(&self, id: BagTypeId) -> Option<&BagType> {
        self.bag_types.get(&id)
    }

    pub fn len(&self) -> usize {
        self.bag_types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bag_types.is_empty()
    }
}

impl FromIterator<BagType> for BagCatalog {
    fn from_iter<I: IntoIterator<Item = BagType>>(iter: I) -> Self {
        let mut catalog = BagCatalog::new();
        for bag_type in iter {
            catalog.insert(bag_type);
        }
        catalog
    }
}

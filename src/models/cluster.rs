// Cluster models for representing delivery groups

use crate::error::ClusterError;
use crate::models::{Coordinates, Litres, Location, OrderId};
use serde::{Deserialize, Serialize};

/// How a cluster was started
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Seeding {
    /// Seeded at its first location during free clustering
    Free,
    /// Seeded around the caller-supplied anchor at this index
    Anchor(usize),
}

/// A capacity- and distance-bounded group of locations
#[derive(Debug, Clone, PartialEq)]
pub struct Cluster {
    /// Coordinate every absorption decision is measured from
    pub representative: Coordinates,

    /// How this cluster was seeded
    pub seeding: Seeding,

    /// Member locations in absorption order
    pub members: Vec<Location>,

    /// Combined volume of every member
    pub total_litres: Litres,
}

impl Cluster {
    /// Starts an empty cluster around a representative coordinate
    pub fn new(representative: Coordinates, seeding: Seeding) -> Self {
        Self {
            representative,
            seeding,
            members: Vec::new(),
            total_litres: 0,
        }
    }

    /// Checks whether a location with the given volume may join.
    /// An empty cluster accepts anything (singleton overflow).
    pub fn can_absorb(&self, distance_km: f64, litres: Litres, params: &ClusterParams) -> bool {
        if self.members.is_empty() {
            return true;
        }
        distance_km <= params.distance_km()
            && self
                .total_litres
                .checked_add(litres)
                .is_some_and(|total| total <= params.litre_target())
    }

    /// Adds a location and its volume without checking limits
    pub fn absorb(&mut self, location: Location, litres: Litres) {
        self.total_litres += litres;
        self.members.push(location);
    }

    /// Number of member locations
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// True until the first location is absorbed
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Order ids flattened across members in absorption order
    pub fn order_ids(&self) -> Vec<OrderId> {
        self.members.iter().flat_map(|l| l.order_ids()).collect()
    }
}

/// Validated clustering parameters, only obtainable through [`ClusterParams::new`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClusterParams {
    distance_km: f64,
    litre_target: Litres,
}

impl ClusterParams {
    /// Validates caller-supplied parameters before any clustering work
    pub fn new(distance_km: f64, litre_target: i64) -> Result<Self, ClusterError> {
        if !distance_km.is_finite() || distance_km <= 0.0 {
            return Err(ClusterError::InvalidParameter {
                name: "distance_km",
                value: distance_km.to_string(),
            });
        }
        if litre_target <= 0 {
            return Err(ClusterError::InvalidParameter {
                name: "litre_target",
                value: litre_target.to_string(),
            });
        }
        Ok(Self {
            distance_km,
            litre_target: litre_target as Litres,
        })
    }

    /// Maximum distance from the representative, in kilometers
    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    /// Maximum combined volume of a multi-member cluster
    pub fn litre_target(&self) -> Litres {
        self.litre_target
    }
}

/// Result record handed back to callers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupedOrders {
    /// Anchor or seed coordinate of the group
    pub representative: Coordinates,

    /// Mean of the member locations' coordinates
    pub centroid: Coordinates,

    /// Combined volume of every order in the group
    pub total_litres: Litres,

    /// Distinct member locations in absorption order
    pub locations: Vec<Coordinates>,

    /// Member order ids in absorption order
    pub order_ids: Vec<OrderId>,
}

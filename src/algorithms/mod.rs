pub mod greedy;

// Common algorithm traits
use crate::error::Result;
use crate::models::{Cluster, ClusterParams, Coordinates, Location};

/// Trait for order clustering strategies
pub trait Clusterer {
    /// Partition locations into clusters seeded at the locations themselves
    fn cluster(&self, locations: &[Location], params: &ClusterParams) -> Result<Vec<Cluster>>;

    /// Partition locations into clusters built around the given anchors first,
    /// then free clusters for whatever the anchors did not pick up
    fn cluster_around_anchors(
        &self,
        locations: &[Location],
        anchors: &[Coordinates],
        params: &ClusterParams,
    ) -> Result<Vec<Cluster>>;
}

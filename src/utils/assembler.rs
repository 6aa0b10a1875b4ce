// Conversion of clusters into caller-facing records

use geo::{Centroid, MultiPoint, Point};

use crate::models::{Cluster, Coordinates, GroupedOrders};

/// Converts clusters into result records, keeping their order
pub fn assemble(clusters: &[Cluster]) -> Vec<GroupedOrders> {
    clusters.iter().map(assemble_one).collect()
}

/// Converts a single cluster into a result record
pub fn assemble_one(cluster: &Cluster) -> GroupedOrders {
    let locations: Vec<Coordinates> = cluster.members.iter().map(|l| l.coordinates).collect();

    GroupedOrders {
        representative: cluster.representative,
        centroid: centroid_of(&locations).unwrap_or(cluster.representative),
        total_litres: cluster.total_litres,
        locations,
        order_ids: cluster.order_ids(),
    }
}

/// Planar mean of the given points, `None` for an empty slice
pub fn centroid_of(coordinates: &[Coordinates]) -> Option<Coordinates> {
    let points: Vec<Point<f64>> = coordinates.iter().map(|c| Point::from(*c)).collect();
    MultiPoint::new(points).centroid().map(Coordinates::from)
}

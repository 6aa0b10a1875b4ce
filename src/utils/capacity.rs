// Litre accounting for orders, locations and clusters

use rayon::prelude::*;

use crate::error::{ClusterError, Result};
use crate::models::{BagCatalog, Cluster, Litres, Location, PendingOrder};

/// Sums bag volumes against a bag-type catalog.
///
/// Unknown bag types are an error; no default capacity is substituted.
#[derive(Debug, Clone, Copy)]
pub struct CapacityAccumulator<'a> {
    catalog: &'a BagCatalog,
}

impl<'a> CapacityAccumulator<'a> {
    pub fn new(catalog: &'a BagCatalog) -> Self {
        Self { catalog }
    }

    /// Volume of a single order: sum of quantity x unit capacity
    pub fn volume_of_order(&self, order: &PendingOrder) -> Result<Litres> {
        let mut total: Litres = 0;
        for (&bag_type_id, &quantity) in &order.bags {
            let capacity =
                self.catalog
                    .capacity_of(bag_type_id)
                    .ok_or(ClusterError::UnknownBagType {
                        order_id: order.id,
                        bag_type_id,
                    })?;
            total = Litres::from(quantity)
                .checked_mul(capacity)
                .and_then(|litres| total.checked_add(litres))
                .ok_or(ClusterError::LitreOverflow { order_id: order.id })?;
        }
        Ok(total)
    }

    /// Volume of every order at a location
    pub fn volume_of_location(&self, location: &Location) -> Result<Litres> {
        location.orders.iter().try_fold(0, |total: Litres, order| {
            total
                .checked_add(self.volume_of_order(order)?)
                .ok_or(ClusterError::LitreOverflow { order_id: order.id })
        })
    }

    /// Volume of every member of a cluster
    pub fn volume_of_cluster(&self, cluster: &Cluster) -> Result<Litres> {
        cluster.members.iter().try_fold(0, |total: Litres, location| {
            total
                .checked_add(self.volume_of_location(location)?)
                .ok_or_else(|| ClusterError::LitreOverflow {
                    order_id: location.order_ids().next().unwrap_or_default(),
                })
        })
    }

    /// Volumes of many locations, computed in parallel, in input order.
    /// On failure the error of the first failing location is returned.
    pub fn volumes_of(&self, locations: &[Location]) -> Result<Vec<Litres>> {
        let volumes: Vec<Result<Litres>> = locations
            .par_iter()
            .map(|location| self.volume_of_location(location))
            .collect();
        volumes.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BagType, Coordinates, Seeding};

    fn catalog() -> BagCatalog {
        vec![BagType::new(1, "Small", 20), BagType::new(2, "Large", 120)]
            .into_iter()
            .collect()
    }

    fn order(id: u64) -> PendingOrder {
        PendingOrder::new(id, Coordinates::new(50.0, 30.0))
    }

    #[test]
    fn test_volume_of_order() {
        let catalog = catalog();
        let accumulator = CapacityAccumulator::new(&catalog);

        let order = order(1).with_bags(1, 3).with_bags(2, 1);
        assert_eq!(accumulator.volume_of_order(&order).unwrap(), 180);
    }

    #[test]
    fn test_volume_of_order_without_bags_is_zero() {
        let catalog = catalog();
        let accumulator = CapacityAccumulator::new(&catalog);
        assert_eq!(accumulator.volume_of_order(&order(1)).unwrap(), 0);
    }

    #[test]
    fn test_unknown_bag_type_is_an_error() {
        let catalog = catalog();
        let accumulator = CapacityAccumulator::new(&catalog);

        let err = accumulator
            .volume_of_order(&order(9).with_bags(3, 1))
            .unwrap_err();
        assert!(matches!(
            err,
            ClusterError::UnknownBagType {
                order_id: 9,
                bag_type_id: 3
            }
        ));
    }

    #[test]
    fn test_volume_of_location_and_cluster() {
        let catalog = catalog();
        let accumulator = CapacityAccumulator::new(&catalog);

        let mut shared = Location::from_order(order(1).with_bags(1, 1));
        shared.orders.push(order(2).with_bags(2, 1));
        assert_eq!(accumulator.volume_of_location(&shared).unwrap(), 140);

        let other = Location::from_order(order(3).with_bags(1, 2));
        let mut cluster = Cluster::new(shared.coordinates, Seeding::Free);
        cluster.absorb(shared, 140);
        cluster.absorb(other, 40);
        assert_eq!(accumulator.volume_of_cluster(&cluster).unwrap(), 180);
    }

    #[test]
    fn test_litre_overflow_is_an_error() {
        let catalog: BagCatalog = vec![BagType::new(1, "Huge", u64::MAX / 2 + 1)]
            .into_iter()
            .collect();
        let accumulator = CapacityAccumulator::new(&catalog);

        let err = accumulator
            .volume_of_order(&order(5).with_bags(1, 2))
            .unwrap_err();
        assert!(matches!(err, ClusterError::LitreOverflow { order_id: 5 }));

        // Each order fits on its own, the location total does not
        let mut shared = Location::from_order(order(6).with_bags(1, 1));
        shared.orders.push(order(7).with_bags(1, 1));
        assert_eq!(
            accumulator.volume_of_order(&shared.orders[0]).unwrap(),
            u64::MAX / 2 + 1
        );
        let err = accumulator.volume_of_location(&shared).unwrap_err();
        assert!(matches!(err, ClusterError::LitreOverflow { order_id: 7 }));
        assert!(accumulator.volumes_of(&[shared]).is_err());
    }

    #[test]
    fn test_volume_of_cluster_overflow() {
        let catalog: BagCatalog = vec![BagType::new(1, "Huge", u64::MAX / 2 + 1)]
            .into_iter()
            .collect();
        let accumulator = CapacityAccumulator::new(&catalog);

        let mut cluster = Cluster::new(Coordinates::new(50.0, 30.0), Seeding::Free);
        cluster.absorb(Location::from_order(order(1).with_bags(1, 1)), 0);
        cluster.absorb(Location::from_order(order(2).with_bags(1, 1)), 0);

        let err = accumulator.volume_of_cluster(&cluster).unwrap_err();
        assert!(matches!(err, ClusterError::LitreOverflow { order_id: 2 }));
    }

    #[test]
    fn test_volumes_of_preserves_order_and_reports_first_failure() {
        let catalog = catalog();
        let accumulator = CapacityAccumulator::new(&catalog);

        let locations: Vec<Location> = (1..=50)
            .map(|i| Location::from_order(order(i).with_bags(1, i as u32)))
            .collect();
        let volumes = accumulator.volumes_of(&locations).unwrap();
        assert_eq!(volumes.len(), 50);
        assert_eq!(volumes[0], 20);
        assert_eq!(volumes[49], 1000);

        let mut broken = locations.clone();
        broken[10] = Location::from_order(order(100).with_bags(7, 1));
        broken[40] = Location::from_order(order(200).with_bags(8, 1));
        let err = accumulator.volumes_of(&broken).unwrap_err();
        assert!(matches!(err, ClusterError::UnknownBagType { order_id: 100, .. }));
    }
}

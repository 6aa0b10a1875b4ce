//! Caller-facing clustering operations.
//!
//! Each call reads one fresh snapshot from the source, runs the engine and
//! assembles result records. Nothing is cached between calls.

use tracing::{debug, info};

use crate::algorithms::greedy::GreedyClusterer;
use crate::algorithms::Clusterer;
use crate::config::ClusteringConfig;
use crate::error::{ClusterError, Result};
use crate::models::{
    BagCatalog, Cluster, ClusterParams, Coordinates, GroupedOrders, Location, Seeding,
};
use crate::source::OrderLocationSource;
use crate::utils::assembler::assemble;
use crate::utils::capacity::CapacityAccumulator;

/// Order clustering service over an order-location source
#[derive(Debug, Clone)]
pub struct ClusteringService<S> {
    source: S,
    config: ClusteringConfig,
}

impl<S: OrderLocationSource> ClusteringService<S> {
    pub fn new(source: S, config: ClusteringConfig) -> Self {
        Self { source, config }
    }

    /// Defaults applied by the anchored operation and the CLI
    pub fn config(&self) -> &ClusteringConfig {
        &self.config
    }

    /// Reads the pending orders and catalog, grouped into locations
    fn load(&self) -> Result<(Vec<Location>, BagCatalog)> {
        let orders = self.source.undelivered_orders()?;
        let catalog = self.source.bag_catalog()?;
        let locations = Location::group_orders(orders)?;
        debug!(locations = locations.len(), "loaded undelivered locations");
        Ok((locations, catalog))
    }

    /// Groups every undelivered order into free clusters
    pub fn get_clustered_coords(
        &self,
        distance_km: f64,
        litre_target: i64,
    ) -> Result<Vec<GroupedOrders>> {
        let params = ClusterParams::new(distance_km, litre_target)?;
        info!(distance_km, litre_target, "clustering undelivered orders");

        let (locations, catalog) = self.load()?;
        let clusters = GreedyClusterer::new(&catalog).cluster(&locations, &params)?;

        Ok(assemble(&clusters))
    }

    /// Groups undelivered orders around the given points first.
    ///
    /// The distance threshold is the configured base distance plus
    /// `additional_distance_km`.
    pub fn get_clustered_coords_along_with_specified(
        &self,
        specified: &[Coordinates],
        litre_target: i64,
        additional_distance_km: f64,
    ) -> Result<Vec<GroupedOrders>> {
        if !additional_distance_km.is_finite() || additional_distance_km < 0.0 {
            return Err(ClusterError::InvalidParameter {
                name: "additional_distance_km",
                value: additional_distance_km.to_string(),
            });
        }
        let distance_km = self.config.base_distance_km + additional_distance_km;
        let params = ClusterParams::new(distance_km, litre_target)?;
        info!(
            anchors = specified.len(),
            distance_km,
            litre_target,
            "clustering undelivered orders around specified points"
        );

        let (locations, catalog) = self.load()?;
        let clusters = GreedyClusterer::new(&catalog).cluster_around_anchors(
            &locations,
            specified,
            &params,
        )?;

        Ok(assemble(&clusters))
    }

    /// One record per undelivered location, sorted by latitude then longitude
    pub fn get_all_undelivered_orders_with_litres(&self) -> Result<Vec<GroupedOrders>> {
        let (mut locations, catalog) = self.load()?;
        locations.sort_by(|a, b| a.coordinates.sort_cmp(&b.coordinates));

        let volumes = CapacityAccumulator::new(&catalog).volumes_of(&locations)?;
        let clusters: Vec<Cluster> = locations
            .into_iter()
            .zip(volumes)
            .map(|(location, litres)| {
                let mut cluster = Cluster::new(location.coordinates, Seeding::Free);
                cluster.absorb(location, litres);
                cluster
            })
            .collect();

        info!(locations = clusters.len(), "listed undelivered locations");
        Ok(assemble(&clusters))
    }

    /// Coordinates of undelivered locations whose own volume fits the limit,
    /// sorted by latitude then longitude
    pub fn get_undelivered_coords_within_capacity(
        &self,
        capacity_limit: i64,
    ) -> Result<Vec<Coordinates>> {
        if capacity_limit <= 0 {
            return Err(ClusterError::InvalidParameter {
                name: "capacity_limit",
                value: capacity_limit.to_string(),
            });
        }
        let limit = capacity_limit as u64;

        let (mut locations, catalog) = self.load()?;
        locations.sort_by(|a, b| a.coordinates.sort_cmp(&b.coordinates));

        let volumes = CapacityAccumulator::new(&catalog).volumes_of(&locations)?;
        Ok(locations
            .iter()
            .zip(volumes)
            .filter(|(_, litres)| *litres <= limit)
            .map(|(location, _)| location.coordinates)
            .collect())
    }
}

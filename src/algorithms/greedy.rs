use std::collections::HashSet;

use tracing::{debug, trace};

use crate::algorithms::Clusterer;
use crate::error::{ClusterError, Result};
use crate::models::{
    BagCatalog, Cluster, ClusterParams, Coordinates, Litres, Location, Seeding,
};
use crate::utils::capacity::CapacityAccumulator;

// A location waiting to be placed, with its volume computed up front
#[derive(Debug)]
struct Candidate<'l> {
    location: &'l Location,
    litres: Litres,
    assigned: bool,
}

/// Single-pass greedy clustering under a distance threshold and a litre target.
///
/// Locations are visited in (latitude, longitude) order. A cluster's
/// representative never moves once chosen, so each candidate is tested exactly
/// once per cluster and the result depends only on the input set and the
/// parameters.
#[derive(Debug, Clone, Copy)]
pub struct GreedyClusterer<'a> {
    accumulator: CapacityAccumulator<'a>,
}

impl<'a> GreedyClusterer<'a> {
    /// Creates a clusterer that sizes locations against the given catalog
    pub fn new(catalog: &'a BagCatalog) -> Self {
        Self {
            accumulator: CapacityAccumulator::new(catalog),
        }
    }

    /// Computes volumes and sorts locations into the deterministic visiting order
    fn prepare<'l>(&self, locations: &'l [Location]) -> Result<Vec<Candidate<'l>>> {
        let volumes = self.accumulator.volumes_of(locations)?;

        let mut candidates: Vec<Candidate<'l>> = locations
            .iter()
            .zip(volumes)
            .map(|(location, litres)| Candidate {
                location,
                litres,
                assigned: false,
            })
            .collect();

        // Stable, so equal coordinates keep their input order
        candidates.sort_by(|a, b| a.location.coordinates.sort_cmp(&b.location.coordinates));

        Ok(candidates)
    }

    /// Moves a candidate into the cluster
    fn take(cluster: &mut Cluster, candidate: &mut Candidate<'_>) {
        cluster.absorb(candidate.location.clone(), candidate.litres);
        candidate.assigned = true;
    }

    /// Absorbs every unassigned candidate that fits, scanning in sorted order
    fn grow(cluster: &mut Cluster, candidates: &mut [Candidate<'_>], params: &ClusterParams) {
        for candidate in candidates.iter_mut().filter(|c| !c.assigned) {
            let distance = cluster
                .representative
                .distance_to(&candidate.location.coordinates);
            if cluster.can_absorb(distance, candidate.litres, params) {
                trace!(
                    distance_km = distance,
                    litres = candidate.litres,
                    "absorbing location"
                );
                Self::take(cluster, candidate);
            }
        }
    }

    /// Seeds a cluster at every still-unassigned candidate in order
    fn free_clusters(candidates: &mut [Candidate<'_>], params: &ClusterParams) -> Vec<Cluster> {
        let mut clusters = Vec::new();

        for i in 0..candidates.len() {
            if candidates[i].assigned {
                continue;
            }

            let (seed, rest) = candidates[i..].split_at_mut(1);
            let seed = &mut seed[0];
            let mut cluster = Cluster::new(seed.location.coordinates, Seeding::Free);
            Self::take(&mut cluster, seed);
            // Everything before the seed is already assigned
            Self::grow(&mut cluster, rest, params);

            clusters.push(cluster);
        }

        clusters
    }

    /// Index of the nearest unassigned candidate within the threshold.
    /// Ties go to the earlier candidate in sorted order.
    fn nearest_to(
        anchor: &Coordinates,
        candidates: &[Candidate<'_>],
        params: &ClusterParams,
    ) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;

        for (i, candidate) in candidates.iter().enumerate() {
            if candidate.assigned {
                continue;
            }
            let distance = anchor.distance_to(&candidate.location.coordinates);
            if distance > params.distance_km() {
                continue;
            }
            match best {
                Some((_, best_distance)) if distance >= best_distance => {}
                _ => best = Some((i, distance)),
            }
        }

        best.map(|(i, _)| i)
    }
}

/// Collapses exact duplicates, keeping each anchor's first input index
fn distinct_anchors(anchors: &[Coordinates]) -> Vec<(usize, Coordinates)> {
    let mut seen = HashSet::new();
    anchors
        .iter()
        .enumerate()
        .filter(|(_, anchor)| seen.insert(anchor.dedup_key()))
        .map(|(i, anchor)| (i, *anchor))
        .collect()
}

impl Clusterer for GreedyClusterer<'_> {
    fn cluster(&self, locations: &[Location], params: &ClusterParams) -> Result<Vec<Cluster>> {
        let mut candidates = self.prepare(locations)?;
        let clusters = Self::free_clusters(&mut candidates, params);

        debug!(
            locations = locations.len(),
            clusters = clusters.len(),
            distance_km = params.distance_km(),
            litre_target = params.litre_target(),
            "free clustering finished"
        );

        Ok(clusters)
    }

    fn cluster_around_anchors(
        &self,
        locations: &[Location],
        anchors: &[Coordinates],
        params: &ClusterParams,
    ) -> Result<Vec<Cluster>> {
        if let Some(anchor) = anchors.iter().find(|a| !a.is_finite()) {
            return Err(ClusterError::InvalidParameter {
                name: "anchor",
                value: anchor.to_string(),
            });
        }

        let mut candidates = self.prepare(locations)?;
        let mut clusters = Vec::new();

        for (index, anchor) in distinct_anchors(anchors) {
            let Some(seed) = Self::nearest_to(&anchor, &candidates, params) else {
                debug!(anchor = %anchor, "no unassigned location within reach of anchor");
                continue;
            };

            let mut cluster = Cluster::new(anchor, Seeding::Anchor(index));
            Self::take(&mut cluster, &mut candidates[seed]);
            Self::grow(&mut cluster, &mut candidates, params);

            clusters.push(cluster);
        }

        let anchored = clusters.len();
        clusters.extend(Self::free_clusters(&mut candidates, params));

        debug!(
            locations = locations.len(),
            anchors = anchors.len(),
            anchored_clusters = anchored,
            free_clusters = clusters.len() - anchored,
            "anchor-seeded clustering finished"
        );

        Ok(clusters)
    }
}

//! DBSCAN: Density-Based Spatial Clustering of Applications with Noise.
//!
//! # The Algorithm (Ester et al., 1996)
//!
//! DBSCAN groups points based on neighborhood density. Unlike k-means, it:
//!
//! - Discovers clusters of arbitrary shape
//! - Automatically determines the number of clusters
//! - Identifies noise points (outliers)
//!
//! ## Core Concepts
//!
//! - **Epsilon (ε)**: Maximum distance between two points to be neighbors.
//! - **MinSamples**: Minimum neighborhood size (the point itself counts) for
//!   a point to be "core".
//! - **Core point**: Has at least MinSamples neighbors within ε.
//! - **Border point**: Within ε of a core point but not core itself.
//! - **Noise point**: Neither core nor border.
//!
//! ## Algorithm Steps
//!
//! 1. Precompute the full pairwise distance matrix.
//! 2. For each unvisited point P, in input order:
//!    - Find neighbors within ε (ascending index scan, P included)
//!    - If |neighbors| < MinSamples, mark as noise (may change later)
//!    - Else P is core: open a new cluster, expand through its neighborhood
//!
//! ## Determinism
//!
//! The traversal order, the ascending-index neighbor scan, and the
//! append-order worklist are all part of the contract, not implementation
//! accidents. Cluster membership of interior points is order-independent,
//! but a border point reachable from two clusters joins whichever expansion
//! reaches it first. Two runs over the same input produce bit-identical
//! label arrays.
//!
//! ## Complexity
//!
//! O(n²) time and space for the dense distance matrix. Acceptable for
//! interactive point counts (a few thousand); larger inputs are the caller's
//! problem to downsample or index.
//!
//! ## References
//!
//! Ester et al. (1996). "A Density-Based Algorithm for Discovering Clusters
//! in Large Spatial Databases with Noise." KDD-96.

use log::debug;

use super::traits::Clustering;
use super::util::DistanceMatrix;
use crate::error::{Error, Result};
use crate::point::Point;

/// Label value for noise / unclassified points.
pub const NOISE: i32 = -1;

/// DBSCAN clustering algorithm.
#[derive(Debug, Clone)]
pub struct Dbscan {
    /// Epsilon: maximum distance for neighborhood membership.
    eps: f32,
    /// Minimum neighborhood size (self included) for core point classification.
    min_samples: usize,
}

/// Result of a DBSCAN fit.
#[derive(Debug, Clone)]
pub struct DbscanFit {
    /// One label per input point: [`NOISE`] or a cluster id in `0..n_clusters`.
    pub labels: Vec<i32>,
    /// Number of clusters created, ids numbered contiguously from 0 in
    /// creation order.
    pub n_clusters: usize,
    /// Number of points left labeled [`NOISE`].
    pub n_noise: usize,
}

impl Dbscan {
    /// Create a new DBSCAN clusterer.
    ///
    /// # Arguments
    ///
    /// * `eps` - Maximum distance between two points to be neighbors.
    ///   `eps = 0` is legal and reduces every neighborhood to the point itself.
    /// * `min_samples` - Minimum neighborhood size, counting the point itself,
    ///   for a point to qualify as a density core. Must be at least 1.
    pub fn new(eps: f32, min_samples: usize) -> Self {
        Self { eps, min_samples }
    }

    /// Set epsilon (neighborhood radius).
    pub fn with_eps(mut self, eps: f32) -> Self {
        self.eps = eps;
        self
    }

    /// Set the minimum neighborhood size for core classification.
    pub fn with_min_samples(mut self, min_samples: usize) -> Self {
        self.min_samples = min_samples;
        self
    }

    /// Cluster the points, returning labels and the cluster count.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyInput`] if `points` is empty.
    /// - [`Error::InvalidParameter`] for negative or NaN `eps`, or
    ///   `min_samples == 0`.
    pub fn fit(&self, points: &[Point]) -> Result<DbscanFit> {
        let n = points.len();
        if n == 0 {
            return Err(Error::EmptyInput);
        }

        if !(self.eps >= 0.0) {
            return Err(Error::InvalidParameter {
                name: "eps",
                message: "must be a nonnegative number",
            });
        }

        if self.min_samples == 0 {
            return Err(Error::InvalidParameter {
                name: "min_samples",
                message: "must be at least 1",
            });
        }

        let dist = DistanceMatrix::build(points);
        let mut labels = vec![NOISE; n];
        let mut visited = vec![false; n];
        let mut cluster_id: i32 = 0;

        for i in 0..n {
            if visited[i] {
                continue;
            }
            visited[i] = true;

            let neighbors = dist.neighbors_within(i, self.eps);
            if neighbors.len() < self.min_samples {
                // Stays NOISE for now; a later expansion may still claim it
                // as a border point.
                continue;
            }

            labels[i] = cluster_id;
            self.expand_cluster(&dist, neighbors, &mut labels, &mut visited, cluster_id);
            cluster_id += 1;
        }

        let n_clusters = cluster_id as usize;
        let n_noise = labels.iter().filter(|&&l| l == NOISE).count();
        debug!(
            "dbscan: {} points, eps={}, min_samples={} -> {} clusters, {} noise",
            n, self.eps, self.min_samples, n_clusters, n_noise
        );

        Ok(DbscanFit {
            labels,
            n_clusters,
            n_noise,
        })
    }

    /// Grow cluster `cluster_id` outward from a core point's neighborhood.
    ///
    /// The worklist is processed in append order and is duplicate-guarded by
    /// an index bitset, so it is finite: the point set and distances are
    /// static and each index enters at most once. A previously-noise point
    /// taken from the worklist is upgraded to this cluster (first-writer-wins
    /// border assignment); an unvisited point joins the cluster and, if it is
    /// itself core, contributes its neighborhood to the worklist.
    fn expand_cluster(
        &self,
        dist: &DistanceMatrix,
        seeds: Vec<usize>,
        labels: &mut [i32],
        visited: &mut [bool],
        cluster_id: i32,
    ) {
        let mut queued = vec![false; dist.len()];
        let mut worklist = seeds;
        for &q in &worklist {
            queued[q] = true;
        }

        let mut head = 0;
        while head < worklist.len() {
            let q = worklist[head];
            head += 1;

            if labels[q] == NOISE {
                labels[q] = cluster_id;
            }

            if visited[q] {
                continue;
            }
            visited[q] = true;
            labels[q] = cluster_id;

            let neighbors = dist.neighbors_within(q, self.eps);
            if neighbors.len() >= self.min_samples {
                for nb in neighbors {
                    if !queued[nb] {
                        queued[nb] = true;
                        worklist.push(nb);
                    }
                }
            }
        }
    }
}

impl Clustering for Dbscan {
    fn fit_predict(&self, points: &[Point]) -> Result<Vec<i32>> {
        Ok(self.fit(points)?.labels)
    }

    /// DBSCAN discovers clusters dynamically, so this returns 0.
    ///
    /// The actual count is [`DbscanFit::n_clusters`] after [`Dbscan::fit`].
    fn n_clusters(&self) -> usize {
        0
    }
}

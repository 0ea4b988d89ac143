use crate::error::Result;
use crate::point::Point;

/// Common interface for hard clustering algorithms (one label per point).
pub trait Clustering {
    /// Fit the model (if needed) and return one cluster label per input point.
    ///
    /// Labels are either [`NOISE`](crate::cluster::NOISE) (`-1`) or a cluster
    /// id in `0..n_clusters`. Algorithms without a noise concept (k-means)
    /// never emit the sentinel.
    fn fit_predict(&self, points: &[Point]) -> Result<Vec<i32>>;

    /// The configured number of clusters (if applicable).
    ///
    /// For algorithms that discover the number of clusters dynamically (e.g.
    /// DBSCAN), this returns 0.
    fn n_clusters(&self) -> usize;
}

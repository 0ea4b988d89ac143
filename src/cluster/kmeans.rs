//! K-means clustering (k-means++ seeding, Lloyd iterations).
//!
//! The thin centroid-based alternative to [`Dbscan`](super::Dbscan): the
//! caller supplies the cluster count `k` up front, every point gets a label
//! in `0..k`, and there is no noise concept.
//!
//! **Objective**: Minimize within-cluster sum of squares:
//!
//! ```text
//! J = Σ_k Σ_{x ∈ C_k} ||x - μ_k||²
//! ```
//!
//! **Assumptions**: clusters are roughly spherical, of similar size, and `k`
//! is known. Prefer DBSCAN when any of those does not hold.

use rand::prelude::*;

use super::traits::Clustering;
use crate::error::{Error, Result};
use crate::point::Point;

/// K-means clustering algorithm.
#[derive(Debug, Clone)]
pub struct Kmeans {
    k: usize,
    max_iter: usize,
    tol: f32,
    seed: Option<u64>,
}

/// Result of a k-means fit.
#[derive(Debug, Clone)]
pub struct KmeansFit {
    /// One label per input point, in `0..k`. No noise sentinel.
    pub labels: Vec<i32>,
    /// Final cluster centers, indexed by label.
    pub centers: Vec<Point>,
    /// Number of Lloyd iterations performed.
    pub iterations: usize,
    /// Whether the run stopped on center convergence rather than `max_iter`.
    pub converged: bool,
}

impl Kmeans {
    /// Create a new k-means clusterer for `k` clusters.
    ///
    /// Defaults: `max_iter = 100`, `tol = 1e-4`, unseeded RNG.
    pub fn new(k: usize) -> Self {
        Self {
            k,
            max_iter: 100,
            tol: 1e-4,
            seed: None,
        }
    }

    /// Set the maximum number of Lloyd iterations.
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Set the convergence tolerance (maximum center movement).
    pub fn with_tol(mut self, tol: f32) -> Self {
        self.tol = tol;
        self
    }

    /// Set an RNG seed for reproducible seeding.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Cluster the points, returning labels and the final centers.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyInput`] if `points` is empty.
    /// - [`Error::InvalidParameter`] if `k == 0`.
    /// - [`Error::InvalidClusterCount`] if `k > points.len()`. The request is
    ///   rejected outright; nothing is clamped or clustered.
    pub fn fit(&self, points: &[Point]) -> Result<KmeansFit> {
        let n = points.len();
        if n == 0 {
            return Err(Error::EmptyInput);
        }

        if self.k == 0 {
            return Err(Error::InvalidParameter {
                name: "k",
                message: "must be at least 1",
            });
        }

        if self.k > n {
            return Err(Error::InvalidClusterCount {
                requested: self.k,
                n_items: n,
            });
        }

        let mut rng: StdRng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };

        let mut centers = plus_plus_seeds(points, self.k, &mut rng);
        let mut labels = vec![0i32; n];
        let mut iterations = 0;
        let mut converged = false;

        while iterations < self.max_iter {
            iterations += 1;

            // Assignment step: nearest center, lowest index on ties.
            for (i, p) in points.iter().enumerate() {
                let mut best = 0;
                let mut best_d = p.distance_squared(&centers[0]);
                for (c, center) in centers.iter().enumerate().skip(1) {
                    let d = p.distance_squared(center);
                    if d < best_d {
                        best = c;
                        best_d = d;
                    }
                }
                labels[i] = best as i32;
            }

            // Update step: centers move to the mean of their points. A
            // cluster that lost all its points keeps its previous center.
            let mut sums = vec![(0.0f32, 0.0f32, 0usize); self.k];
            for (i, p) in points.iter().enumerate() {
                let s = &mut sums[labels[i] as usize];
                s.0 += p.x;
                s.1 += p.y;
                s.2 += 1;
            }

            let mut max_shift = 0.0f32;
            for (c, &(sx, sy, count)) in sums.iter().enumerate() {
                if count == 0 {
                    continue;
                }
                let new_center = Point::new(sx / count as f32, sy / count as f32);
                max_shift = max_shift.max(centers[c].distance(&new_center));
                centers[c] = new_center;
            }

            if max_shift <= self.tol {
                converged = true;
                break;
            }
        }

        Ok(KmeansFit {
            labels,
            centers,
            iterations,
            converged,
        })
    }
}

/// K-means++ seeding: first center uniform, each further center drawn with
/// probability proportional to its squared distance from the nearest chosen
/// center (Arthur & Vassilvitskii, 2007).
fn plus_plus_seeds(points: &[Point], k: usize, rng: &mut StdRng) -> Vec<Point> {
    let n = points.len();
    let mut centers = Vec::with_capacity(k);
    centers.push(points[rng.random_range(0..n)]);

    let mut best_d2 = vec![0.0f32; n];
    while centers.len() < k {
        let last = centers[centers.len() - 1];
        let mut total = 0.0f32;
        for (i, p) in points.iter().enumerate() {
            let d2 = p.distance_squared(&last);
            if centers.len() == 1 || d2 < best_d2[i] {
                best_d2[i] = d2;
            }
            total += best_d2[i];
        }

        if total <= 0.0 {
            // All remaining points coincide with chosen centers; any pick is
            // as good as any other.
            centers.push(points[rng.random_range(0..n)]);
            continue;
        }

        let mut target = rng.random_range(0.0..total);
        let mut chosen = n - 1;
        for (i, &d2) in best_d2.iter().enumerate() {
            if target < d2 {
                chosen = i;
                break;
            }
            target -= d2;
        }
        centers.push(points[chosen]);
    }

    centers
}

impl Clustering for Kmeans {
    fn fit_predict(&self, points: &[Point]) -> Result<Vec<i32>> {
        Ok(self.fit(points)?.labels)
    }

    fn n_clusters(&self) -> usize {
        self.k
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(coords: &[(f32, f32)]) -> Vec<Point> {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn test_kmeans_two_clusters() {
        let points = pts(&[
            (0.0, 0.0),
            (0.1, 0.1),
            (0.2, 0.0),
            (10.0, 10.0),
            (10.1, 10.1),
            (10.2, 10.0),
        ]);

        let fit = Kmeans::new(2).with_seed(42).fit(&points).unwrap();

        assert_eq!(fit.labels.len(), 6);
        assert_eq!(fit.centers.len(), 2);
        assert_eq!(fit.labels[0], fit.labels[1]);
        assert_eq!(fit.labels[1], fit.labels[2]);
        assert_eq!(fit.labels[3], fit.labels[4]);
        assert_eq!(fit.labels[4], fit.labels[5]);
        assert_ne!(fit.labels[0], fit.labels[3]);

        // Centers land near the group means.
        let c0 = fit.centers[fit.labels[0] as usize];
        assert!(c0.distance(&Point::new(0.1, 0.033)) < 0.5);
    }

    #[test]
    fn test_kmeans_labels_in_range() {
        let points: Vec<Point> = (0..20)
            .map(|i| Point::new((i % 5) as f32, (i / 5) as f32))
            .collect();

        let fit = Kmeans::new(4).with_seed(7).fit(&points).unwrap();

        for &l in &fit.labels {
            assert!((0..4).contains(&l));
        }
    }

    #[test]
    fn test_kmeans_k_equals_n() {
        let points = pts(&[(0.0, 0.0), (5.0, 0.0), (10.0, 0.0)]);

        let fit = Kmeans::new(3).with_seed(1).fit(&points).unwrap();

        // Every point gets a label; with k == n all labels are distinct once
        // converged on well-separated points.
        let mut seen = fit.labels.clone();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_kmeans_rejects_k_above_n() {
        let points = pts(&[(0.0, 0.0), (1.0, 1.0)]);

        let result = Kmeans::new(5).fit(&points);
        match result {
            Err(Error::InvalidClusterCount { requested, n_items }) => {
                assert_eq!(requested, 5);
                assert_eq!(n_items, 2);
            }
            other => panic!("expected InvalidClusterCount, got {other:?}"),
        }
    }

    #[test]
    fn test_kmeans_empty_and_zero_k() {
        assert!(matches!(
            Kmeans::new(2).fit(&[]),
            Err(Error::EmptyInput)
        ));
        assert!(Kmeans::new(0).fit(&pts(&[(0.0, 0.0)])).is_err());
    }

    #[test]
    fn test_kmeans_seeded_runs_are_reproducible() {
        let points: Vec<Point> = (0..30)
            .map(|i| Point::new((i * 7 % 13) as f32, (i * 3 % 11) as f32))
            .collect();

        let a = Kmeans::new(3).with_seed(99).fit(&points).unwrap();
        let b = Kmeans::new(3).with_seed(99).fit(&points).unwrap();

        assert_eq!(a.labels, b.labels);
    }

    #[test]
    fn test_kmeans_duplicate_points() {
        // All points identical: seeding falls back to uniform picks and the
        // run still terminates with valid labels.
        let points = vec![Point::new(2.0, 2.0); 5];

        let fit = Kmeans::new(2).with_seed(3).fit(&points).unwrap();

        assert_eq!(fit.labels.len(), 5);
        for &l in &fit.labels {
            assert!((0..2).contains(&l));
        }
    }
}

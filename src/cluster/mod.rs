//! Clustering algorithms for grouping extracted raster points.
//!
//! Two algorithms are provided, both consuming the same [`Point`] sequences
//! produced by [`crate::extract`]:
//!
//! ## DBSCAN
//!
//! Density-based clustering that discovers the number of clusters itself and
//! labels outliers as noise. This is the primary algorithm of the crate and
//! the one with order-sensitive semantics worth reading about: see
//! [`Dbscan`] for the traversal and border-point rules.
//!
//! ## K-means
//!
//! The classic centroid algorithm: assign each point to the nearest center,
//! move centers to the mean of their points, repeat. Requires `k` up front
//! and has no noise concept. Included as the simple alternative when cluster
//! count is known.
//!
//! ## Labels
//!
//! Both algorithms emit one `i32` label per input point. DBSCAN may emit the
//! [`NOISE`] sentinel (`-1`); k-means labels are always in `0..k`. The label
//! array always has the same length as the input.
//!
//! ## Usage
//!
//! ```rust
//! use stipple::cluster::{Clustering, Dbscan, Kmeans};
//! use stipple::Point;
//!
//! let points = vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(0.5, 0.5),
//!     Point::new(10.0, 10.0),
//!     Point::new(10.5, 10.5),
//! ];
//!
//! // Density clustering: discovers two clusters.
//! let fit = Dbscan::new(1.0, 2).fit(&points).unwrap();
//! assert_eq!(fit.n_clusters, 2);
//! assert_eq!(fit.labels[0], fit.labels[1]);
//! assert_ne!(fit.labels[0], fit.labels[2]);
//!
//! // Centroid clustering with a known k.
//! let labels = Kmeans::new(2).with_seed(42).fit_predict(&points).unwrap();
//! assert_eq!(labels.len(), points.len());
//! ```
//!
//! [`Point`]: crate::Point

mod dbscan;
mod kmeans;
mod traits;
mod util;

pub use dbscan::{Dbscan, DbscanFit, NOISE};
pub use kmeans::{Kmeans, KmeansFit};
pub use traits::Clustering;

//! Raster point extraction and density clustering.
//!
//! `stipple` is a small library for turning drawn marks on a binary raster
//! into points and grouping those points into clusters:
//!
//! - [`extract`] converts a single-channel raster into an ordered point
//!   sequence, resolving touching/overlapping round marks via distance
//!   transform peaks.
//! - [`cluster`] provides DBSCAN (density clustering with noise labeling)
//!   and k-means (k-means++ seeding, Lloyd iterations) over those points.
//! - [`render`] draws a clustering result back onto an RGB raster with a
//!   deterministic per-cluster palette.
//!
//! The pipeline is pure and synchronous: raster in, points out, labels out,
//! raster back. All fallible operations return [`Result`]; nothing panics on
//! malformed input.
//!
//! ```rust
//! use image::{GrayImage, Luma};
//! use imageproc::drawing::draw_filled_circle_mut;
//! use stipple::{extract_points_gray, render, Dbscan};
//!
//! let mut canvas = GrayImage::from_pixel(200, 200, Luma([255u8]));
//! draw_filled_circle_mut(&mut canvas, (50, 50), 10, Luma([0u8]));
//! draw_filled_circle_mut(&mut canvas, (60, 55), 10, Luma([0u8]));
//! draw_filled_circle_mut(&mut canvas, (150, 150), 10, Luma([0u8]));
//!
//! let points = extract_points_gray(&canvas);
//! let fit = Dbscan::new(30.0, 2).fit(&points).unwrap();
//!
//! let overlay = render(&points, &fit.labels, fit.n_clusters, 200, 200).unwrap();
//! assert_eq!(overlay.dimensions(), (200, 200));
//! ```

#![forbid(unsafe_code)]

pub mod cluster;
pub mod error;
pub mod extract;
pub mod point;
pub mod render;

pub use cluster::{Clustering, Dbscan, DbscanFit, Kmeans, KmeansFit, NOISE};
pub use error::{Error, Result};
pub use extract::{extract_points, extract_points_gray};
pub use point::Point;
pub use render::render;

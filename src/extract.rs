//! Point extraction from binary/grayscale rasters.
//!
//! Turns drawn marks into an ordered sequence of [`Point`]s. The pipeline
//! deliberately resolves touching and overlapping round marks that a plain
//! connected-component centroid would merge into one:
//!
//! 1. Binarize at a fixed threshold: dark pixels (≤ 127) are the marks.
//! 2. Exact Euclidean distance transform of the mask: each mark pixel's
//!    value is its distance to the nearest background pixel.
//! 3. Peak detection: pixels whose distance value is maximal over a 7×7
//!    window and above 30% of the global maximum. Touching circles keep one
//!    peak per center.
//! 4. Fallback A, if no peaks: centroids of the mask's outer contours.
//! 5. Fallback B, if still nothing: every foreground pixel verbatim.
//!
//! The fallback chain is a degrade-gracefully policy, not belt-and-braces:
//! thin strokes and single-pixel marks can have no interior distance peak
//! and rely on the later stages. An all-background raster yields an empty
//! sequence without touching the fallbacks.
//!
//! Extraction is pure and deterministic; points come out in row-major scan
//! order, which downstream DBSCAN treats as the tie-breaking input order.

use image::{DynamicImage, GrayImage, Luma};
use imageproc::contours::{find_contours, BorderType};
use imageproc::distance_transform::euclidean_squared_distance_transform;
use log::debug;

use crate::error::{Error, Result};
use crate::point::Point;

/// Pixels at or below this value are foreground (drawn marks).
pub const FOREGROUND_MAX: u8 = 127;

/// A distance peak must exceed this fraction of the global maximum distance.
const PEAK_FRACTION: f64 = 0.3;

/// Chebyshev radius of the peak-detection window (3 spans a 7×7 neighborhood).
const PEAK_WINDOW_RADIUS: i64 = 3;

/// Extract mark coordinates from a raster of any supported layout.
///
/// Only 8-bit single-channel rasters are accepted; anything else is an
/// [`Error::UnsupportedLayout`]. Use [`extract_points_gray`] when the input
/// is already a [`GrayImage`].
pub fn extract_points(raster: &DynamicImage) -> Result<Vec<Point>> {
    match raster {
        DynamicImage::ImageLuma8(gray) => Ok(extract_points_gray(gray)),
        DynamicImage::ImageLumaA8(_) => Err(Error::UnsupportedLayout {
            found: "8-bit luma with alpha",
        }),
        DynamicImage::ImageLuma16(_) => Err(Error::UnsupportedLayout {
            found: "16-bit luma",
        }),
        DynamicImage::ImageRgb8(_) | DynamicImage::ImageRgba8(_) => Err(Error::UnsupportedLayout {
            found: "8-bit multi-channel color",
        }),
        _ => Err(Error::UnsupportedLayout {
            found: "non-8-bit or multi-channel layout",
        }),
    }
}

/// Extract mark coordinates from a single-channel raster.
///
/// Pure and total: any size is fine, including 0×0; an all-background
/// raster yields an empty sequence.
pub fn extract_points_gray(raster: &GrayImage) -> Vec<Point> {
    let mask = binarize(raster);
    if !mask.pixels().any(|p| p.0[0] > 0) {
        return Vec::new();
    }

    let distance = foreground_distance(&mask);
    let peaks = distance_peaks(&mask, &distance);
    if !peaks.is_empty() {
        debug!("extract: {} distance peaks", peaks.len());
        return peaks;
    }

    let centroids = contour_centroids(&mask);
    if !centroids.is_empty() {
        debug!("extract: no peaks, {} contour centroids", centroids.len());
        return centroids;
    }

    let raw = foreground_pixels(&mask);
    debug!("extract: degraded to {} raw foreground pixels", raw.len());
    raw
}

/// Foreground mask: 255 where the raster is at or below [`FOREGROUND_MAX`].
fn binarize(raster: &GrayImage) -> GrayImage {
    let mut mask = GrayImage::new(raster.width(), raster.height());
    for (x, y, p) in raster.enumerate_pixels() {
        if p.0[0] <= FOREGROUND_MAX {
            mask.put_pixel(x, y, Luma([255u8]));
        }
    }
    mask
}

/// Exact Euclidean distance of each foreground pixel to the nearest
/// background pixel. Background pixels get 0.
///
/// `euclidean_squared_distance_transform` measures distance to the nearest
/// non-zero pixel, so it runs on the inverted mask.
fn foreground_distance(mask: &GrayImage) -> Vec<f64> {
    let mut inverted = GrayImage::new(mask.width(), mask.height());
    for (x, y, p) in mask.enumerate_pixels() {
        if p.0[0] == 0 {
            inverted.put_pixel(x, y, Luma([255u8]));
        }
    }

    let squared = euclidean_squared_distance_transform(&inverted);
    squared.pixels().map(|p| p.0[0].sqrt()).collect()
}

/// Local maxima of the distance map, in row-major order.
///
/// A foreground pixel is a peak iff its distance equals the maximum over the
/// surrounding 7×7 window (clamped at borders) and exceeds
/// `PEAK_FRACTION * max(distance)`. The equality test against the window
/// maximum keeps whole plateaus, which is what separates the centers of
/// touching circular marks.
fn distance_peaks(mask: &GrayImage, distance: &[f64]) -> Vec<Point> {
    let w = mask.width() as i64;
    let h = mask.height() as i64;

    let max_dist = distance.iter().cloned().fold(0.0f64, f64::max);
    if !max_dist.is_finite() {
        // A raster with no background pixel has an unbounded distance map
        // and no meaningful peaks; let the contour fallback handle it.
        return Vec::new();
    }
    let threshold = PEAK_FRACTION * max_dist;

    let mut peaks = Vec::new();
    for y in 0..h {
        for x in 0..w {
            let d = distance[(y * w + x) as usize];
            if d <= threshold {
                continue;
            }

            let mut window_max = 0.0f64;
            for wy in (y - PEAK_WINDOW_RADIUS).max(0)..=(y + PEAK_WINDOW_RADIUS).min(h - 1) {
                for wx in (x - PEAK_WINDOW_RADIUS).max(0)..=(x + PEAK_WINDOW_RADIUS).min(w - 1) {
                    window_max = window_max.max(distance[(wy * w + wx) as usize]);
                }
            }

            if d == window_max {
                peaks.push(Point::new(x as f32, y as f32));
            }
        }
    }
    peaks
}

/// Centroids of the mask's outer contours, from zeroth/first-order moments
/// over the contour points. Degenerate (empty) contours are skipped.
///
/// The mask is padded with a one-pixel background frame first:
/// `find_contours` omits contours that touch the image border, and the
/// masks that reach this fallback routinely do. The frame offset is
/// subtracted from the centroids afterwards.
fn contour_centroids(mask: &GrayImage) -> Vec<Point> {
    let padded = pad_with_background(mask);
    find_contours::<i32>(&padded)
        .into_iter()
        .filter(|c| c.border_type == BorderType::Outer)
        .filter_map(|c| {
            let m00 = c.points.len();
            if m00 == 0 {
                return None;
            }
            let m10: i64 = c.points.iter().map(|p| p.x as i64).sum();
            let m01: i64 = c.points.iter().map(|p| p.y as i64).sum();
            Some(Point::new(
                m10 as f32 / m00 as f32 - 1.0,
                m01 as f32 / m00 as f32 - 1.0,
            ))
        })
        .collect()
}

/// Copy of the mask with a 1-px background frame on every side.
fn pad_with_background(mask: &GrayImage) -> GrayImage {
    let mut padded = GrayImage::new(mask.width() + 2, mask.height() + 2);
    for (x, y, p) in mask.enumerate_pixels() {
        padded.put_pixel(x + 1, y + 1, *p);
    }
    padded
}

/// Every foreground pixel coordinate, row-major.
fn foreground_pixels(mask: &GrayImage) -> Vec<Point> {
    mask.enumerate_pixels()
        .filter(|(_, _, p)| p.0[0] > 0)
        .map(|(x, y, _)| Point::new(x as f32, y as f32))
        .collect()
}

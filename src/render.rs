//! Deterministic rendering of clustering results.
//!
//! Maps (points, labels) onto an RGB raster for inspection and tests: one
//! filled disc per point in its cluster's color, a black contrast ring, gray
//! for noise. The palette comes from an RNG seeded locally inside the render
//! call, so repeated renders of the same result are pixel-identical with no
//! global state involved. The exact RGB values are not a compatibility
//! surface; mutual distinctness (and distinctness from the noise gray) is.

use std::collections::HashSet;

use image::{Rgb, RgbImage};
use rand::prelude::*;

use crate::cluster::NOISE;
use crate::error::{Error, Result};
use crate::point::Point;
use imageproc::drawing::draw_filled_circle_mut;

/// Fixed color for noise points, distinct from every palette color.
pub const NOISE_COLOR: Rgb<u8> = Rgb([128, 128, 128]);

/// Radius of the colored disc drawn per point.
const POINT_RADIUS: i32 = 6;

/// Radius of the black disc drawn underneath (leaves a 1-px ring).
const OUTLINE_RADIUS: i32 = 7;

/// Seed for the palette RNG, local to each render call.
const PALETTE_SEED: u64 = 0x5f17_7c1e;

/// Render a clustering result onto a white raster of the given dimensions.
///
/// `labels` must pair with `points` index-for-index, each label either
/// [`NOISE`] or in `0..n_clusters`.
///
/// # Errors
///
/// [`Error::InvalidParameter`] when `labels` and `points` differ in length
/// or a label falls outside the allowed range.
pub fn render(
    points: &[Point],
    labels: &[i32],
    n_clusters: usize,
    width: u32,
    height: u32,
) -> Result<RgbImage> {
    if labels.len() != points.len() {
        return Err(Error::InvalidParameter {
            name: "labels",
            message: "must have one label per point",
        });
    }
    if labels
        .iter()
        .any(|&l| l != NOISE && !(0..n_clusters as i32).contains(&l))
    {
        return Err(Error::InvalidParameter {
            name: "labels",
            message: "labels must be -1 or in 0..n_clusters",
        });
    }

    let palette = cluster_palette(n_clusters);
    let mut canvas = RgbImage::from_pixel(width, height, Rgb([255, 255, 255]));

    for (p, &label) in points.iter().zip(labels) {
        let color = if label == NOISE {
            NOISE_COLOR
        } else {
            palette[label as usize]
        };
        let center = (p.x.round() as i32, p.y.round() as i32);
        draw_filled_circle_mut(&mut canvas, center, OUTLINE_RADIUS, Rgb([0, 0, 0]));
        draw_filled_circle_mut(&mut canvas, center, POINT_RADIUS, color);
    }

    Ok(canvas)
}

/// One color per cluster id.
///
/// Hues are spread evenly around the wheel with a seeded random offset, at
/// high saturation and value, so cluster colors stay apart from each other
/// and from the desaturated [`NOISE_COLOR`]. At large cluster counts
/// neighboring hues can quantize to the same 8-bit triple, so each color is
/// checked against the ones already issued and re-rolled on collision.
/// Same cluster count, same palette, every call.
fn cluster_palette(n_clusters: usize) -> Vec<Rgb<u8>> {
    let mut rng = StdRng::seed_from_u64(PALETTE_SEED);
    let hue_offset: f32 = rng.random();

    let mut used: HashSet<[u8; 3]> = HashSet::new();
    used.insert(NOISE_COLOR.0);

    (0..n_clusters)
        .map(|c| {
            let hue = (hue_offset + c as f32 / n_clusters.max(1) as f32).fract();
            loop {
                let saturation = 0.65 + 0.3 * rng.random::<f32>();
                let value = 0.8 + 0.2 * rng.random::<f32>();
                let color = hsv_to_rgb(hue, saturation, value);
                if used.insert(color.0) {
                    break color;
                }
            }
        })
        .collect()
}

/// HSV (all in [0, 1]) to 8-bit RGB.
fn hsv_to_rgb(h: f32, s: f32, v: f32) -> Rgb<u8> {
    let h6 = h * 6.0;
    let sector = h6.floor() as i32 % 6;
    let f = h6 - h6.floor();

    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    let (r, g, b) = match sector {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    Rgb([
        (r * 255.0).round() as u8,
        (g * 255.0).round() as u8,
        (b * 255.0).round() as u8,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_dimensions_and_background() {
        let img = render(&[], &[], 0, 40, 30).unwrap();

        assert_eq!(img.dimensions(), (40, 30));
        assert!(img.pixels().all(|&p| p == Rgb([255, 255, 255])));
    }

    #[test]
    fn test_render_is_deterministic() {
        let points = vec![Point::new(10.0, 10.0), Point::new(30.0, 10.0)];
        let labels = vec![0, 1];

        let a = render(&points, &labels, 2, 50, 20).unwrap();
        let b = render(&points, &labels, 2, 50, 20).unwrap();

        assert_eq!(a.as_raw(), b.as_raw());
    }

    #[test]
    fn test_noise_renders_gray_with_outline() {
        let points = vec![Point::new(20.0, 20.0)];
        let labels = vec![NOISE];

        let img = render(&points, &labels, 0, 40, 40).unwrap();

        assert_eq!(*img.get_pixel(20, 20), NOISE_COLOR);
        // 7 px out from the center sits on the black ring.
        assert_eq!(*img.get_pixel(27, 20), Rgb([0, 0, 0]));
        assert_eq!(*img.get_pixel(20, 0), Rgb([255, 255, 255]));
    }

    #[test]
    fn test_cluster_colors_are_distinct() {
        // Large enough that neighboring hues would collide after 8-bit
        // quantization without the dedup pass.
        for n in [6, 64, 256] {
            let palette = cluster_palette(n);

            let mut seen = HashSet::new();
            seen.insert(NOISE_COLOR.0);
            for color in &palette {
                assert!(seen.insert(color.0), "duplicate color in palette({n})");
            }
        }
    }

    #[test]
    fn test_cluster_color_stable_across_renders() {
        let points = vec![Point::new(15.0, 15.0)];

        let a = render(&points, &[0], 3, 30, 30).unwrap();
        let b = render(&points, &[0], 3, 30, 30).unwrap();

        assert_eq!(a.get_pixel(15, 15), b.get_pixel(15, 15));
    }

    #[test]
    fn test_render_rejects_mismatched_labels() {
        let points = vec![Point::new(1.0, 1.0)];

        assert!(render(&points, &[], 0, 10, 10).is_err());
        assert!(render(&points, &[3], 2, 10, 10).is_err());
        assert!(render(&points, &[-2], 2, 10, 10).is_err());
    }
}

//! End-to-end pipeline demo: draw marks on a raster, extract points,
//! cluster them with DBSCAN and k-means, render the result.
//!
//! Run with `cargo run --example clustering`; writes `clusters.png` to the
//! working directory.

use image::{GrayImage, Luma};
use imageproc::drawing::draw_filled_circle_mut;
use stipple::{extract_points_gray, render, Dbscan, Kmeans, NOISE};

fn main() {
    env_logger::init();

    // A 300x300 white canvas with three groups of drawn dots plus one stray
    // mark, mimicking what a user would scribble in the drawing surface.
    let mut canvas = GrayImage::from_pixel(300, 300, Luma([255u8]));
    let groups: &[&[(i32, i32)]] = &[
        &[(50, 60), (70, 55), (60, 80), (85, 70)],
        &[(210, 50), (230, 65), (220, 85)],
        &[(120, 220), (145, 230), (130, 250), (155, 215)],
    ];
    for group in groups {
        for &(x, y) in *group {
            draw_filled_circle_mut(&mut canvas, (x, y), 8, Luma([0u8]));
        }
    }
    // Stray mark far away from everything.
    draw_filled_circle_mut(&mut canvas, (280, 280), 8, Luma([0u8]));

    let points = extract_points_gray(&canvas);
    println!("extracted {} points", points.len());

    // --- DBSCAN ---
    let eps = 40.0;
    let min_samples = 2;
    let fit = Dbscan::new(eps, min_samples).fit(&points).unwrap();

    println!("\n=== DBSCAN ===");
    println!("points:      {}", points.len());
    println!("eps:         {eps}");
    println!("min_samples: {min_samples}");
    println!("clusters:    {}", fit.n_clusters);
    println!("noise:       {}", fit.n_noise);
    for (i, (p, &label)) in points.iter().zip(&fit.labels).enumerate() {
        let tag = if label == NOISE {
            "NOISE".to_string()
        } else {
            format!("cluster {label}")
        };
        println!("  point {i:2} ({:6.1}, {:6.1}) => {tag}", p.x, p.y);
    }

    // --- K-means with the discovered cluster count ---
    if fit.n_clusters > 0 {
        let kfit = Kmeans::new(fit.n_clusters)
            .with_seed(42)
            .fit(&points)
            .unwrap();
        println!("\n=== K-means (k={}) ===", fit.n_clusters);
        println!(
            "converged: {} after {} iterations",
            kfit.converged, kfit.iterations
        );
        for (c, center) in kfit.centers.iter().enumerate() {
            println!("  center {c}: ({:6.1}, {:6.1})", center.x, center.y);
        }
    }

    let overlay = render(
        &points,
        &fit.labels,
        fit.n_clusters,
        canvas.width(),
        canvas.height(),
    )
    .unwrap();
    overlay.save("clusters.png").expect("failed to write clusters.png");
    println!("\nwrote clusters.png");
}

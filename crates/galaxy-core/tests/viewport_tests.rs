// Host-side tests for visible-extent math.

use galaxy_core::viewport::{half_width_at, max_travel};
use galaxy_core::{Camera, FieldConfig};

#[test]
fn half_width_matches_frustum_formula() {
    let camera = Camera::new(16.0 / 9.0);
    // distance 15, fov 45deg: height = 2 * tan(22.5deg) * 15
    let expected = 2.0 * (22.5f32.to_radians()).tan() * 15.0 * (16.0 / 9.0) / 2.0;
    let got = half_width_at(&camera, 0.0);
    assert!((got - expected).abs() < 1e-4, "got {got}, expected {expected}");
}

#[test]
fn half_width_grows_with_distance() {
    let camera = Camera::new(1.5);
    let mut prev = half_width_at(&camera, 14.9);
    for step in 1..60 {
        let z = 14.9 - step as f32 * 0.5;
        let w = half_width_at(&camera, z);
        assert!(w > prev, "extent not increasing at z={z}");
        prev = w;
    }
}

#[test]
fn half_width_stays_positive_at_and_behind_camera_plane() {
    let camera = Camera::new(1.0);
    for z in [15.0, 15.5, 100.0] {
        let w = half_width_at(&camera, z);
        assert!(w > 0.0 && w.is_finite(), "z={z} gave {w}");
    }
    assert_eq!(half_width_at(&camera, 15.0), half_width_at(&camera, 200.0));
}

#[test]
fn half_width_scales_with_aspect() {
    let wide = Camera::new(2.0);
    let narrow = Camera::new(0.5);
    let ratio = half_width_at(&wide, -1.0) / half_width_at(&narrow, -1.0);
    assert!((ratio - 4.0).abs() < 1e-4);
}

#[test]
fn max_travel_keeps_margin_and_floor() {
    let config = FieldConfig::default();
    let camera = Camera::new(16.0 / 9.0);
    let half = half_width_at(&camera, 0.0);
    let travel = max_travel(&camera, &config, 0.0);
    assert!((travel - (half - config.viewport_margin)).abs() < 1e-5);

    // So narrow the margin eats the whole extent: floor applies
    let sliver = Camera::new(0.01);
    assert_eq!(max_travel(&sliver, &config, 0.0), config.min_travel);
}

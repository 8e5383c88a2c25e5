// File: crates/barchart-core/tests/scales.rs
// Purpose: Band/value scale math and tick layout helpers.

use barchart_core::grid::{format_tick, nice_step, ticks};
use barchart_core::scale::{BandScale, ValueScale};

#[test]
fn band_centers_are_evenly_spaced() {
    let bands = BandScale::new(0.0, 160.0, 16);
    assert_eq!(bands.band_width(), 10.0);
    assert_eq!(bands.center(0), 5.0);
    assert_eq!(bands.center(15), 155.0);
    assert_eq!(bands.bar_width(0.8), 8.0);
}

#[test]
fn value_scale_maps_endpoints_and_midpoint() {
    let s = ValueScale::new_linear(0.0, 100.0, 0.0, 10.0);
    assert_eq!(s.to_px(0.0), 100.0);
    assert_eq!(s.to_px(10.0), 0.0);
    assert_eq!(s.to_px(5.0), 50.0);
    assert!((s.from_px(50.0) - 5.0).abs() < 1e-9);
}

#[test]
fn value_scale_preserves_tiny_spans() {
    // abs-error magnitudes: the span itself is ~5e-14
    let s = ValueScale::new_linear(0.0, 500.0, 0.0, 5.0e-14);
    let y = s.to_px(2.5e-14);
    assert!((y - 250.0).abs() < 0.5, "midpoint of a tiny span must map to mid-plot");
}

#[test]
fn degenerate_ranges_are_widened() {
    let s = ValueScale::new_linear(0.0, 100.0, 2.0, 2.0);
    assert!(s.vmax > s.vmin);
    assert!(s.to_px(2.0).is_finite());
}

#[test]
fn nice_steps_round_to_1_2_5() {
    assert_eq!(nice_step(10.0, 5), 2.0);
    assert_eq!(nice_step(1.0, 5), 0.2);
    assert_eq!(nice_step(0.7, 5), 0.2);
    assert_eq!(nice_step(100.0, 4), 50.0); // raw 25 rounds up to 50
}

#[test]
fn ticks_cover_the_range_inclusive() {
    let t = ticks(0.0, 1.0, 6);
    assert_eq!(t.len(), 6);
    assert_eq!(t[0], 0.0);
    assert!((t[5] - 1.0).abs() < 1e-9);
}

#[test]
fn ticks_handle_tiny_ranges() {
    let t = ticks(0.0, 5.04e-14, 6);
    assert!(t.len() >= 4);
    assert_eq!(t[0], 0.0);
    assert!(*t.last().unwrap() <= 5.04e-14 * (1.0 + 1e-6));
}

#[test]
fn tick_labels_switch_to_scientific_for_extremes() {
    assert_eq!(format_tick(0.0), "0");
    assert_eq!(format_tick(2.5), "2.5");
    assert_eq!(format_tick(-0.5), "-0.5");
    assert_eq!(format_tick(1.5e-15), "1.5e-15");
    assert_eq!(format_tick(20000.0), "2.0e4");
}

// File: crates/barchart-core/tests/autoscale.rs
// Purpose: Validate y-axis autoscaling over positive, negative, and zero data.

use barchart_core::{palette, BarSeries, Chart, LabeledValue};

fn chart_of(values: &[f64]) -> Chart {
    let bars = BarSeries::new(
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| LabeledValue::new(format!("v{i}"), v))
            .collect(),
    )
    .expect("valid bars");
    Chart::new(bars, "t", palette::find("deep").expect("palette"))
}

#[test]
fn all_positive_values_keep_the_baseline_at_zero() {
    // magnitudes straight from the abs-error chart
    let chart = chart_of(&[1.05e-15, 4.94e-14, 1.22e-16]);
    assert_eq!(chart.y_axis.min, 0.0, "baseline must not be padded below zero");
    assert!(chart.y_axis.max >= 4.94e-14);
    assert!(chart.y_axis.max <= 4.94e-14 * 1.05, "padding should stay small");
}

#[test]
fn negative_values_extend_the_range_below_zero() {
    let chart = chart_of(&[2.374755859, -0.669192569]);
    assert!(chart.y_axis.min < -0.669192569);
    assert!(chart.y_axis.max > 2.374755859);
}

#[test]
fn all_negative_values_cap_the_range_at_zero() {
    let chart = chart_of(&[-3.463893769, -109.6599942]);
    assert_eq!(chart.y_axis.max, 0.0);
    assert!(chart.y_axis.min < -109.6599942);
}

#[test]
fn all_zero_values_get_a_unit_range() {
    let chart = chart_of(&[0.0, 0.0]);
    assert_eq!(chart.y_axis.min, 0.0);
    assert_eq!(chart.y_axis.max, 1.0);
}

#[test]
fn autoscale_follows_mutated_bars() {
    let mut chart = chart_of(&[1.0, 2.0]);
    let max_before = chart.y_axis.max;
    chart.y_axis.max = 100.0;
    chart.autoscale_y();
    assert_eq!(chart.y_axis.max, max_before);
}

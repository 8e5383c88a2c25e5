// File: crates/barchart-core/src/series.rs
// Summary: Labeled bar data with construction-time validation.

use crate::error::ChartError;

/// One bar: a short human-readable category label and its measurement.
#[derive(Clone, Debug, PartialEq)]
pub struct LabeledValue {
    pub label: String,
    pub value: f64,
}

impl LabeledValue {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self { label: label.into(), value }
    }
}

/// Ordered bar data for a single-row chart.
///
/// Construction enforces the invariants: at least one bar, every label
/// non-empty, labels unique, every value finite. Insertion order is the
/// display order along the x-axis.
#[derive(Clone, Debug)]
pub struct BarSeries {
    bars: Vec<LabeledValue>,
}

impl BarSeries {
    pub fn new(bars: Vec<LabeledValue>) -> Result<Self, ChartError> {
        if bars.is_empty() {
            return Err(ChartError::EmptyData);
        }
        for (i, bar) in bars.iter().enumerate() {
            if bar.label.is_empty() {
                return Err(ChartError::EmptyLabel(i));
            }
            if !bar.value.is_finite() {
                return Err(ChartError::NonFiniteValue {
                    label: bar.label.clone(),
                    value: bar.value,
                });
            }
            if bars[..i].iter().any(|prev| prev.label == bar.label) {
                return Err(ChartError::DuplicateLabel(bar.label.clone()));
            }
        }
        Ok(Self { bars })
    }

    /// Convenience constructor for literal datasets.
    pub fn from_pairs(pairs: &[(&str, f64)]) -> Result<Self, ChartError> {
        Self::new(
            pairs
                .iter()
                .map(|&(label, value)| LabeledValue::new(label, value))
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LabeledValue> {
        self.bars.iter()
    }

    /// (min, max) over all values. The series is never empty.
    pub fn value_range(&self) -> (f64, f64) {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for bar in &self.bars {
            lo = lo.min(bar.value);
            hi = hi.max(bar.value);
        }
        (lo, hi)
    }
}

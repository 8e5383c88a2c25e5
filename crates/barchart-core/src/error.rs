// File: crates/barchart-core/src/error.rs
// Summary: Error taxonomy for chart construction and rendering.

use thiserror::Error;

/// Everything that can go wrong building or rendering a chart.
///
/// Construction problems (empty data, bad labels, unknown palette) are caught
/// before any backend call; `Backend` and `Io` surface failures from the
/// rendering library and the filesystem and are not recoverable here.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("no bars to plot: the labeled value list is empty")]
    EmptyData,

    #[error("bar {0} has an empty label")]
    EmptyLabel(usize),

    #[error("duplicate bar label '{0}'")]
    DuplicateLabel(String),

    #[error("bar '{label}' has a non-finite value {value}")]
    NonFiniteValue { label: String, value: f64 },

    #[error("unknown palette '{0}'")]
    UnknownPalette(String),

    #[error("rendering backend failure: {0}")]
    Backend(String),

    #[error("chart output i/o: {0}")]
    Io(#[from] std::io::Error),
}

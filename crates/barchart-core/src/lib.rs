// File: crates/barchart-core/src/lib.rs
// Summary: Core library entry point; exports public API for bar chart construction and rendering.

pub mod chart;
pub mod series;
pub mod axis;
pub mod grid;
pub mod types;
pub mod scale;
pub mod palette;
pub mod text;
pub mod error;

pub use chart::{Chart, RenderOptions};
pub use series::{BarSeries, LabeledValue};
pub use axis::Axis;
pub use palette::Palette;
pub use text::TextShaper;
pub use error::ChartError;

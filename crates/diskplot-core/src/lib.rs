// File: crates/diskplot-core/src/lib.rs
// Summary: Core library entry point; loads simulator output and renders the comparison charts.

pub mod algorithm;
pub mod axis;
pub mod canvas;
pub mod chart;
pub mod compare;
pub mod dataset;
pub mod display;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod pipeline;
pub mod series;
pub mod text;
pub mod theme;
pub mod types;

pub use algorithm::Algorithm;
pub use axis::Axis;
pub use canvas::{Canvas, DrawTrace, Figure, TextRole};
pub use chart::{Chart, RenderOptions};
pub use compare::{ChartSpec, COMPARE_FILE};
pub use dataset::{Dataset, Row};
pub use display::{Display, Frame, Headless};
pub use error::{ChartError, RowDefect};
pub use pipeline::{render_all, RenderedChart};
pub use series::Series;
pub use theme::Theme;
pub use text::{Align, TextShaper};

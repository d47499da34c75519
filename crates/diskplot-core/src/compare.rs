// File: crates/diskplot-core/src/compare.rs
// Summary: The five chart specs: the 2x2 comparison grid and one standalone chart per algorithm.

use crate::algorithm::Algorithm;
use crate::axis::MARGIN;
use crate::chart::Chart;
use crate::dataset::Dataset;

/// Output file of the comparison grid.
pub const COMPARE_FILE: &str = "compare.png";

/// A figure to render: its panels laid out row-major on a `rows x cols` grid.
#[derive(Clone, Debug)]
pub struct ChartSpec<'a> {
    /// Used as the display window title.
    pub title: String,
    pub output: &'static str,
    pub rows: usize,
    pub cols: usize,
    pub panels: Vec<Chart<'a>>,
}

impl<'a> ChartSpec<'a> {
    /// Four panels, one per algorithm, titled by name, labels on the outer edge only.
    pub fn combined(dataset: &'a Dataset) -> Self {
        let (rows, cols) = (2, 2);
        let mut panels = Vec::with_capacity(Algorithm::ALL.len());
        for algorithm in Algorithm::ALL {
            let (row, col) = algorithm.grid_cell();
            debug_assert_eq!(panels.len(), row * cols + col, "panel order follows grid cells");
            let mut chart = Chart::new();
            chart.title = Some(algorithm.name().to_string());
            chart.add_series(dataset.series(algorithm));
            chart.autoscale_axes(MARGIN);
            chart.label_outer(row, col, rows);
            panels.push(chart);
        }
        Self { title: "Comparison".to_string(), output: COMPARE_FILE, rows, cols, panels }
    }

    /// One algorithm on its own axes, with a legend.
    pub fn standalone(dataset: &'a Dataset, algorithm: Algorithm) -> Self {
        let mut chart = Chart::new();
        chart.add_series(dataset.series(algorithm));
        chart.legend = true;
        chart.autoscale_axes(MARGIN);
        Self {
            title: algorithm.name().to_string(),
            output: algorithm.output_file(),
            rows: 1,
            cols: 1,
            panels: vec![chart],
        }
    }

    /// Every chart in rendering order: the grid, then FIFO, LIFO, SSTF, SCAN.
    pub fn all(dataset: &'a Dataset) -> Vec<Self> {
        let mut specs = vec![Self::combined(dataset)];
        specs.extend(Algorithm::ALL.map(|a| Self::standalone(dataset, a)));
        specs
    }
}

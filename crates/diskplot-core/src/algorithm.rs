// File: crates/diskplot-core/src/algorithm.rs
// Summary: The four disk scheduling algorithms and their fixed chart bindings.

use std::fmt;

use skia_safe as skia;

use crate::theme::palette;

/// Closed set of algorithms the simulator reports on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Fifo,
    Lifo,
    Sstf,
    Scan,
}

impl Algorithm {
    /// Drawing order for both the combined grid and the standalone charts.
    pub const ALL: [Algorithm; 4] = [Algorithm::Fifo, Algorithm::Lifo, Algorithm::Sstf, Algorithm::Scan];

    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Fifo => "FIFO",
            Algorithm::Lifo => "LIFO",
            Algorithm::Sstf => "SSTF",
            Algorithm::Scan => "SCAN",
        }
    }

    /// Dataset column holding this algorithm's average request time. Column 0 is the x-axis.
    pub const fn column(self) -> usize {
        match self {
            Algorithm::Fifo => 1,
            Algorithm::Lifo => 2,
            Algorithm::Sstf => 3,
            Algorithm::Scan => 4,
        }
    }

    /// LIFO keeps the palette's first (default) color.
    pub fn color(self) -> skia::Color {
        match self {
            Algorithm::Fifo => palette::TAB_ORANGE,
            Algorithm::Lifo => palette::TAB_BLUE,
            Algorithm::Sstf => palette::TAB_GREEN,
            Algorithm::Scan => palette::TAB_RED,
        }
    }

    /// File name of the standalone chart.
    pub const fn output_file(self) -> &'static str {
        match self {
            Algorithm::Fifo => "fifo.png",
            Algorithm::Lifo => "lifo.png",
            Algorithm::Sstf => "sstf.png",
            Algorithm::Scan => "scan.png",
        }
    }

    /// (row, col) of this algorithm's panel in the 2x2 comparison grid.
    pub const fn grid_cell(self) -> (usize, usize) {
        match self {
            Algorithm::Fifo => (0, 0),
            Algorithm::Lifo => (0, 1),
            Algorithm::Sstf => (1, 0),
            Algorithm::Scan => (1, 1),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

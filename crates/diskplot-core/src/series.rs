// File: crates/diskplot-core/src/series.rs
// Summary: Read-only (x, y) view of one algorithm over the dataset.

use skia_safe as skia;

use crate::algorithm::Algorithm;

/// One algorithm's line: the shared request counts against its timing column.
/// Invariant: `x.len() == y.len()`.
#[derive(Clone, Copy, Debug)]
pub struct Series<'a> {
    pub algorithm: Algorithm,
    pub x: &'a [f64],
    pub y: &'a [f64],
}

impl<'a> Series<'a> {
    pub fn new(algorithm: Algorithm, x: &'a [f64], y: &'a [f64]) -> Self {
        debug_assert_eq!(x.len(), y.len(), "series x/y length mismatch");
        Self { algorithm, x, y }
    }

    pub fn label(&self) -> &'static str { self.algorithm.name() }

    pub fn color(&self) -> skia::Color { self.algorithm.color() }

    pub fn len(&self) -> usize { self.x.len().min(self.y.len()) }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// Points in file order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + 'a {
        let (x, y) = (self.x, self.y);
        x.iter().copied().zip(y.iter().copied())
    }

    /// Points where both coordinates are finite.
    pub fn finite_points(&self) -> impl Iterator<Item = (f64, f64)> + 'a {
        self.points().filter(|(x, y)| x.is_finite() && y.is_finite())
    }
}

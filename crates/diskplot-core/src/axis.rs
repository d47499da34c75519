// File: crates/diskplot-core/src/axis.rs
// Summary: Axis model with labels, ranges and autoscaling.

/// Axis label shared by every chart's x-axis.
pub const X_LABEL: &str = "Number of Requests";
/// Axis label shared by every chart's y-axis.
pub const Y_LABEL: &str = "Average Request Time (ms)";

/// Fraction of the data span added on each side when autoscaling.
pub const MARGIN: f64 = 0.05;

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max }
    }

    pub fn default_x() -> Self {
        Self::new(X_LABEL, 0.0, 1.0)
    }

    pub fn default_y() -> Self {
        Self::new(Y_LABEL, 0.0, 1.0)
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Fit the range to `values` plus `margin` of the span on both sides.
    /// Non-finite values are ignored; with nothing finite the range is left alone.
    pub fn fit(&mut self, values: impl IntoIterator<Item = f64>, margin: f64) {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for v in values.into_iter().filter(|v| v.is_finite()) {
            lo = lo.min(v);
            hi = hi.max(v);
        }
        if !lo.is_finite() || !hi.is_finite() {
            return;
        }
        if (hi - lo).abs() < 1e-9 {
            // single value: center it in a unit-ish window
            let pad = (lo.abs() * 0.05).max(0.5);
            self.min = lo - pad;
            self.max = hi + pad;
            return;
        }
        let m = (hi - lo) * margin;
        self.min = lo - m;
        self.max = hi + m;
    }

    /// Linear map from data to pixels between `from_px` (at `min`) and `to_px` (at `max`).
    #[inline]
    pub fn to_px(&self, v: f64, from_px: f32, to_px: f32) -> f32 {
        let span = self.span().max(1e-12);
        from_px + ((v - self.min) / span) as f32 * (to_px - from_px)
    }
}

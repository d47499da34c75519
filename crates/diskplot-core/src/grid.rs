// File: crates/diskplot-core/src/grid.rs
// Summary: Tick layout helpers: nice steps and tick label formatting.

/// Step of the form {1, 2, 2.5, 5} x 10^k giving at most `max_ticks` ticks over `span`.
pub fn nice_step(span: f64, max_ticks: usize) -> f64 {
    if !span.is_finite() || span <= 0.0 {
        return 1.0;
    }
    let rough = span / max_ticks.max(1) as f64;
    let mag = 10f64.powf(rough.log10().floor());
    let residual = rough / mag;
    let nice = [1.0, 2.0, 2.5, 5.0, 10.0]
        .into_iter()
        .find(|&n| n >= residual - 1e-12)
        .unwrap_or(10.0);
    nice * mag
}

/// Tick positions that are multiples of the nice step and fall inside `[min, max]`.
/// At most `max_ticks + 2` ticks; none when the step is below the float resolution of the range.
pub fn nice_ticks(min: f64, max: f64, max_ticks: usize) -> (Vec<f64>, f64) {
    let step = nice_step(max - min, max_ticks);
    if !min.is_finite() || !max.is_finite() || max <= min {
        return (Vec::new(), step);
    }
    if min + step == min || max + step == max {
        return (Vec::new(), step);
    }
    let first = (min / step - 1e-9).ceil();
    let last = (max / step + 1e-9).floor();
    if last < first {
        return (Vec::new(), step);
    }
    let count = ((last - first) as usize + 1).min(max_ticks.max(1) + 2);
    let out = (0..count).map(|k| (first + k as f64) * step).collect();
    (out, step)
}

/// Format a tick value with just enough decimals for `step`.
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step > 0.0 && step.is_finite() {
        let d = -(step.log10().floor());
        // 2.5 x 10^k needs one more digit than its magnitude suggests
        let frac = step / 10f64.powf(step.log10().floor());
        let extra = if (frac - 2.5).abs() < 1e-9 { 1.0 } else { 0.0 };
        (d + extra).clamp(0.0, 6.0) as usize
    } else {
        0
    };
    let v = if value.abs() < step.abs() * 1e-9 { 0.0 } else { value };
    format!("{:.*}", decimals, v)
}

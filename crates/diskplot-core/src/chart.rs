// File: crates/diskplot-core/src/chart.rs
// Summary: Chart/panel model and the Skia drawing of one panel into a figure cell.

use skia_safe as skia;

use crate::axis::{Axis, MARGIN};
use crate::canvas::{DrawTrace, TextRole};
use crate::geometry::RectI32;
use crate::grid::{format_tick, nice_ticks};
use crate::series::Series;
use crate::text::{Align, TextShaper};
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, LABEL_SIZE, LEGEND_SIZE, TICK_SIZE, TITLE_SIZE, WIDTH};

const TICK_LEN: f32 = 3.5;
const LINE_WIDTH: f32 = 1.5;
const SPINE_WIDTH: f32 = 0.8;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    /// Cell-to-plot margins applied to every panel.
    pub insets: Insets,
    pub theme: Theme,
    /// Off in pixel snapshot tests, where font availability varies.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::default(),
            draw_labels: true,
        }
    }
}

/// One set of axes: title, overlaid series, axis ranges and label visibility.
#[derive(Clone, Debug)]
pub struct Chart<'a> {
    pub title: Option<String>,
    pub series: Vec<Series<'a>>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub legend: bool,
    /// Axis label and tick labels along the bottom edge.
    pub show_x_labels: bool,
    /// Axis label and tick labels along the left edge.
    pub show_y_labels: bool,
}

impl<'a> Chart<'a> {
    pub fn new() -> Self {
        Self {
            title: None,
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
            legend: false,
            show_x_labels: true,
            show_y_labels: true,
        }
    }

    pub fn add_series(&mut self, series: Series<'a>) {
        self.series.push(series);
    }

    /// Fit both axes to the finite data of all series.
    pub fn autoscale_axes(&mut self, margin: f64) {
        let xs = self.series.iter().flat_map(|s| s.finite_points()).map(|(x, _)| x);
        self.x_axis.fit(xs, margin);
        let ys = self.series.iter().flat_map(|s| s.finite_points()).map(|(_, y)| y);
        self.y_axis.fit(ys, margin);
    }

    /// Keep interior labels only where the panel sits on the grid's outer edge.
    pub fn label_outer(&mut self, row: usize, col: usize, rows: usize) {
        self.show_x_labels = row + 1 == rows;
        self.show_y_labels = col == 0;
    }
}

impl Default for Chart<'_> {
    fn default() -> Self {
        Self::new()
    }
}

/// Draw `chart` into `cell`, recording every text item and line in `trace` under `panel`.
pub(crate) fn draw_panel(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    opts: &RenderOptions,
    cell: RectI32,
    panel: usize,
    chart: &Chart<'_>,
    trace: &mut DrawTrace,
) {
    let theme = &opts.theme;
    let plot = cell.inset(&opts.insets);
    let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);

    let mut fill = skia::Paint::default();
    fill.set_color(theme.axes_background);
    canvas.draw_rect(skia::Rect::from_ltrb(l, t, r, b), &fill);

    // Autoscale a copy so an unscaled chart still lands inside its cell.
    let mut chart = chart.clone();
    if chart.x_axis.span() <= 0.0 || chart.y_axis.span() <= 0.0 {
        chart.autoscale_axes(MARGIN);
    }

    draw_ticks(canvas, shaper, opts, plot, panel, &chart, trace);

    for s in &chart.series {
        draw_line_series(canvas, plot, &chart.x_axis, &chart.y_axis, s);
        trace.record_line(panel, s.label(), s.finite_points().collect());
    }

    let mut spine = skia::Paint::default();
    spine.set_color(theme.spine);
    spine.set_anti_alias(true);
    spine.set_style(skia::paint::Style::Stroke);
    spine.set_stroke_width(SPINE_WIDTH);
    canvas.draw_rect(skia::Rect::from_ltrb(l, t, r, b), &spine);

    if !opts.draw_labels {
        return;
    }

    if let Some(title) = &chart.title {
        shaper.draw(canvas, title, (l + r) * 0.5, t - 8.0, TITLE_SIZE, theme.title, Align::Center);
        trace.record_text(panel, TextRole::Title, title);
    }
    if chart.show_x_labels {
        let y = b + TICK_LEN + 6.0 + TICK_SIZE + 8.0 + LABEL_SIZE;
        shaper.draw(canvas, &chart.x_axis.label, (l + r) * 0.5, y, LABEL_SIZE, theme.axis_label, Align::Center);
        trace.record_text(panel, TextRole::XLabel, &chart.x_axis.label);
    }
    if chart.show_y_labels {
        // Rotated a quarter turn counter-clockwise, centered on the plot's height.
        canvas.save();
        canvas.translate((cell.left as f32 + LABEL_SIZE + 4.0, (t + b) * 0.5));
        canvas.rotate(-90.0, None);
        shaper.draw(canvas, &chart.y_axis.label, 0.0, 0.0, LABEL_SIZE, theme.axis_label, Align::Center);
        canvas.restore();
        trace.record_text(panel, TextRole::YLabel, &chart.y_axis.label);
    }
    if chart.legend {
        draw_legend(canvas, shaper, theme, plot, panel, &chart, trace);
    }
}

fn draw_ticks(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    opts: &RenderOptions,
    plot: RectI32,
    panel: usize,
    chart: &Chart<'_>,
    trace: &mut DrawTrace,
) {
    let theme = &opts.theme;
    let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);

    let mut tick = skia::Paint::default();
    tick.set_color(theme.tick);
    tick.set_anti_alias(true);
    tick.set_stroke_width(SPINE_WIDTH);

    let max_x = (plot.width() / 80).clamp(3, 9) as usize;
    let (xticks, xstep) = nice_ticks(chart.x_axis.min, chart.x_axis.max, max_x);
    for v in xticks {
        let x = chart.x_axis.to_px(v, l, r);
        canvas.draw_line((x, b), (x, b + TICK_LEN), &tick);
        if opts.draw_labels && chart.show_x_labels {
            let label = format_tick(v, xstep);
            shaper.draw(canvas, &label, x, b + TICK_LEN + 4.0 + TICK_SIZE, TICK_SIZE, theme.tick_label, Align::Center);
            trace.record_text(panel, TextRole::XTick, &label);
        }
    }

    let max_y = (plot.height() / 50).clamp(3, 9) as usize;
    let (yticks, ystep) = nice_ticks(chart.y_axis.min, chart.y_axis.max, max_y);
    for v in yticks {
        let y = chart.y_axis.to_px(v, b, t);
        canvas.draw_line((l - TICK_LEN, y), (l, y), &tick);
        if opts.draw_labels && chart.show_y_labels {
            let label = format_tick(v, ystep);
            shaper.draw(canvas, &label, l - TICK_LEN - 3.0, y + TICK_SIZE * 0.35, TICK_SIZE, theme.tick_label, Align::Right);
            trace.record_text(panel, TextRole::YTick, &label);
        }
    }
}

fn draw_line_series(canvas: &skia::Canvas, plot: RectI32, x_axis: &Axis, y_axis: &Axis, series: &Series<'_>) {
    let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);
    let sx = |x: f64| x_axis.to_px(x, l, r);
    let sy = |y: f64| y_axis.to_px(y, b, t);

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(LINE_WIDTH);
    stroke.set_stroke_join(skia::paint::Join::Round);
    stroke.set_stroke_cap(skia::paint::Cap::Round);
    stroke.set_color(series.color());

    // Non-finite samples split the line into separate runs.
    let mut path = skia::Path::new();
    let mut pen_down = false;
    let mut segments = 0usize;
    for (x, y) in series.points() {
        if !(x.is_finite() && y.is_finite()) {
            pen_down = false;
            continue;
        }
        if pen_down {
            path.line_to((sx(x), sy(y)));
            segments += 1;
        } else {
            path.move_to((sx(x), sy(y)));
            pen_down = true;
        }
    }

    canvas.save();
    canvas.clip_rect(skia::Rect::from_ltrb(l, t, r, b), skia::ClipOp::Intersect, true);
    if segments > 0 {
        canvas.draw_path(&path, &stroke);
    } else if let Some((x, y)) = series.finite_points().next() {
        let mut dot = stroke.clone();
        dot.set_style(skia::paint::Style::Fill);
        canvas.draw_circle((sx(x), sy(y)), LINE_WIDTH * 1.5, &dot);
    }
    canvas.restore();
}

/// Legend box in the plot corner covering the fewest data points,
/// trying upper right, upper left, lower left, lower right in that order.
fn draw_legend(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    theme: &Theme,
    plot: RectI32,
    panel: usize,
    chart: &Chart<'_>,
    trace: &mut DrawTrace,
) {
    if chart.series.is_empty() {
        return;
    }
    const PAD: f32 = 6.0;
    const SWATCH: f32 = 20.0;
    const ROW: f32 = LEGEND_SIZE + 8.0;

    let text_w = chart
        .series
        .iter()
        .map(|s| shaper.measure_width(s.label(), LEGEND_SIZE))
        .fold(0.0f32, f32::max);
    let w = PAD * 3.0 + SWATCH + text_w;
    let h = PAD * 2.0 + ROW * chart.series.len() as f32 - 4.0;

    let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);
    let corners = [
        (r - 8.0 - w, t + 8.0),
        (l + 8.0, t + 8.0),
        (l + 8.0, b - 8.0 - h),
        (r - 8.0 - w, b - 8.0 - h),
    ];
    let covered = |(x0, y0): (f32, f32)| {
        chart
            .series
            .iter()
            .flat_map(|s| s.finite_points())
            .map(|(x, y)| (chart.x_axis.to_px(x, l, r), chart.y_axis.to_px(y, b, t)))
            .filter(|&(px, py)| px >= x0 && px <= x0 + w && py >= y0 && py <= y0 + h)
            .count()
    };
    let (x0, y0) = corners
        .iter()
        .copied()
        .min_by_key(|&c| covered(c))
        .unwrap_or(corners[0]);

    let frame_rect = skia::Rect::from_xywh(x0, y0, w, h);
    let mut bg = skia::Paint::default();
    bg.set_anti_alias(true);
    bg.set_color(theme.legend_background);
    canvas.draw_round_rect(frame_rect, 3.0, 3.0, &bg);
    let mut frame = skia::Paint::default();
    frame.set_anti_alias(true);
    frame.set_style(skia::paint::Style::Stroke);
    frame.set_stroke_width(SPINE_WIDTH);
    frame.set_color(theme.legend_frame);
    canvas.draw_round_rect(frame_rect, 3.0, 3.0, &frame);

    let mut swatch = skia::Paint::default();
    swatch.set_anti_alias(true);
    swatch.set_stroke_width(LINE_WIDTH);
    for (i, s) in chart.series.iter().enumerate() {
        let baseline = y0 + PAD + LEGEND_SIZE + ROW * i as f32;
        let mid = baseline - LEGEND_SIZE * 0.35;
        swatch.set_color(s.color());
        canvas.draw_line((x0 + PAD, mid), (x0 + PAD + SWATCH, mid), &swatch);
        shaper.draw(canvas, s.label(), x0 + PAD * 2.0 + SWATCH, baseline, LEGEND_SIZE, theme.axis_label, Align::Left);
        trace.record_text(panel, TextRole::Legend, s.label());
    }
}

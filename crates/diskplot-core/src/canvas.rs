// File: crates/diskplot-core/src/canvas.rs
// Summary: Reusable raster canvas, the per-chart Figure scope that resets it, and the draw trace.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;
use skia_safe as skia;

use crate::chart::{draw_panel, RenderOptions};
use crate::compare::ChartSpec;
use crate::display::Frame;
use crate::error::{ChartError, Result};
use crate::geometry::RectI32;
use crate::text::TextShaper;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextRole {
    Title,
    XLabel,
    YLabel,
    XTick,
    YTick,
    Legend,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DrawnText {
    pub panel: usize,
    pub role: TextRole,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DrawnLine {
    pub panel: usize,
    pub label: String,
    pub points: Vec<(f64, f64)>,
}

/// Structural record of what went into one figure, independent of pixels and fonts.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DrawTrace {
    pub texts: Vec<DrawnText>,
    pub lines: Vec<DrawnLine>,
}

impl DrawTrace {
    pub(crate) fn record_text(&mut self, panel: usize, role: TextRole, text: &str) {
        self.texts.push(DrawnText { panel, role, text: text.to_string() });
    }

    pub(crate) fn record_line(&mut self, panel: usize, label: &str, points: Vec<(f64, f64)>) {
        self.lines.push(DrawnLine { panel, label: label.to_string(), points });
    }

    /// Text of `role` in draw order.
    pub fn texts_with(&self, role: TextRole) -> Vec<&str> {
        self.texts.iter().filter(|t| t.role == role).map(|t| t.text.as_str()).collect()
    }

    /// Text of `role` drawn in `panel`.
    pub fn panel_texts(&self, panel: usize, role: TextRole) -> Vec<&str> {
        self.texts
            .iter()
            .filter(|t| t.panel == panel && t.role == role)
            .map(|t| t.text.as_str())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty() && self.lines.is_empty()
    }
}

/// The one raster surface every chart is drawn on, one [`Figure`] at a time.
pub struct Canvas {
    surface: skia::Surface,
    shaper: TextShaper,
    opts: RenderOptions,
    trace: DrawTrace,
    blank: bool,
}

impl Canvas {
    pub fn new(opts: &RenderOptions) -> Result<Self> {
        let surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| ChartError::Render(format!("failed to create {}x{} raster surface", opts.width, opts.height)))?;
        let mut canvas = Self {
            surface,
            shaper: TextShaper::new(),
            opts: opts.clone(),
            trace: DrawTrace::default(),
            blank: false,
        };
        canvas.reset();
        Ok(canvas)
    }

    /// Start a figure. The canvas is reset when the returned scope is dropped,
    /// whether the chart was saved, failed part way, or was never drawn.
    pub fn figure(&mut self) -> Figure<'_> {
        Figure { canvas: self }
    }

    /// True when nothing has been drawn since the last reset.
    pub fn is_blank(&self) -> bool {
        self.blank
    }

    pub fn width(&self) -> i32 {
        self.opts.width
    }

    pub fn height(&self) -> i32 {
        self.opts.height
    }

    fn reset(&mut self) {
        self.surface.canvas().clear(self.opts.theme.background);
        self.trace = DrawTrace::default();
        self.blank = true;
    }
}

/// A chart in progress on a borrowed [`Canvas`].
pub struct Figure<'c> {
    canvas: &'c mut Canvas,
}

impl Figure<'_> {
    /// Lay out `spec`'s panels on a `rows x cols` grid, row-major.
    pub fn draw(&mut self, spec: &ChartSpec<'_>) {
        let c = &mut *self.canvas;
        let bounds = RectI32::from_ltwh(0, 0, c.opts.width, c.opts.height);
        let cols = spec.cols.max(1);
        let sk = c.surface.canvas();
        for (i, panel) in spec.panels.iter().enumerate() {
            let cell = bounds.grid_cell(spec.rows, cols, i / cols, i % cols);
            draw_panel(sk, &c.shaper, &c.opts, cell, i, panel, &mut c.trace);
        }
        c.blank = false;
        debug!("Drew '{}' ({} panels)", spec.title, spec.panels.len());
    }

    pub fn trace(&self) -> &DrawTrace {
        &self.canvas.trace
    }

    pub fn png_bytes(&mut self) -> Result<Vec<u8>> {
        let image = self.canvas.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| ChartError::Render("encode PNG failed".to_string()))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Encode and write to `path`. The bytes land in a sibling temporary file first,
    /// so a failed write never leaves a truncated image behind.
    pub fn save_png(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.png_bytes()?;
        write_replacing(path, &bytes).map_err(|source| ChartError::WriteFailure {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Saved {} ({} bytes)", path.display(), bytes.len());
        Ok(())
    }

    /// Unpremultiplied RGBA8 copy of the current pixels.
    pub fn frame(&mut self) -> Result<Frame> {
        let (w, h) = (self.canvas.opts.width, self.canvas.opts.height);
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let row_bytes = w as usize * 4;
        let mut pixels = vec![0u8; row_bytes * h as usize];
        if !self.canvas.surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
            return Err(ChartError::Render("read pixels failed".to_string()));
        }
        Ok(Frame { width: w as u32, height: h as u32, pixels })
    }
}

impl Drop for Figure<'_> {
    fn drop(&mut self) {
        self.canvas.reset();
    }
}

fn temp_sibling(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "chart".to_string());
    path.with_file_name(format!(".{name}.tmp"))
}

fn write_replacing(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let tmp = temp_sibling(path);
    let result = fs::write(&tmp, bytes).and_then(|_| fs::rename(&tmp, path));
    if result.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    result
}

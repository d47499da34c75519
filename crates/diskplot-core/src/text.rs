// File: crates/diskplot-core/src/text.rs
// Summary: Single-line chart labels (titles, axis labels, ticks, legend) shaped with Skia textlayout.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextAlign, TextStyle};

/// Preferred families, first match wins; the font manager's fallback covers the rest.
const FAMILIES: [&str; 4] = ["DejaVu Sans", "Liberation Sans", "Arial", "sans-serif"];

/// Labels never wrap; this just has to exceed any chart width.
const UNBOUNDED: f32 = 1.0e5;

/// Horizontal anchoring of a label relative to its x coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

impl Align {
    fn offset(self, width: f32) -> f32 {
        match self {
            Align::Left => 0.0,
            Align::Center => width * 0.5,
            Align::Right => width,
        }
    }
}

/// Shapes and paints chart labels. One per canvas; the font collection is reused across figures.
pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fonts = FontCollection::new();
        fonts.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts }
    }

    fn shape(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut style = TextStyle::new();
        style.set_font_size(size.max(1.0));
        style.set_color(color);
        style.set_font_families(&FAMILIES);

        let mut para_style = ParagraphStyle::new();
        para_style.set_text_align(TextAlign::Left);
        para_style.set_max_lines(1);

        let mut builder = ParagraphBuilder::new(&para_style, &self.fonts);
        builder.push_style(&style);
        builder.add_text(text);
        let mut para = builder.build();
        para.layout(UNBOUNDED);
        para
    }

    /// Advance width of `text` at `size`, for legend sizing.
    pub fn measure_width(&self, text: &str, size: f32) -> f32 {
        self.shape(text, size, skia::Color::TRANSPARENT).max_intrinsic_width()
    }

    /// Paint `text` with its alphabetic baseline at `y`, anchored at `x` per `align`.
    #[allow(clippy::too_many_arguments)]
    pub fn draw(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        x: f32,
        y: f32,
        size: f32,
        color: skia::Color,
        align: Align,
    ) {
        if text.is_empty() {
            return;
        }
        let para = self.shape(text, size, color);
        let left = x - align.offset(para.max_intrinsic_width());
        let top = y - para.alphabetic_baseline();
        para.paint(canvas, (left, top));
    }
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}

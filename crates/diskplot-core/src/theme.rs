// File: crates/diskplot-core/src/theme.rs
// Summary: Figure colors and the tab10 series palette.

use skia_safe as skia;

/// Series colors from the tab10 qualitative palette.
pub mod palette {
    use skia_safe as skia;

    pub const TAB_BLUE: skia::Color = skia::Color::from_argb(255, 0x1f, 0x77, 0xb4);
    pub const TAB_ORANGE: skia::Color = skia::Color::from_argb(255, 0xff, 0x7f, 0x0e);
    pub const TAB_GREEN: skia::Color = skia::Color::from_argb(255, 0x2c, 0xa0, 0x2c);
    pub const TAB_RED: skia::Color = skia::Color::from_argb(255, 0xd6, 0x27, 0x28);
}

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub axes_background: skia::Color,
    pub spine: skia::Color,
    pub tick: skia::Color,
    pub tick_label: skia::Color,
    pub axis_label: skia::Color,
    pub title: skia::Color,
    pub legend_frame: skia::Color,
    pub legend_background: skia::Color,
}

impl Theme {
    /// White figure with black spines and text.
    pub fn classic() -> Self {
        Self {
            name: "classic",
            background: skia::Color::WHITE,
            axes_background: skia::Color::WHITE,
            spine: skia::Color::BLACK,
            tick: skia::Color::BLACK,
            tick_label: skia::Color::BLACK,
            axis_label: skia::Color::BLACK,
            title: skia::Color::BLACK,
            legend_frame: skia::Color::from_argb(255, 0xcc, 0xcc, 0xcc),
            legend_background: skia::Color::from_argb(204, 255, 255, 255),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic()
    }
}

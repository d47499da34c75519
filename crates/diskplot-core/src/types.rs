// File: crates/diskplot-core/src/types.rs
// Summary: Shared types and constants (sizes, paddings, font sizes).

/// Default surface width in pixels (6.4in at 100 dpi).
pub const WIDTH: i32 = 640;
/// Default surface height in pixels (4.8in at 100 dpi).
pub const HEIGHT: i32 = 480;

pub const TITLE_SIZE: f32 = 12.0;
pub const LABEL_SIZE: f32 = 10.0;
pub const TICK_SIZE: f32 = 9.0;
pub const LEGEND_SIZE: f32 = 10.0;

/// Margins between a panel cell and its plot area, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(64, 16, 28, 48)
    }
}

// File: crates/diskplot-core/src/display.rs
// Summary: Interactive display seam: RGBA frames and the headless no-op display.

use log::debug;

use crate::error::Result;

/// Unpremultiplied RGBA8 pixels, row-major, `width * height * 4` bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl Frame {
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        self.pixels.get(i..i + 4).map(|p| [p[0], p[1], p[2], p[3]])
    }

    /// Pack into `0x00RRGGBB` words, the layout window framebuffers expect.
    pub fn to_xrgb(&self) -> Vec<u32> {
        self.pixels
            .chunks_exact(4)
            .map(|px| ((px[0] as u32) << 16) | ((px[1] as u32) << 8) | px[2] as u32)
            .collect()
    }
}

/// Something that presents a finished chart to the user.
/// `show` returns once the chart has been dismissed.
pub trait Display {
    fn show(&mut self, title: &str, frame: &Frame) -> Result<()>;
}

/// Display for headless runs and tests: presents nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct Headless;

impl Display for Headless {
    fn show(&mut self, title: &str, frame: &Frame) -> Result<()> {
        debug!("Headless display: skipping '{}' ({}x{})", title, frame.width, frame.height);
        Ok(())
    }
}

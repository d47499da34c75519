// File: crates/diskplot/src/main.rs
// Summary: Reads the simulator's data.csv and writes/shows the five comparison charts.

use std::path::Path;

use anyhow::{Context, Result};
use diskplot_core::{render_all, Dataset, Display, RenderOptions};
use log::info;

#[cfg(feature = "window")]
mod viewer;

/// Simulator output, relative to the working directory.
const INPUT: &str = "data.csv";

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let dataset = Dataset::load(INPUT).with_context(|| format!("failed to load '{INPUT}'"))?;

    let opts = RenderOptions::default();
    let mut display = make_display();
    let rendered = render_all(&dataset, Path::new("."), &opts, display.as_mut())
        .context("failed to render charts")?;

    for chart in &rendered {
        info!("Wrote {}", chart.path.display());
    }
    Ok(())
}

#[cfg(feature = "window")]
fn make_display() -> Box<dyn Display> {
    Box::new(viewer::WindowViewer::new())
}

#[cfg(not(feature = "window"))]
fn make_display() -> Box<dyn Display> {
    Box::new(diskplot_core::Headless)
}

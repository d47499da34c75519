// File: crates/diskplot-core/src/pipeline.rs
// Summary: Renders all five charts in order: draw, save, display, reset.

use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::canvas::{Canvas, DrawTrace};
use crate::chart::RenderOptions;
use crate::compare::ChartSpec;
use crate::dataset::Dataset;
use crate::display::Display;
use crate::error::{ChartError, Result};

/// What one finished chart produced.
#[derive(Clone, Debug)]
pub struct RenderedChart {
    pub path: PathBuf,
    pub trace: DrawTrace,
}

/// Render the comparison grid and the four standalone charts into `out_dir`.
/// Each chart is saved before it is shown, and the canvas is blank again before the next starts.
pub fn render_all(
    dataset: &Dataset,
    out_dir: &Path,
    opts: &RenderOptions,
    display: &mut dyn Display,
) -> Result<Vec<RenderedChart>> {
    if dataset.is_empty() {
        return Err(ChartError::EmptySeries);
    }

    let specs = ChartSpec::all(dataset);
    let mut canvas = Canvas::new(opts)?;
    let mut rendered = Vec::with_capacity(specs.len());

    for spec in &specs {
        let path = out_dir.join(spec.output);
        let mut figure = canvas.figure();
        figure.draw(spec);
        figure.save_png(&path)?;
        let frame = figure.frame()?;
        display.show(&spec.title, &frame)?;
        rendered.push(RenderedChart { path, trace: figure.trace().clone() });
        drop(figure);
        debug!("Canvas reset after '{}'", spec.title);
    }

    info!("Rendered {} charts into {}", rendered.len(), out_dir.display());
    Ok(rendered)
}

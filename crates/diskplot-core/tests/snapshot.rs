// File: crates/diskplot-core/tests/snapshot.rs
// Purpose: Golden snapshots of the comparison grid and one standalone chart, with bless flow.
// Behavior:
// - Renders with labels off so fonts do not affect pixels.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

use diskplot_core::{Algorithm, Canvas, ChartSpec, Dataset, RenderOptions};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(path: &std::path::Path, bytes: &[u8]) {
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read(path).expect("read snapshot");
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "Pixels differ: {}", path.display());
    } else {
        eprintln!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

fn simulated() -> Dataset {
    Dataset::from_rows((0..11).map(|i| {
        let n = (50 + i * 10) as f64;
        [n, n * 0.92, n * 1.05 + (i % 3) as f64, n * 0.41, n * 0.47]
    }))
}

fn render(spec: &ChartSpec<'_>) -> Vec<u8> {
    let opts = RenderOptions { draw_labels: false, ..RenderOptions::default() };
    let mut canvas = Canvas::new(&opts).expect("canvas");
    let mut fig = canvas.figure();
    fig.draw(spec);
    fig.png_bytes().expect("render bytes")
}

#[test]
fn golden_compare() {
    let ds = simulated();
    let bytes = render(&ChartSpec::combined(&ds));
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__/compare.png");
    write_or_compare(&path, &bytes);
}

#[test]
fn golden_sstf() {
    let ds = simulated();
    let bytes = render(&ChartSpec::standalone(&ds, Algorithm::Sstf));
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__/sstf.png");
    write_or_compare(&path, &bytes);
}

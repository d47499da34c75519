// File: crates/diskplot-core/tests/pipeline.rs
// Purpose: End-to-end runs: five files in order, save before display, and failure paths.

use std::path::{Path, PathBuf};

use diskplot_core::{render_all, ChartError, Dataset, Display, Frame, Headless, RenderOptions, TextRole};

const OUTPUTS: [&str; 5] = ["compare.png", "fifo.png", "lifo.png", "sstf.png", "scan.png"];

fn fresh_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from("target/test_out/pipeline").join(name);
    if dir.exists() {
        std::fs::remove_dir_all(&dir).unwrap();
    }
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn pngs_in(dir: &Path) -> Vec<String> {
    let mut names = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect::<Vec<_>>();
    names.sort();
    names
}

fn sample() -> Dataset {
    Dataset::parse("NumReqs,FIFO,LIFO,SSTF,SCAN\n10,5.0,6.0,4.0,4.5\n20,7.0,9.0,5.0,6.0\n").unwrap()
}

/// Records each show and whether that chart's file was already on disk.
struct Recorder {
    dir: PathBuf,
    shown: Vec<(String, bool)>,
}

impl Display for Recorder {
    fn show(&mut self, title: &str, frame: &Frame) -> diskplot_core::error::Result<()> {
        assert_eq!(frame.pixels.len(), (frame.width * frame.height * 4) as usize);
        let file = OUTPUTS[self.shown.len()];
        self.shown.push((title.to_string(), self.dir.join(file).exists()));
        Ok(())
    }
}

#[test]
fn writes_five_charts_in_order() {
    let dir = fresh_dir("ok");
    let ds = sample();
    let mut display = Recorder { dir: dir.clone(), shown: Vec::new() };
    let rendered = render_all(&ds, &dir, &RenderOptions::default(), &mut display).expect("render");

    let paths = rendered.iter().map(|r| r.path.clone()).collect::<Vec<_>>();
    let want = OUTPUTS.iter().map(|f| dir.join(f)).collect::<Vec<_>>();
    assert_eq!(paths, want);
    for path in &paths {
        let bytes = std::fs::read(path).expect("output exists");
        assert!(bytes.starts_with(&[137, 80, 78, 71]), "{} should be a PNG", path.display());
    }
    // nothing but the five images, no temporaries
    let mut expected = OUTPUTS.map(String::from).to_vec();
    expected.sort();
    assert_eq!(pngs_in(&dir), expected);

    let shown = display.shown.iter().map(|(t, _)| t.as_str()).collect::<Vec<_>>();
    assert_eq!(shown, ["Comparison", "FIFO", "LIFO", "SSTF", "SCAN"]);
    assert!(display.shown.iter().all(|(_, saved)| *saved), "each chart is saved before it is shown");
}

#[test]
fn fifo_chart_content() {
    let dir = fresh_dir("fifo");
    let rendered = render_all(&sample(), &dir, &RenderOptions::default(), &mut Headless).expect("render");
    let fifo = &rendered[1];
    assert!(fifo.path.ends_with("fifo.png"));
    assert_eq!(fifo.trace.lines.len(), 1);
    assert_eq!(fifo.trace.lines[0].points, vec![(10.0, 5.0), (20.0, 7.0)]);
    assert_eq!(fifo.trace.texts_with(TextRole::XLabel), ["Number of Requests"]);
    assert_eq!(fifo.trace.texts_with(TextRole::YLabel), ["Average Request Time (ms)"]);
    assert_eq!(fifo.trace.texts_with(TextRole::Legend), ["FIFO"]);

    let compare = &rendered[0];
    assert_eq!(compare.trace.texts_with(TextRole::Title), ["FIFO", "LIFO", "SSTF", "SCAN"]);
}

#[test]
fn rerun_overwrites_with_same_text() {
    let dir = fresh_dir("rerun");
    let ds = sample();
    let first = render_all(&ds, &dir, &RenderOptions::default(), &mut Headless).expect("first");
    let second = render_all(&ds, &dir, &RenderOptions::default(), &mut Headless).expect("second");
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.path, b.path);
        assert_eq!(a.trace, b.trace);
    }
    assert_eq!(pngs_in(&dir).len(), 5);
}

#[test]
fn empty_dataset_is_empty_series() {
    let dir = fresh_dir("empty");
    let ds = Dataset::parse("NumReqs,FIFO,LIFO,SSTF,SCAN\n").unwrap();
    let err = render_all(&ds, &dir, &RenderOptions::default(), &mut Headless).unwrap_err();
    assert!(matches!(err, ChartError::EmptySeries));
    assert_eq!(err.kind(), "EmptySeries");
    assert!(pngs_in(&dir).is_empty());
}

#[test]
fn unwritable_directory_is_write_failure() {
    let dir = PathBuf::from("target/test_out/pipeline/missing_dir/nested");
    let err = render_all(&sample(), &dir, &RenderOptions::default(), &mut Headless).unwrap_err();
    match err {
        ChartError::WriteFailure { path, .. } => assert_eq!(path, dir.join("compare.png")),
        other => panic!("expected WriteFailure, got {other:?}"),
    }
    assert!(!dir.exists());
}

#[test]
fn bad_input_writes_no_images() {
    let dir = fresh_dir("bad_input");
    let input = dir.join("data.csv");
    std::fs::write(&input, "NumReqs,FIFO,LIFO,SSTF,SCAN\n10,5,6,4,4.5\n20,7,x,5,6\n").unwrap();

    let run = |input: &Path| -> Result<(), ChartError> {
        let ds = Dataset::load(input)?;
        render_all(&ds, &dir, &RenderOptions::default(), &mut Headless)?;
        Ok(())
    };

    let err = run(&input).unwrap_err();
    assert!(matches!(err, ChartError::MalformedRow { row: 1, .. }));
    let err = run(&dir.join("absent.csv")).unwrap_err();
    assert!(matches!(err, ChartError::InputNotFound { .. }));
    assert_eq!(pngs_in(&dir), ["data.csv"]);
}

struct Failing;

impl Display for Failing {
    fn show(&mut self, _title: &str, _frame: &Frame) -> diskplot_core::error::Result<()> {
        Err(ChartError::Display("no screen".to_string()))
    }
}

#[test]
fn display_failure_stops_after_first_chart() {
    let dir = fresh_dir("display_fail");
    let err = render_all(&sample(), &dir, &RenderOptions::default(), &mut Failing).unwrap_err();
    assert!(matches!(err, ChartError::Display(_)));
    assert_eq!(pngs_in(&dir), ["compare.png"]);
}

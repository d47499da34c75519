// File: crates/diskplot-core/tests/specs.rs
// Purpose: Chart specs: output order, grid placement, outer-only labels, legends.

use diskplot_core::axis::{X_LABEL, Y_LABEL};
use diskplot_core::{Algorithm, ChartSpec, Dataset};

fn sample() -> Dataset {
    Dataset::from_rows([[10.0, 5.0, 6.0, 4.0, 4.5], [20.0, 7.0, 9.0, 5.0, 6.0]])
}

#[test]
fn specs_come_in_rendering_order() {
    let ds = sample();
    let specs = ChartSpec::all(&ds);
    let outputs = specs.iter().map(|s| s.output).collect::<Vec<_>>();
    assert_eq!(outputs, ["compare.png", "fifo.png", "lifo.png", "sstf.png", "scan.png"]);
    let titles = specs.iter().map(|s| s.title.as_str()).collect::<Vec<_>>();
    assert_eq!(titles, ["Comparison", "FIFO", "LIFO", "SSTF", "SCAN"]);
}

#[test]
fn combined_grid_places_panels_row_major() {
    let ds = sample();
    let spec = ChartSpec::combined(&ds);
    assert_eq!((spec.rows, spec.cols), (2, 2));
    let titles = spec.panels.iter().map(|p| p.title.as_deref().unwrap_or("")).collect::<Vec<_>>();
    assert_eq!(titles, ["FIFO", "LIFO", "SSTF", "SCAN"]);
    for (panel, algorithm) in spec.panels.iter().zip(Algorithm::ALL) {
        assert_eq!(panel.series.len(), 1);
        assert_eq!(panel.series[0].algorithm, algorithm);
        assert_eq!(panel.x_axis.label, X_LABEL);
        assert_eq!(panel.y_axis.label, Y_LABEL);
        assert!(!panel.legend);
    }
}

#[test]
fn combined_grid_labels_outer_edges_only() {
    let ds = sample();
    let spec = ChartSpec::combined(&ds);
    let flags = spec.panels.iter().map(|p| (p.show_x_labels, p.show_y_labels)).collect::<Vec<_>>();
    // TL, TR, BL, BR
    assert_eq!(flags, [(false, true), (false, false), (true, true), (true, false)]);
}

#[test]
fn standalone_chart_has_legend_and_labels() {
    let ds = sample();
    for algorithm in Algorithm::ALL {
        let spec = ChartSpec::standalone(&ds, algorithm);
        assert_eq!(spec.output, algorithm.output_file());
        assert_eq!((spec.rows, spec.cols), (1, 1));
        let chart = &spec.panels[0];
        assert!(chart.legend);
        assert!(chart.title.is_none());
        assert!(chart.show_x_labels && chart.show_y_labels);
        assert_eq!(chart.x_axis.label, "Number of Requests");
        assert_eq!(chart.y_axis.label, "Average Request Time (ms)");
        assert_eq!(chart.series[0].label(), algorithm.name());
        assert_eq!(chart.series[0].color(), algorithm.color());
    }
}

#[test]
fn axes_fit_data_with_margin() {
    let ds = sample();
    let spec = ChartSpec::standalone(&ds, Algorithm::Fifo);
    let chart = &spec.panels[0];
    assert!((chart.x_axis.min - 9.5).abs() < 1e-9);
    assert!((chart.x_axis.max - 20.5).abs() < 1e-9);
    assert!((chart.y_axis.min - 4.9).abs() < 1e-9);
    assert!((chart.y_axis.max - 7.1).abs() < 1e-9);
}

#[test]
fn single_row_axes_are_widened() {
    let ds = Dataset::from_rows([[50.0, 3.0, 3.0, 3.0, 3.0]]);
    let spec = ChartSpec::standalone(&ds, Algorithm::Scan);
    let chart = &spec.panels[0];
    assert!(chart.x_axis.min < 50.0 && chart.x_axis.max > 50.0);
    assert!(chart.y_axis.min < 3.0 && chart.y_axis.max > 3.0);
}

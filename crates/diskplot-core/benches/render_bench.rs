use anyhow::Result;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use diskplot_core::{Canvas, ChartSpec, Dataset, RenderOptions};

fn build_dataset(n: usize) -> Dataset {
    Dataset::from_rows((0..n).map(|i| {
        let x = 50.0 + i as f64 * 10.0;
        [x, x * 0.9, x * 1.1, x * 0.4, x * 0.5 + (i as f64 * 0.1).sin()]
    }))
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &n in &[11usize, 10_000usize] {
        let ds = build_dataset(n);
        let mut opts = RenderOptions::default();
        opts.draw_labels = false;
        let mut canvas = Canvas::new(&opts).expect("canvas");
        group.bench_function(format!("compare_{n}"), |b| {
            b.iter(|| -> Result<()> {
                let mut fig = canvas.figure();
                fig.draw(&ChartSpec::combined(&ds));
                black_box(fig.png_bytes()?);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);

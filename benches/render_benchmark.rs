/// Benchmarks for page rendering, theme serialization and chart drawing.
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tarpeydev::page::{render_placeholder, Document};
use tarpeydev::plotting::{default_theme, render_bar_chart_svg, BarChart, Figure};

fn bench_page(c: &mut Criterion) {
    c.bench_function("render_placeholder_html", |b| {
        b.iter(|| black_box(render_placeholder()).into_string())
    });

    c.bench_function("mount_and_serialize_page", |b| {
        b.iter(|| {
            let mut page = Document::host_page("tarpey.dev");
            page.mount("#root", render_placeholder());
            black_box(page.to_html())
        })
    });
}

fn bench_theme(c: &mut Criterion) {
    let theme = default_theme();

    c.bench_function("serialize_theme", |b| {
        b.iter(|| serde_json::to_string(black_box(&*theme)).unwrap())
    });

    c.bench_function("build_figure", |b| {
        b.iter(|| {
            let mut figure = Figure::new(&theme);
            for season in 2015..2022 {
                figure.add_bar(season.to_string(), vec!["Week 1".to_string()], vec![100.0]);
            }
            black_box(figure.to_json().unwrap())
        })
    });

    let chart = (0..25).fold(BarChart::new("Bench"), |chart, i| {
        chart.bar(format!("#{}", i), f64::from(i) * 3.5)
    });
    c.bench_function("render_bar_chart_svg", |b| {
        b.iter(|| render_bar_chart_svg(&theme, black_box(&chart), (800, 600)).unwrap())
    });
}

criterion_group!(benches, bench_page, bench_theme);
criterion_main!(benches);

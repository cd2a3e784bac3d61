use chrono::{TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use luna::ephemeris::compute_positions;
use luna::rendering::{rasterize_png, render, VisualConfig};
use luna::{Chart, SwissEphemeris};

fn sample_chart(ephemeris: &SwissEphemeris) -> Chart {
    let natal_at = Utc.with_ymd_and_hms(1968, 5, 26, 15, 0, 0).unwrap();
    let transit_at = Utc.with_ymd_and_hms(2024, 6, 1, 3, 0, 0).unwrap();
    let natal = compute_positions(ephemeris, natal_at).unwrap();
    let transit = compute_positions(ephemeris, transit_at).unwrap();
    Chart::new(natal, Some(transit))
}

fn bench_compute_positions(c: &mut Criterion) {
    let ephemeris = SwissEphemeris::open(None).unwrap();
    let at = Utc.with_ymd_and_hms(1968, 5, 26, 15, 0, 0).unwrap();

    c.bench_function("compute_positions", |b| {
        b.iter(|| compute_positions(&ephemeris, black_box(at)))
    });
}

fn bench_render(c: &mut Criterion) {
    let ephemeris = SwissEphemeris::open(None).unwrap();
    let chart = sample_chart(&ephemeris);
    let config = VisualConfig::default();

    c.bench_function("render_spec", |b| {
        b.iter(|| render(black_box(&chart), &config, 560))
    });

    let spec = render(&chart, &config, 560);
    c.bench_function("render_svg", |b| b.iter(|| black_box(&spec).to_svg()));
    c.bench_function("rasterize_png", |b| b.iter(|| rasterize_png(black_box(&spec))));
}

criterion_group!(benches, bench_compute_positions, bench_render);
criterion_main!(benches);

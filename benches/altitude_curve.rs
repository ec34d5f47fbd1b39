use chrono::{TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use skygraph::coordinates::altitude_at_instant;
use skygraph::plot::render;
use skygraph::plot::sampler::sample_path;
use skygraph::plot::surface::BitmapSurface;
use skygraph::sky_tonight::SkyScene;

fn bench_altitude(c: &mut Criterion) {
    let instant = Utc.with_ymd_and_hms(1998, 8, 10, 23, 10, 0).unwrap();
    c.bench_function("altitude_at_instant", |b| {
        b.iter(|| {
            altitude_at_instant(
                black_box(&instant),
                black_box(52.5),
                black_box(-1.9166667),
                black_box(250.425),
                black_box(36.466667),
            )
        })
    });
}

fn bench_m13_curve(c: &mut Criterion) {
    let scene = SkyScene::m13_over_paris();
    let curve = scene.curve(Utc.with_ymd_and_hms(2024, 6, 21, 12, 0, 0).unwrap());

    // 10 001 samples at the default 0.1 px interval
    c.bench_function("sample_m13_curve", |b| {
        b.iter(|| {
            sample_path(black_box(&scene.plot), |h| Some(curve.altitude_at_hours(h))).unwrap()
        })
    });

    let mut surface = BitmapSurface::new(scene.plot.width, scene.plot.height);
    c.bench_function("render_m13_bitmap", |b| {
        b.iter(|| {
            render(
                &scene.plot,
                |h| Some(curve.altitude_at_hours(h)),
                Some(&mut surface),
            )
            .unwrap()
        })
    });
}

criterion_group!(benches, bench_altitude, bench_m13_curve);
criterion_main!(benches);

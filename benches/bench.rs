use criterion::*;
use geomag_grid::{estimate, MagneticModel};
use geomag_grid::utils::linspace;

pub fn bench_estimate(c: &mut Criterion) {
    let mut group = c.benchmark_group("estimate");

    // Reused model, one query at a time: the hard-real-time call pattern
    group.bench_function("single point f32", |b| {
        let model = MagneticModel::<f32>::wmm2020();
        b.iter(|| black_box(model.estimate(black_box(47.4_f32), black_box(8.5_f32))));
    });

    // Model construction folded into the call, as the free function does it
    group.bench_function("construct and single point f32", |b| {
        b.iter(|| black_box(estimate::<f32>(black_box(47.4_f32), black_box(8.5_f32))));
    });

    // Dense world sweep to get a throughput figure
    let lats = linspace(-90.0_f64, 90.0, 100);
    let lons = linspace(-180.0_f64, 180.0, 100);
    group.throughput(Throughput::Elements((lats.len() * lons.len()) as u64));
    group.bench_function("world sweep f64", |b| {
        let model = MagneticModel::<f64>::wmm2020();
        b.iter(|| {
            for &lat in &lats {
                for &lon in &lons {
                    black_box(model.estimate(lat, lon));
                }
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_estimate);
criterion_main!(benches);

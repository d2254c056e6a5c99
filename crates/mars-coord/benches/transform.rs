//! Performance benchmarks for mars-coord
//!
//! Run with: cargo bench --package mars-coord

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use mars_coord::batch::{line_string_to_gcj02, wgs84_to_gcj02_batch};
use mars_coord::{Wgs84, gcj02_to_wgs84, gcj02_to_wgs84_precise, wgs84_to_gcj02};

/// Generate a realistic recorded track around Shanghai with the specified number of points.
fn generate_track(num_points: usize) -> Vec<Wgs84> {
    (0..num_points)
        .map(|i| {
            let t = i as f64 / num_points as f64;
            let lat = 31.2 + t * 0.1 + (t * 50.0).sin() * 0.001;
            let lon = 121.4 + t * 0.1 + (t * 30.0).cos() * 0.001;
            Wgs84::new(lat, lon)
        })
        .collect()
}

// ============================================================================
// Core Benchmarks - Single point conversions
// ============================================================================

fn bench_single_point(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_point");

    group.bench_function("forward_in_region", |b| {
        b.iter(|| wgs84_to_gcj02(black_box(39.90923), black_box(116.397428)));
    });

    group.bench_function("forward_out_of_region", |b| {
        b.iter(|| wgs84_to_gcj02(black_box(51.5074), black_box(-0.1278)));
    });

    let (lat, lon) = wgs84_to_gcj02(39.90923, 116.397428);
    group.bench_function("inverse_two_pass", |b| {
        b.iter(|| gcj02_to_wgs84(black_box(lat), black_box(lon)));
    });

    group.bench_function("inverse_precise", |b| {
        b.iter(|| gcj02_to_wgs84_precise(black_box(lat), black_box(lon), 1e-10));
    });

    group.finish();
}

// ============================================================================
// Bulk Benchmarks - Track conversion
// ============================================================================

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    group.sample_size(20);

    for num_points in [1_000, 100_000] {
        let track = generate_track(num_points);
        group.throughput(Throughput::Elements(num_points as u64));

        group.bench_with_input(
            BenchmarkId::new("parallel", num_points),
            &track,
            |b, track| b.iter(|| wgs84_to_gcj02_batch(track)),
        );

        group.bench_with_input(
            BenchmarkId::new("sequential", num_points),
            &track,
            |b, track| {
                b.iter(|| track.iter().map(|c| c.to_gcj02()).collect::<Vec<_>>());
            },
        );

        let line: geo::LineString<f64> = track.iter().map(|c| geo::Coord::from(*c)).collect();
        group.bench_with_input(
            BenchmarkId::new("line_string", num_points),
            &line,
            |b, line| b.iter(|| line_string_to_gcj02(line)),
        );
    }

    group.finish();
}

// ============================================================================
// Criterion Configuration
// ============================================================================

criterion_group!(benches, bench_single_point, bench_batch);

criterion_main!(benches);

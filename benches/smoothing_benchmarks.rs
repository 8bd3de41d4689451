//! Benchmarks for anchor smoothing performance

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use jewelry_tryon::landmarks::Point2D;
use jewelry_tryon::smoothing::SmoothingWindow;

fn benchmark_smoothing(c: &mut Criterion) {
    let mut group = c.benchmark_group("smoothing");

    // Test data - simulating jittery anchor positions around a slow drift
    let test_data: Vec<Point2D> = (0..100)
        .map(|i| {
            let t = i as f64 * 0.1;
            Point2D::new(
                (640.0 + 40.0 * t.sin() + 2.0 * rand::random::<f64>()) as f32,
                (360.0 + 25.0 * t.cos() + 2.0 * rand::random::<f64>()) as f32,
            )
        })
        .collect();

    for window_size in [5usize, 10, 30] {
        group.bench_with_input(
            BenchmarkId::new("push_and_average", window_size),
            &window_size,
            |b, &window_size| {
                let mut window = SmoothingWindow::new(window_size);
                let mut i = 0;
                b.iter(|| {
                    window.push(black_box(test_data[i % test_data.len()]));
                    i += 1;
                    black_box(window.average())
                });
            },
        );
    }

    group.bench_function("full_window_replay", |b| {
        b.iter(|| {
            let mut window = SmoothingWindow::new(5);
            for p in &test_data {
                window.push(black_box(*p));
            }
            black_box(window.average())
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_smoothing);
criterion_main!(benches);

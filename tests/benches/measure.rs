#[macro_use]
extern crate criterion;

use criterion::{BenchmarkId, Criterion};
use meander::geom::CubicBezierSegment;
use meander::math::point;
use meander::measure::PathMeasure;
use meander::path::Path;
use meander_tests::*;
use rand::Rng;

static TOLERANCES: [f32; 5] = [0.01, 0.05, 0.1, 0.25, 0.5];

fn generate_paths(n: usize) -> Vec<Path> {
    let mut rng = rng(42);
    (0..n)
        .map(|_| create_random_path(&mut rng, usize::MAX))
        .collect()
}

fn generate_bezier_curves(n: usize) -> Vec<CubicBezierSegment<f32>> {
    let mut rng = rng(43);
    let mut p = || point(rng.gen_range(-1000.0..1000.0), rng.gen_range(-1000.0..1000.0));
    (0..n)
        .map(|_| CubicBezierSegment {
            from: p(),
            ctrl1: p(),
            ctrl2: p(),
            to: p(),
        })
        .collect()
}

fn cubic_flatten(c: &mut Criterion) {
    let curves = generate_bezier_curves(1000);
    let mut g = c.benchmark_group("flatten");
    for tol in &TOLERANCES {
        g.bench_with_input(BenchmarkId::new("cubic", tol), tol, |b, tol| {
            b.iter(|| {
                for curve in &curves {
                    curve.for_each_flattened(*tol, &mut |segment| {
                        std::hint::black_box(segment);
                    });
                }
            })
        });
    }
}

fn measure_construction(c: &mut Criterion) {
    let paths = generate_paths(100);
    let mut g = c.benchmark_group("measure");
    for tol in &TOLERANCES {
        g.bench_with_input(BenchmarkId::new("construction", tol), tol, |b, tol| {
            b.iter(|| {
                for path in &paths {
                    std::hint::black_box(PathMeasure::with_tolerance(path, *tol).length());
                }
            })
        });
    }
}

fn measure_queries(c: &mut Criterion) {
    let paths = generate_paths(100);
    let measures: Vec<PathMeasure> = paths
        .iter()
        .map(|path| PathMeasure::with_tolerance(path, 0.1))
        .collect();

    c.bench_function("measure sample", |b| {
        b.iter(|| {
            for measure in &measures {
                let length = measure.length();
                for i in 0..100 {
                    std::hint::black_box(measure.sample(length * i as f32 / 100.0));
                }
            }
        })
    });

    c.bench_function("measure closest point", |b| {
        b.iter(|| {
            for measure in &measures {
                for i in 0..10 {
                    let query = point(i as f32 * 100.0 - 500.0, 250.0);
                    std::hint::black_box(measure.closest_point(query, f32::INFINITY));
                }
            }
        })
    });

    c.bench_function("measure add segment", |b| {
        b.iter(|| {
            for measure in &measures {
                let length = measure.length();
                let mut builder = Path::builder();
                measure.add_segment(length * 0.25..length * 0.75, &mut builder);
                std::hint::black_box(builder.build());
            }
        })
    });
}

criterion_group!(flatten, cubic_flatten);
criterion_group!(measure, measure_construction, measure_queries);
criterion_main!(flatten, measure);

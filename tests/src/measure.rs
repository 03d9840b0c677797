use crate::{create_random_path, rng};
use meander::math::{point, Point};
use meander::measure::PathMeasure;
use meander::path::Path;
use rand::Rng;

const TOLERANCE: f32 = 0.5;

fn segment(measure: &PathMeasure, start: f32, end: f32) -> Path {
    let mut builder = Path::builder();
    measure.add_segment(start..end, &mut builder);
    builder.build()
}

fn segment_length(measure: &PathMeasure, start: f32, end: f32) -> f32 {
    let path = segment(measure, start, end);
    PathMeasure::new(&path).length()
}

fn assert_approx_eq(expected: f32, actual: f32, epsilon: f32) {
    assert!(
        (expected - actual).abs() <= epsilon,
        "expected {} got {} (epsilon {})",
        expected,
        actual,
        epsilon
    );
}

#[test]
fn print_concatenated_paths() {
    let mut rng = rng(1);
    for _ in 0..1000 {
        let path1 = create_random_path(&mut rng, usize::MAX);
        let path2 = create_random_path(&mut rng, usize::MAX);

        let mut builder = Path::builder();
        builder.add_path(&path1);
        builder.add_path(&path2);
        let built = builder.build();

        let separator = if !path1.is_empty() && !path2.is_empty() {
            " "
        } else {
            ""
        };
        let expected = format!("{}{}{}", path1, separator, path2);

        assert_eq!(built.to_string(), expected);
    }
}

#[test]
fn parse_printed_paths() {
    let mut rng = rng(2);
    for _ in 0..1000 {
        let path = create_random_path(&mut rng, usize::MAX);
        let printed = path.to_string();
        let parsed = Path::parse(&printed).unwrap();

        assert_eq!(parsed.to_string(), printed);
    }
}

#[test]
fn segment_start() {
    let mut rng = rng(3);
    for _ in 0..20 {
        let path = create_random_path(&mut rng, usize::MAX);
        let measure = PathMeasure::new(&path);
        let length = measure.length();
        let epsilon = (length / 1024.0).max(f32::MIN_POSITIVE);

        for i in 0..100 {
            let seg_length = length * i as f32 / 100.0;
            assert_approx_eq(seg_length, segment_length(&measure, 0.0, seg_length), epsilon);
        }
    }
}

#[test]
fn segment_end() {
    let mut rng = rng(4);
    for _ in 0..20 {
        let path = create_random_path(&mut rng, usize::MAX);
        let measure = PathMeasure::new(&path);
        let length = measure.length();
        let epsilon = (length / 1024.0).max(f32::MIN_POSITIVE);

        for i in 0..100 {
            let seg_length = length * i as f32 / 100.0;
            assert_approx_eq(
                seg_length,
                segment_length(&measure, length - seg_length, length),
                epsilon,
            );
        }
    }
}

#[test]
fn segment_chunk() {
    let mut rng = rng(5);
    for _ in 0..20 {
        let path = create_random_path(&mut rng, usize::MAX);
        let measure = PathMeasure::new(&path);
        let length = measure.length();
        let epsilon = (length / 1024.0).max(f32::MIN_POSITIVE);

        for i in 0..=100 {
            let seg_start = length * i as f32 / 200.0;
            assert_approx_eq(
                length / 2.0,
                segment_length(&measure, seg_start, seg_start + length / 2.0),
                epsilon,
            );
        }
    }
}

#[test]
fn segment_partition() {
    let mut rng = rng(6);
    for _ in 0..1000 {
        let path = create_random_path(&mut rng, usize::MAX);
        let measure = PathMeasure::new(&path);
        let length = measure.length();
        let epsilon = (length / 256.0).max(1.0 / 1024.0);

        let split1 = rng.gen_range(0.0..=length);
        let split2 = rng.gen_range(split1..=length);

        assert_approx_eq(split1, segment_length(&measure, 0.0, split1), epsilon);
        assert_approx_eq(
            split2 - split1,
            segment_length(&measure, split1, split2),
            epsilon,
        );
        assert_approx_eq(
            length - split2,
            segment_length(&measure, split2, length),
            epsilon,
        );
    }
}

#[test]
fn sample_continuity() {
    let max_contours = 5;
    let mut rng = rng(7);
    for _ in 0..10 {
        let path = create_random_path(&mut rng, max_contours);
        let measure = PathMeasure::with_tolerance(&path, TOLERANCE);
        let length = measure.length();

        let mut discontinuities = 0;
        let mut last_offset = 0.0;
        let mut last_point = match measure.sample(0.0) {
            Some(sample) => sample.position(),
            None => continue,
        };

        for j in 1..=1024 {
            let offset = length * j as f32 / 1024.0;
            let p = measure.sample(offset).unwrap().position();

            if (p - last_point).length() > offset - last_offset + TOLERANCE {
                discontinuities += 1;
                assert!(discontinuities < max_contours, "{}", path);
            }

            last_offset = offset;
            last_point = p;
        }
    }
}

#[test]
fn closest_point_of_concatenated_paths() {
    let mut rng = rng(8);
    for _ in 0..50 {
        let path1 = create_random_path(&mut rng, usize::MAX);
        let path2 = create_random_path(&mut rng, usize::MAX);
        let measure1 = PathMeasure::with_tolerance(&path1, TOLERANCE);
        let measure2 = PathMeasure::with_tolerance(&path2, TOLERANCE);

        let mut builder = Path::builder();
        builder.add_path(&path1);
        builder.add_path(&path2);
        let path = builder.build();
        let measure = PathMeasure::with_tolerance(&path, TOLERANCE);

        for _ in 0..100 {
            let query: Point = point(
                rng.gen_range(-1000.0..1000.0),
                rng.gen_range(-1000.0..1000.0),
            );

            let result1 = measure1.closest_point(query, f32::INFINITY);
            let result2 = measure2.closest_point(query, f32::INFINITY);
            let result = measure.closest_point(query, f32::INFINITY);

            match (result1, result2) {
                (None, None) => assert!(result.is_none()),
                (None, Some(result2)) => {
                    // Nothing precedes the second path.
                    assert_eq!(result, Some(result2));
                }
                (Some(result1), None) => {
                    assert_eq!(result, Some(result1));
                }
                (Some(result1), Some(result2)) => {
                    let result = result.unwrap();
                    let (d1, d2) = (result1.distance(), result2.distance());
                    // Distances within rounding errors of each other count as ties.
                    let margin = 1e-5 * (1.0 + query.x.abs().max(query.y.abs()) + d1.max(d2));

                    if d1 <= d2 - margin {
                        assert_eq!(result, result1);
                    } else if d2 <= d1 - margin {
                        // The second path's closest point, shifted by the length of the first path.
                        assert_eq!(result.position(), result2.position());
                        assert_eq!(result.distance(), d2);
                        assert_eq!(result.tangent(), result2.tangent());
                        let expected = result2.offset() + measure1.length();
                        assert_approx_eq(expected, result.offset(), 1e-4 * (1.0 + expected));
                    } else {
                        assert_approx_eq(d1.min(d2), result.distance(), margin);
                    }
                }
            }
        }
    }
}

#[test]
fn closest_point_of_a_sample() {
    let mut rng = rng(9);
    for _ in 0..100 {
        let path = create_random_path(&mut rng, usize::MAX);
        if path.is_empty() {
            // Empty paths have no closest point to anything.
            continue;
        }

        let measure = PathMeasure::with_tolerance(&path, TOLERANCE);
        let length = measure.length();

        for _ in 0..100 {
            let offset = rng.gen_range(0.0..=length);
            let p = measure.sample(offset).unwrap().position();

            let closest = measure.closest_point(p, TOLERANCE).unwrap();
            assert!(closest.distance() <= TOLERANCE);
            assert!((closest.position() - p).length() <= TOLERANCE);
            // Can't test for equality since parts of the path may overlap.
            assert!(closest.offset() < offset + TOLERANCE);
        }
    }
}

#[test]
fn closed_line() {
    let path = Path::parse("M 0 0 L 10 0 Z").unwrap();
    let measure = PathMeasure::new(&path);
    assert_eq!(measure.length(), 20.0);
    assert_eq!(measure.sample(5.0).unwrap().position(), point(5.0, 0.0));

    let path = Path::parse("M 0 0 L 10 0").unwrap();
    assert_eq!(PathMeasure::new(&path).length(), 10.0);
}

#[test]
fn empty_path() {
    let path = Path::builder().build();
    assert!(path.is_empty());

    let measure = PathMeasure::new(&path);
    assert_eq!(measure.length(), 0.0);
    assert!(measure.sample(0.0).is_none());
    assert!(measure
        .closest_point(point(0.0, 0.0), f32::INFINITY)
        .is_none());
}

//! Approximate path length.

use crate::measure::MIN_TOLERANCE;
use crate::path::Path;

/// Computes the length of a path by summing the lengths of its flattened segments.
///
/// Closing segments are taken into account. The result is the same as
/// `PathMeasure::with_tolerance(path, tolerance).length()`, up to floating point rounding,
/// without building the measurement tables.
pub fn approximate_length(path: &Path, tolerance: f32) -> f32 {
    let tolerance = tolerance.max(MIN_TOLERANCE);

    let mut length = 0.0;
    for contour in path.contours() {
        for segment in contour.segments() {
            segment.for_each_flattened(tolerance, &mut |line| {
                length += line.length();
            });
        }
    }

    length
}

#[test]
fn approx_length() {
    use crate::math::point;

    let mut builder = Path::builder();
    builder.move_to(point(0.0, 0.0));
    builder.line_to(point(1.0, 0.0));
    builder.line_to(point(1.0, 1.0));
    builder.line_to(point(0.0, 1.0));
    builder.close();

    let path = builder.build();

    assert!((approximate_length(&path, 0.01) - 4.0).abs() < 0.0001);
}

#[test]
fn approx_length_of_a_circle() {
    use crate::math::point;

    let mut builder = Path::builder();
    builder.add_circle(point(0.0, 0.0), 10.0);
    let path = builder.build();

    let expected = 2.0 * core::f32::consts::PI * 10.0;
    assert!((approximate_length(&path, 0.01) - expected).abs() < 0.1);
}

#[test]
fn approx_length_of_empty_path() {
    assert_eq!(approximate_length(&Path::new(), 0.1), 0.0);
}

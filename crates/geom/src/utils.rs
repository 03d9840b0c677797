//! Various math tools that are mostly useful for the segment types.

use crate::scalar::Scalar;
use crate::Vector;

#[inline]
pub fn min_max<S: Scalar>(a: S, b: S) -> (S, S) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Returns the vector normalized, or a zero vector if its length is zero
/// (or not finite).
#[inline]
pub fn normalized_or_zero<S: Scalar>(v: Vector<S>) -> Vector<S> {
    let len = v.length();
    if len > S::ZERO && len.is_finite() {
        v / len
    } else {
        Vector::new(S::ZERO, S::ZERO)
    }
}

#[test]
fn normalize_zero_vector() {
    use crate::vector;

    assert_eq!(normalized_or_zero(vector(0.0f32, 0.0)), vector(0.0, 0.0));
    assert_eq!(normalized_or_zero(vector(0.0f32, -4.0)), vector(0.0, -1.0));
    assert_eq!(normalized_or_zero(vector(f32::INFINITY, 1.0)), vector(0.0, 0.0));
}

#[test]
fn min_max_order() {
    assert_eq!(min_max(3.0f32, -1.0), (-1.0, 3.0));
    assert_eq!(min_max(-1.0f32, 3.0), (-1.0, 3.0));
}

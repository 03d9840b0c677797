use crate::flatten::Flattened;
use crate::scalar::Scalar;
use crate::{point, Box2D, LineSegment, Point, Vector};

use core::ops::Range;

#[cfg(test)]
use std::vec::Vec;

/// A 2d curve segment defined by four points: the beginning of the segment, two control
/// points and the end of the segment.
///
/// The curve is defined by equation:
/// ```∀ t ∈ [0..1],  P(t) = (1 - t)³ * from + 3 * (1 - t)² * t * ctrl1 + 3 * t² * (1 - t) * ctrl2 + t³ * to```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct CubicBezierSegment<S> {
    pub from: Point<S>,
    pub ctrl1: Point<S>,
    pub ctrl2: Point<S>,
    pub to: Point<S>,
}

impl<S: Scalar> CubicBezierSegment<S> {
    /// Sample the curve at t (expecting t between 0 and 1).
    pub fn sample(&self, t: S) -> Point<S> {
        let t2 = t * t;
        let t3 = t2 * t;
        let one_t = S::ONE - t;
        let one_t2 = one_t * one_t;
        let one_t3 = one_t2 * one_t;

        self.from * one_t3
            + self.ctrl1.to_vector() * S::THREE * one_t2 * t
            + self.ctrl2.to_vector() * S::THREE * one_t * t2
            + self.to.to_vector() * t3
    }

    /// Sample the curve's derivative at t (expecting t between 0 and 1).
    pub fn derivative(&self, t: S) -> Vector<S> {
        let one_t = S::ONE - t;
        let d0 = self.ctrl1 - self.from;
        let d1 = self.ctrl2 - self.ctrl1;
        let d2 = self.to - self.ctrl2;

        (d0 * (one_t * one_t) + d1 * (S::TWO * one_t * t) + d2 * (t * t)) * S::THREE
    }

    #[inline]
    pub fn from(&self) -> Point<S> {
        self.from
    }

    #[inline]
    pub fn to(&self) -> Point<S> {
        self.to
    }

    /// Return the sub-curve inside a given range of t.
    ///
    /// This is equivalent to splitting at the range's end points.
    pub fn split_range(&self, t_range: Range<S>) -> Self {
        let (t0, t1) = (t_range.start, t_range.end);
        let from = self.sample(t0);
        let to = self.sample(t1);
        let dt = (t1 - t0) / S::THREE;

        CubicBezierSegment {
            from,
            ctrl1: from + self.derivative(t0) * dt,
            ctrl2: to - self.derivative(t1) * dt,
            to,
        }
    }

    /// Split this curve into two sub-curves.
    ///
    /// The end of the first half and the start of the second half are the same point.
    pub fn split(&self, t: S) -> (CubicBezierSegment<S>, CubicBezierSegment<S>) {
        let ctrl1a = self.from + (self.ctrl1 - self.from) * t;
        let ctrl2a = self.ctrl1 + (self.ctrl2 - self.ctrl1) * t;
        let ctrl1aa = ctrl1a + (ctrl2a - ctrl1a) * t;
        let ctrl3a = self.ctrl2 + (self.to - self.ctrl2) * t;
        let ctrl2aa = ctrl2a + (ctrl3a - ctrl2a) * t;
        let ctrl1aaa = ctrl1aa + (ctrl2aa - ctrl1aa) * t;

        (
            CubicBezierSegment {
                from: self.from,
                ctrl1: ctrl1a,
                ctrl2: ctrl1aa,
                to: ctrl1aaa,
            },
            CubicBezierSegment {
                from: ctrl1aaa,
                ctrl1: ctrl2aa,
                ctrl2: ctrl3a,
                to: self.to,
            },
        )
    }

    #[inline]
    pub fn baseline(&self) -> LineSegment<S> {
        LineSegment {
            from: self.from,
            to: self.to,
        }
    }

    /// Returns true if all four points of the curve are the same.
    pub fn is_a_point(&self) -> bool {
        self.from == self.ctrl1 && self.ctrl1 == self.ctrl2 && self.ctrl2 == self.to
    }

    /// Upper bound of the distance between the curve and its baseline.
    ///
    /// Each point of the curve is a convex combination of its four control points in which
    /// the two inner points weigh `3t(1-t) <= 3/4` in total, and the end points lie on the
    /// baseline, so the curve is never further than `3/4` of the largest distance between an
    /// inner control point and the baseline segment. Distances are measured to the segment
    /// rather than the infinite line, so curves that overshoot their end points are not
    /// mistaken for flat ones.
    pub fn flatness(&self) -> S {
        let baseline = self.baseline();
        let d1 = baseline.distance_to_point(self.ctrl1);
        let d2 = baseline.distance_to_point(self.ctrl2);

        S::max(d1, d2) * S::value(0.75)
    }

    /// Returns true if the curve can be approximated with a single line segment, given
    /// a tolerance threshold.
    pub fn is_linear(&self, tolerance: S) -> bool {
        self.flatness() <= tolerance
    }

    /// Returns an iterator over the line segments approximating this curve.
    ///
    /// The `tolerance` parameter defines the maximum distance between the curve and
    /// its approximation.
    pub fn flattened(&self, tolerance: S) -> Flattened<S> {
        Flattened::new(self, tolerance)
    }

    /// Approximates the curve with sequence of line segments.
    ///
    /// The `tolerance` parameter defines the maximum distance between the curve and
    /// its approximation.
    pub fn for_each_flattened<F: FnMut(&LineSegment<S>)>(&self, tolerance: S, callback: &mut F) {
        for segment in self.flattened(tolerance) {
            callback(&segment);
        }
    }

    /// Approximates the curve with sequence of line segments.
    ///
    /// The `tolerance` parameter defines the maximum distance between the curve and
    /// its approximation.
    ///
    /// The end of the t parameter range at the final segment is guaranteed to be equal to `1.0`.
    pub fn for_each_flattened_with_t<F: FnMut(&LineSegment<S>, Range<S>)>(
        &self,
        tolerance: S,
        callback: &mut F,
    ) {
        let mut flattened = self.flattened(tolerance);
        while let Some((segment, t)) = flattened.next_with_t() {
            callback(&segment, t);
        }
    }

    /// Compute the length of the segment using a flattened approximation.
    pub fn approximate_length(&self, tolerance: S) -> S {
        let mut length = S::ZERO;
        self.for_each_flattened(tolerance, &mut |segment| {
            length += segment.length();
        });

        length
    }

    /// Returns a conservative rectangle the curve is contained in.
    pub fn fast_bounding_box(&self) -> Box2D<S> {
        let (min_x, max_x) = self.fast_bounding_range_x();
        let (min_y, max_y) = self.fast_bounding_range_y();

        Box2D {
            min: point(min_x, min_y),
            max: point(max_x, max_y),
        }
    }

    /// Returns a conservative range of x that contains this curve.
    #[inline]
    pub fn fast_bounding_range_x(&self) -> (S, S) {
        let min_x = self
            .from
            .x
            .min(self.ctrl1.x)
            .min(self.ctrl2.x)
            .min(self.to.x);
        let max_x = self
            .from
            .x
            .max(self.ctrl1.x)
            .max(self.ctrl2.x)
            .max(self.to.x);

        (min_x, max_x)
    }

    /// Returns a conservative range of y that contains this curve.
    #[inline]
    pub fn fast_bounding_range_y(&self) -> (S, S) {
        let min_y = self
            .from
            .y
            .min(self.ctrl1.y)
            .min(self.ctrl2.y)
            .min(self.to.y);
        let max_y = self
            .from
            .y
            .max(self.ctrl1.y)
            .max(self.ctrl2.y)
            .max(self.to.y);

        (min_y, max_y)
    }
}

#[test]
fn sample_end_points() {
    let c = CubicBezierSegment {
        from: point(1.0f32, 2.0),
        ctrl1: point(5.0, -3.0),
        ctrl2: point(-7.0, 11.0),
        to: point(3.0, 4.0),
    };

    assert_eq!(c.sample(0.0), c.from);
    assert_eq!(c.sample(1.0), c.to);
}

#[test]
fn split_halves_share_end_points() {
    let c = CubicBezierSegment {
        from: point(0.0f64, 0.0),
        ctrl1: point(0.0, 100.0),
        ctrl2: point(100.0, 100.0),
        to: point(100.0, 0.0),
    };

    let (a, b) = c.split(0.3);
    assert_eq!(a.from, c.from);
    assert_eq!(b.to, c.to);
    assert_eq!(a.to, b.from);
    assert!((a.to - c.sample(0.3)).length() < 1e-9);

    for i in 0..=10 {
        let t = i as f64 / 10.0;
        assert!((a.sample(t) - c.sample(t * 0.3)).length() < 1e-9);
        assert!((b.sample(t) - c.sample(0.3 + t * 0.7)).length() < 1e-9);
    }
}

#[test]
fn split_range_matches_sample() {
    let c = CubicBezierSegment {
        from: point(0.0f64, 0.0),
        ctrl1: point(10.0, 50.0),
        ctrl2: point(80.0, -20.0),
        to: point(100.0, 30.0),
    };

    let sub = c.split_range(0.25..0.5);
    for i in 0..=8 {
        let t = i as f64 / 8.0;
        assert!((sub.sample(t) - c.sample(0.25 + t * 0.25)).length() < 1e-9);
    }
}

#[test]
fn flatness_of_a_straight_curve() {
    let c = CubicBezierSegment {
        from: point(0.0f32, 0.0),
        ctrl1: point(1.0, 0.0),
        ctrl2: point(2.0, 0.0),
        to: point(3.0, 0.0),
    };
    assert_eq!(c.flatness(), 0.0);
    assert!(c.is_linear(0.01));

    let mut count = 0;
    c.for_each_flattened(0.01, &mut |_| count += 1);
    assert_eq!(count, 1);
}

#[test]
fn flatness_detects_overshoot() {
    // All control points are on the baseline's line but the curve goes past its end points.
    let c = CubicBezierSegment {
        from: point(0.0f32, 0.0),
        ctrl1: point(10.0, 0.0),
        ctrl2: point(-10.0, 0.0),
        to: point(1.0, 0.0),
    };

    assert!(!c.is_linear(0.5));
    assert!(c.approximate_length(0.01) > 3.0);
}

#[test]
fn flattened_approximation_stays_within_tolerance() {
    let c = CubicBezierSegment {
        from: point(0.0f32, 0.0),
        ctrl1: point(0.0, 100.0),
        ctrl2: point(100.0, 100.0),
        to: point(100.0, 0.0),
    };

    for &tolerance in &[1.0f32, 0.5, 0.1, 0.01] {
        let mut segments = Vec::new();
        c.for_each_flattened_with_t(tolerance, &mut |segment, t| {
            segments.push((*segment, t));
        });

        assert_eq!(segments[0].0.from, c.from);
        assert_eq!(segments.last().unwrap().0.to, c.to);
        assert_eq!(segments.last().unwrap().1.end, 1.0);

        let mut prev: Option<(LineSegment<f32>, Range<f32>)> = None;
        for (segment, t) in &segments {
            if let Some((prev_segment, prev_t)) = &prev {
                assert_eq!(prev_segment.to, segment.from);
                assert_eq!(prev_t.end, t.start);
            }

            for i in 0..=4 {
                let st = t.start + (t.end - t.start) * (i as f32 / 4.0);
                let d = segment.distance_to_point(c.sample(st));
                assert!(d <= tolerance * 1.01 + 1e-3, "{} > {}", d, tolerance);
            }

            prev = Some((*segment, t.clone()));
        }
    }
}

#[test]
fn approximate_length_of_a_quarter_circle() {
    // Cubic approximation of a quarter circle of radius 100.
    let k = 55.191505f32;
    let c = CubicBezierSegment {
        from: point(100.0f32, 0.0),
        ctrl1: point(100.0, k),
        ctrl2: point(k, 100.0),
        to: point(0.0, 100.0),
    };

    let expected = core::f32::consts::PI * 50.0;
    let len = c.approximate_length(0.01);
    assert!((len - expected).abs() < 0.1, "{} vs {}", len, expected);
}

#[test]
fn degenerate_curve_flattens_to_a_point() {
    let p = point(5.0f32, 5.0);
    let c = CubicBezierSegment {
        from: p,
        ctrl1: p,
        ctrl2: p,
        to: p,
    };

    assert!(c.is_a_point());
    let segments: Vec<LineSegment<f32>> = c.flattened(0.1).collect();
    assert_eq!(segments.len(), 1);
    assert!(segments[0].is_a_point());
}

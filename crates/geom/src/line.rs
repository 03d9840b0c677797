use crate::scalar::Scalar;
use crate::utils::min_max;
use crate::{point, Box2D, Point, Vector};

use core::ops::Range;

/// A linear segment.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct LineSegment<S> {
    pub from: Point<S>,
    pub to: Point<S>,
}

impl<S: Scalar> LineSegment<S> {
    /// Sample the segment at t (expecting t between 0 and 1).
    #[inline]
    pub fn sample(&self, t: S) -> Point<S> {
        self.from.lerp(self.to, t)
    }

    #[inline]
    pub fn from(&self) -> Point<S> {
        self.from
    }

    #[inline]
    pub fn to(&self) -> Point<S> {
        self.to
    }


    /// Return the sub-segment inside a given range of t.
    ///
    /// This is equivalent splitting at the range's end points.
    pub fn split_range(&self, t_range: Range<S>) -> Self {
        LineSegment {
            from: self.from.lerp(self.to, t_range.start),
            to: self.from.lerp(self.to, t_range.end),
        }
    }

    /// Split this segment into two sub-segments.
    #[inline]
    pub fn split(&self, t: S) -> (Self, Self) {
        let split_point = self.sample(t);

        (
            LineSegment {
                from: self.from,
                to: split_point,
            },
            LineSegment {
                from: split_point,
                to: self.to,
            },
        )
    }

    /// Return the smallest rectangle containing this segment.
    #[inline]
    pub fn bounding_box(&self) -> Box2D<S> {
        let (min_x, max_x) = min_max(self.from.x, self.to.x);
        let (min_y, max_y) = min_max(self.from.y, self.to.y);

        Box2D {
            min: point(min_x, min_y),
            max: point(max_x, max_y),
        }
    }

    /// Returns the vector between this segment's `from` and `to` points.
    #[inline]
    pub fn to_vector(&self) -> Vector<S> {
        self.to - self.from
    }

    /// Computes the length of this segment.
    #[inline]
    pub fn length(&self) -> S {
        self.to_vector().length()
    }

    /// Computes the squared length of this segment.
    #[inline]
    pub fn square_length(&self) -> S {
        self.to_vector().square_length()
    }

    /// Returns true if both end points are the same.
    #[inline]
    pub fn is_a_point(&self) -> bool {
        self.from == self.to
    }

    /// Computes the parameter of the point on this segment that is closest to `p`.
    ///
    /// The result is clamped to `0..=1`. Zero-length segments always return zero.
    #[inline]
    pub fn closest_point_t(&self, p: Point<S>) -> S {
        let v1 = self.to - self.from;
        let len2 = v1.dot(v1);
        if !(len2 > S::ZERO) {
            return S::ZERO;
        }

        let v2 = p - self.from;
        S::min(S::max(v2.dot(v1) / len2, S::ZERO), S::ONE)
    }

    /// Computes the closest point on this segment to `p`.
    #[inline]
    pub fn closest_point(&self, p: Point<S>) -> Point<S> {
        self.sample(self.closest_point_t(p))
    }

    /// Computes the distance between this segment and a point.
    #[inline]
    pub fn distance_to_point(&self, p: Point<S>) -> S {
        self.square_distance_to_point(p).sqrt()
    }

    /// Computes the squared distance between this segment and a point.
    ///
    /// Can be useful to save a square root when comparing against
    /// a distance that can be squared.
    #[inline]
    pub fn square_distance_to_point(&self, p: Point<S>) -> S {
        (self.closest_point(p) - p).square_length()
    }
}

#[test]
fn distance_to_point() {
    let l1 = LineSegment {
        from: point(2.0f32, 3.0),
        to: point(8.0, 3.0),
    };

    assert_eq!(l1.distance_to_point(point(5.0, 7.0)), 4.0);
    assert_eq!(l1.distance_to_point(point(-1.0, 7.0)), 5.0);
    assert_eq!(l1.distance_to_point(point(11.0, -1.0)), 5.0);
    assert_eq!(l1.distance_to_point(point(5.0, 3.0)), 0.0);
}

#[test]
fn closest_point_t() {
    let l = LineSegment {
        from: point(0.0f32, 0.0),
        to: point(10.0, 0.0),
    };

    assert_eq!(l.closest_point_t(point(5.0, 3.0)), 0.5);
    assert_eq!(l.closest_point_t(point(-5.0, 3.0)), 0.0);
    assert_eq!(l.closest_point_t(point(25.0, -3.0)), 1.0);
    assert_eq!(l.closest_point(point(2.5, 100.0)), point(2.5, 0.0));
}

#[test]
fn degenerate_segment() {
    let l = LineSegment {
        from: point(1.0f32, 1.0),
        to: point(1.0, 1.0),
    };

    assert!(l.is_a_point());
    assert_eq!(l.length(), 0.0);
    assert_eq!(l.closest_point_t(point(5.0, 4.0)), 0.0);
    assert_eq!(l.closest_point(point(5.0, 4.0)), point(1.0, 1.0));
    assert_eq!(l.distance_to_point(point(4.0, 5.0)), 5.0);
}

#[test]
fn split_range() {
    let l = LineSegment {
        from: point(0.0f32, 0.0),
        to: point(4.0, 8.0),
    };

    let r = l.split_range(0.25..0.75);
    assert_eq!(r.from, point(1.0, 2.0));
    assert_eq!(r.to, point(3.0, 6.0));

    let (a, b) = l.split(0.5);
    assert_eq!(a.to, b.from);
    assert_eq!(a.from, l.from);
    assert_eq!(b.to, l.to);
}

#[test]
fn bounding_box() {
    let l = LineSegment {
        from: point(3.0f32, -1.0),
        to: point(-2.0, 4.0),
    };

    let b = l.bounding_box();
    assert_eq!(b.min, point(-2.0, -1.0));
    assert_eq!(b.max, point(3.0, 4.0));
}

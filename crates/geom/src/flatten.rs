//! Approximation of cubic bézier curves with sequences of line segments.
//!
//! The curve is recursively split in halves (de Casteljau subdivision at `t = 0.5`) until
//! each piece is within the tolerance of its baseline, at which point the baseline is
//! emitted. Subdivision is driven by a fixed size stack instead of recursion: at most
//! [`MAX_FLATTENING_DEPTH`] levels of splitting happen, after which the baseline of the
//! current piece is emitted even if it is not flat enough. This bounds the amount of work
//! done for any input, including curves with huge or non-finite coordinates.

use crate::scalar::Scalar;
use crate::{CubicBezierSegment, LineSegment};
use arrayvec::ArrayVec;

use core::ops::Range;

/// Maximum number of times a curve can be split in halves while flattening.
///
/// A single curve produces at most `2^MAX_FLATTENING_DEPTH` line segments.
pub const MAX_FLATTENING_DEPTH: u32 = 16;

const STACK_CAPACITY: usize = MAX_FLATTENING_DEPTH as usize + 1;

#[derive(Clone, Debug)]
struct Pending<S> {
    curve: CubicBezierSegment<S>,
    t: Range<S>,
    depth: u32,
}

/// An iterator over the line segments approximating a cubic bézier curve.
///
/// Consecutive segments share their end points exactly, the first segment starts at the
/// curve's `from` point and the last one ends at its `to` point.
#[derive(Clone, Debug)]
pub struct Flattened<S> {
    stack: ArrayVec<Pending<S>, STACK_CAPACITY>,
    tolerance: S,
    reached_depth_limit: bool,
}

impl<S: Scalar> Flattened<S> {
    pub(crate) fn new(curve: &CubicBezierSegment<S>, tolerance: S) -> Self {
        let mut stack = ArrayVec::new();
        stack.push(Pending {
            curve: *curve,
            t: S::ZERO..S::ONE,
            depth: 0,
        });

        Flattened {
            stack,
            tolerance,
            reached_depth_limit: false,
        }
    }

    /// Returns the next segment along with the range of the curve parameter it covers.
    ///
    /// The end of the range of the final segment is exactly `1.0`.
    pub fn next_with_t(&mut self) -> Option<(LineSegment<S>, Range<S>)> {
        while let Some(pending) = self.stack.pop() {
            if pending.curve.is_linear(self.tolerance) {
                return Some((pending.curve.baseline(), pending.t));
            }

            if pending.depth >= MAX_FLATTENING_DEPTH {
                if !self.reached_depth_limit {
                    log::trace!(
                        "Curve {:?} not flat enough after {} subdivisions (tolerance {:?})",
                        pending.curve,
                        MAX_FLATTENING_DEPTH,
                        self.tolerance,
                    );
                    self.reached_depth_limit = true;
                }
                return Some((pending.curve.baseline(), pending.t));
            }

            // Each split replaces the top of the stack with two entries one level deeper, so
            // the stack never holds more than one entry per level plus one.
            let (before, after) = pending.curve.split(S::HALF);
            let mid = (pending.t.start + pending.t.end) * S::HALF;
            let depth = pending.depth + 1;
            self.stack.push(Pending {
                curve: after,
                t: mid..pending.t.end,
                depth,
            });
            self.stack.push(Pending {
                curve: before,
                t: pending.t.start..mid,
                depth,
            });
        }

        None
    }

    /// Returns true if some part of the curve could not be flattened within the tolerance
    /// before the subdivision depth limit was reached.
    pub fn reached_depth_limit(&self) -> bool {
        self.reached_depth_limit
    }
}

impl<S: Scalar> Iterator for Flattened<S> {
    type Item = LineSegment<S>;

    fn next(&mut self) -> Option<LineSegment<S>> {
        self.next_with_t().map(|(segment, _)| segment)
    }
}

#[cfg(test)]
use crate::point;

#[test]
fn flatten_huge_curve_is_bounded() {
    let curve = CubicBezierSegment {
        from: point(0.0f32, 0.0),
        ctrl1: point(1e30, 0.0),
        ctrl2: point(0.0, 1e30),
        to: point(1e30, 1e30),
    };

    let mut flattened = curve.flattened(0.5);
    let mut count = 0;
    let mut last = None;
    while let Some((segment, t)) = flattened.next_with_t() {
        count += 1;
        last = Some((segment, t));
    }

    assert_eq!(count, 1 << MAX_FLATTENING_DEPTH);
    assert!(flattened.reached_depth_limit());
    let (segment, t) = last.unwrap();
    assert_eq!(segment.to, curve.to);
    assert_eq!(t.end, 1.0);
}

#[test]
fn flatten_line_like_curve() {
    let curve = CubicBezierSegment {
        from: point(0.0f32, 0.0),
        ctrl1: point(3.0, 3.0),
        ctrl2: point(6.0, 6.0),
        to: point(9.0, 9.0),
    };

    let mut flattened = curve.flattened(0.1);
    assert_eq!(
        flattened.next_with_t(),
        Some((curve.baseline(), 0.0..1.0))
    );
    assert_eq!(flattened.next_with_t(), None);
    assert!(!flattened.reached_depth_limit());
}

#[test]
fn flatten_closed_loop() {
    // Starts and ends at the same point.
    let curve = CubicBezierSegment {
        from: point(0.0f32, 0.0),
        ctrl1: point(100.0, 100.0),
        ctrl2: point(-100.0, 100.0),
        to: point(0.0, 0.0),
    };

    let mut count = 0;
    let mut length = 0.0;
    curve.for_each_flattened(0.1, &mut |segment| {
        count += 1;
        length += segment.length();
    });

    assert!(count > 4);
    assert!(length > 150.0);
}

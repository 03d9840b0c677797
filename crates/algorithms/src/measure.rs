//! Perform cached measurements, sampling, closest point queries and split operations on a
//! path.
//!
use crate::geom::utils::normalized_or_zero;
use crate::geom::LineSegment;
use crate::math::*;
use crate::path::{builder::PathBuilder, Contour, Path};
use core::ops::Range;

use alloc::vec::Vec;
#[cfg(test)]
use alloc::string::ToString;

/// The tolerance used when none is specified.
pub const DEFAULT_TOLERANCE: f32 = 0.5;

/// Tolerances are clamped to this value to keep flattening bounded.
pub const MIN_TOLERANCE: f32 = 1e-4;

// Relative to the magnitude of the coordinates. Candidates of closest point queries that are
// not closer than the current best by at least this much are ties.
const TIE_EPSILON: f32 = 16.0 * f32::EPSILON;

/// Parameters for path measurements.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[non_exhaustive]
pub struct MeasureOptions {
    /// Maximum allowed distance between the path and its flattened approximation.
    ///
    /// Default value: `DEFAULT_TOLERANCE`.
    pub tolerance: f32,
}

impl MeasureOptions {
    pub const DEFAULT: Self = MeasureOptions {
        tolerance: DEFAULT_TOLERANCE,
    };

    #[inline]
    pub fn tolerance(tolerance: f32) -> Self {
        Self::DEFAULT.with_tolerance(tolerance)
    }

    #[inline]
    pub const fn with_tolerance(mut self, tolerance: f32) -> Self {
        self.tolerance = tolerance;
        self
    }
}

impl Default for MeasureOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// The result of sampling a path.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct PathSample {
    position: Point,
    tangent: Vector,
}

impl PathSample {
    #[inline]
    pub fn position(&self) -> Point {
        self.position
    }

    /// The unit direction of the path at the sampled position.
    ///
    /// Zero if the path has no length.
    #[inline]
    pub fn tangent(&self) -> Vector {
        self.tangent
    }
}

/// The result of a closest point query.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct ClosestPoint {
    position: Point,
    distance: f32,
    offset: f32,
    tangent: Vector,
}

impl ClosestPoint {
    /// The position on the path.
    #[inline]
    pub fn position(&self) -> Point {
        self.position
    }

    /// Distance between the query point and `position`.
    #[inline]
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Distance along the path from its start to `position`.
    #[inline]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    #[inline]
    pub fn tangent(&self) -> Vector {
        self.tangent
    }
}

/// A flattened contour, as stored in the measurements.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Polyline<'l> {
    /// The vertices of the polyline. The first one is the start of the contour.
    pub points: &'l [Point],
    /// Whether the contour is closed. If so the last vertex is usually the first one.
    pub closed: bool,
}

#[derive(Clone, Debug)]
struct ContourMeasure {
    // Vertices of the contour in `PathMeasure::points`.
    range: Range<usize>,
    // Distance from the beginning of the path to the start of the contour.
    offset: f32,
    length: f32,
    closed: bool,
}

/// An acceleration structure for measuring a specific path.
///
/// Each contour is flattened into a polyline once, with a cumulative distance stored next to
/// every vertex. Queries then work on the polylines: sampling binary searches the cumulative
/// distances, closest point queries scan the edges and segment extraction copies the vertices
/// in a distance range.
///
/// Distances ("offsets") are measured from the start of the path, contours being laid out one
/// after the other in path order. Closing segments count towards the length of closed contours.
///
/// Building the measurements is about as expensive as flattening the whole path, so it is
/// usually a good idea to cache and reuse them whenever possible.
///
/// ## Example
///
/// ```
/// use meander_algorithms::{
///     math::point,
///     path::Path,
///     length::approximate_length,
///     measure::PathMeasure,
/// };
///
/// let mut path = Path::builder();
/// path.move_to(point(0.0, 0.0));
/// path.cubic_bezier_to(point(0.0, 1.0), point(2.0, 1.0), point(2.0, 0.0));
/// let path = path.build();
///
/// // Build the acceleration structure.
/// let measure = PathMeasure::with_tolerance(&path, 1e-3);
///
/// let sample = measure.sample(measure.length() * 0.5).unwrap();
/// println!("Mid-point position: {:?}, tangent: {:?}", sample.position(), sample.tangent());
///
/// let mut second_half = Path::builder();
/// measure.add_segment(measure.length() * 0.5..measure.length(), &mut second_half);
/// let second_half = second_half.build();
/// assert!((measure.length() / 2.0 - approximate_length(&second_half, 1e-3)).abs() < 1e-3);
/// ```
///
pub struct PathMeasure<'l> {
    path: &'l Path,
    tolerance: f32,
    points: Vec<Point>,
    // Distance from the start of the contour, for each point.
    distances: Vec<f32>,
    contours: Vec<ContourMeasure>,
    length: f32,
}

impl<'l> PathMeasure<'l> {
    /// Measures a path using the default tolerance.
    pub fn new(path: &'l Path) -> Self {
        Self::with_options(path, &MeasureOptions::DEFAULT)
    }

    /// Measures a path with a given tolerance.
    ///
    /// The tolerance is clamped to `MIN_TOLERANCE`.
    pub fn with_tolerance(path: &'l Path, tolerance: f32) -> Self {
        Self::with_options(path, &MeasureOptions::tolerance(tolerance))
    }

    pub fn with_options(path: &'l Path, options: &MeasureOptions) -> Self {
        // Also replaces NaN with the minimum.
        let tolerance = options.tolerance.max(MIN_TOLERANCE);

        let mut measure = PathMeasure {
            path,
            tolerance,
            points: Vec::new(),
            distances: Vec::new(),
            contours: Vec::with_capacity(path.num_contours()),
            length: 0.0,
        };

        for contour in path.contours() {
            measure.add_contour(&contour);
        }

        log::debug!(
            "measured {} contour(s) flattened into {} point(s), length: {}, tolerance: {}",
            measure.contours.len(),
            measure.points.len(),
            measure.length,
            tolerance,
        );

        measure
    }

    fn add_contour(&mut self, contour: &Contour) {
        let start = self.points.len();
        let first = contour.first();
        self.points.push(first);
        self.distances.push(0.0);

        let tolerance = self.tolerance;
        let points = &mut self.points;
        let distances = &mut self.distances;
        let mut length = 0.0f32;
        let mut last = first;
        for segment in contour.segments() {
            segment.for_each_flattened(tolerance, &mut |line| {
                let distance = length + (line.to - last).length();
                // Only keep points that move the cumulative distance forward so that distances
                // are strictly increasing within a contour. This also drops NaNs.
                if !(distance > length) {
                    return;
                }
                length = distance;
                last = line.to;
                points.push(line.to);
                distances.push(distance);
            });
        }

        self.contours.push(ContourMeasure {
            range: start..self.points.len(),
            offset: self.length,
            length,
            closed: contour.is_closed(),
        });
        self.length += length;
    }

    /// The total length of the path.
    ///
    /// The closing segments of closed contours count: `M 0 0 L 10 0 Z` is 20 units long.
    #[inline]
    pub fn length(&self) -> f32 {
        self.length
    }

    /// The tolerance the measurements were built with, after clamping.
    #[inline]
    pub fn tolerance(&self) -> f32 {
        self.tolerance
    }

    /// The measured path.
    #[inline]
    pub fn path(&self) -> &'l Path {
        self.path
    }

    #[inline]
    pub fn num_contours(&self) -> usize {
        self.contours.len()
    }

    /// Iterates over the flattened contours.
    pub fn polylines(&self) -> impl Iterator<Item = Polyline<'_>> + '_ {
        self.contours.iter().map(move |contour| Polyline {
            points: &self.points[contour.range.clone()],
            closed: contour.closed,
        })
    }

    /// Samples the path at a given distance from its start.
    ///
    /// The offset is clamped between zero and the length of the path. Returns `None` if the path
    /// is empty. If the path has no length, the sample is the start of its first contour with a
    /// zero tangent.
    pub fn sample(&self, offset: f32) -> Option<PathSample> {
        let first = self.contours.first()?;
        if !(self.length > 0.0) {
            return Some(PathSample {
                position: self.points[first.range.start],
                tangent: vector(0.0, 0.0),
            });
        }

        let offset = offset.max(0.0).min(self.length);

        // The first contour ending at or after the offset, skipping the ones with no length
        // since they can't be interpolated.
        let mut idx = self
            .contours
            .partition_point(|contour| contour.offset + contour.length < offset);
        while idx < self.contours.len() && !(self.contours[idx].length > 0.0) {
            idx += 1;
        }

        let contour = match self.contours.get(idx) {
            Some(contour) => contour,
            None => self.contours.iter().rev().find(|c| c.length > 0.0)?,
        };

        Some(self.sample_contour(contour, offset - contour.offset))
    }

    // Expects a contour with a positive length.
    fn sample_contour(&self, contour: &ContourMeasure, distance: f32) -> PathSample {
        let points = &self.points[contour.range.clone()];
        let distances = &self.distances[contour.range.clone()];
        debug_assert!(points.len() >= 2);

        let distance = distance.max(0.0).min(contour.length);

        // Index of the first vertex at or after the distance (never the first vertex).
        let idx = distances[1..].partition_point(|d| *d < distance) + 1;
        let idx = idx.min(points.len() - 1);

        let (p0, p1) = (points[idx - 1], points[idx]);
        let (d0, d1) = (distances[idx - 1], distances[idx]);
        let t = ((distance - d0) / (d1 - d0)).max(0.0).min(1.0);

        PathSample {
            position: p0.lerp(p1, t),
            tangent: normalized_or_zero(p1 - p0),
        }
    }

    /// Finds the point of the path closest to `query`, no further than `max_distance`.
    ///
    /// Every edge of the flattened path is scanned in contour and segment order. When several
    /// points are at the same minimal distance (overlapping contours for example), the first
    /// one wins. Distances that only differ by rounding errors of the coordinates count as
    /// equal.
    ///
    /// Returns `None` if the path is empty or if no point of the path is within `max_distance`.
    pub fn closest_point(&self, query: Point, max_distance: f32) -> Option<ClosestPoint> {
        let magnitude = 1.0 + query.x.abs().max(query.y.abs());
        let mut result: Option<ClosestPoint> = None;

        let mut consider = |candidate: ClosestPoint| {
            let better = match &result {
                None => candidate.distance <= max_distance,
                Some(best) => {
                    candidate.distance
                        < best.distance - TIE_EPSILON * (magnitude + best.distance)
                }
            };
            if better {
                result = Some(candidate);
            }
        };

        for contour in &self.contours {
            let points = &self.points[contour.range.clone()];
            let distances = &self.distances[contour.range.clone()];

            if points.len() == 1 {
                consider(ClosestPoint {
                    position: points[0],
                    distance: (points[0] - query).length(),
                    offset: contour.offset,
                    tangent: vector(1.0, 0.0),
                });
                continue;
            }

            for i in 1..points.len() {
                let edge = LineSegment {
                    from: points[i - 1],
                    to: points[i],
                };
                let t = edge.closest_point_t(query);
                let position = edge.sample(t);
                let (d0, d1) = (distances[i - 1], distances[i]);
                consider(ClosestPoint {
                    position,
                    distance: (position - query).length(),
                    offset: contour.offset + d0 + (d1 - d0) * t,
                    tangent: normalized_or_zero(edge.to_vector()),
                });
            }
        }

        result
    }

    /// Appends the portion of the path between two offsets to a path builder.
    ///
    /// The range is clamped to the path. Nothing is emitted if it is empty. Every contour
    /// intersecting the range contributes one polyline contour to the output. A closed contour
    /// that is entirely covered by the range is emitted closed, the other pieces are open.
    /// Contours with no length are skipped.
    pub fn add_segment(&self, range: Range<f32>, output: &mut dyn PathBuilder) {
        let start = range.start.max(0.0);
        let end = range.end.min(self.length);
        if !(start < end) {
            return;
        }

        for contour in &self.contours {
            if !(contour.length > 0.0) {
                continue;
            }
            if contour.offset + contour.length <= start {
                continue;
            }
            if contour.offset >= end {
                break;
            }

            let local_start = (start - contour.offset).max(0.0);
            let local_end = (end - contour.offset).min(contour.length);
            if local_start < local_end {
                self.add_contour_segment(contour, local_start..local_end, output);
            }
        }
    }

    fn add_contour_segment(
        &self,
        contour: &ContourMeasure,
        range: Range<f32>,
        output: &mut dyn PathBuilder,
    ) {
        let points = &self.points[contour.range.clone()];
        let distances = &self.distances[contour.range.clone()];
        let n = points.len();

        if contour.closed && range.start <= 0.0 && range.end >= contour.length {
            // The closing edge is implied by `end(true)`.
            let inner = if points[n - 1] == points[0] {
                &points[1..n - 1]
            } else {
                &points[1..]
            };
            output.reserve(inner.len() + 1);
            output.begin(points[0]);
            for p in inner {
                output.line_to(*p);
            }
            output.end(true);
            return;
        }

        let from = self.sample_contour(contour, range.start).position;
        let to = self.sample_contour(contour, range.end).position;

        // Vertices strictly inside the range.
        let first = distances.partition_point(|d| *d <= range.start);
        let last = distances.partition_point(|d| *d < range.end).max(first);

        output.reserve(last - first + 2);
        output.begin(from);
        for p in &points[first..last] {
            output.line_to(*p);
        }
        output.line_to(to);
        output.end(false);
    }
}

#[cfg(test)]
fn approx_eq(a: Point, b: Point) -> bool {
    (a - b).length() < 1e-4
}

#[test]
fn measure_line() {
    let mut path = Path::builder();
    path.move_to(point(1.0, 1.0));
    path.line_to(point(0.0, 0.0));
    let path = path.build();

    let measure = PathMeasure::with_tolerance(&path, 0.01);
    let length = measure.length();
    assert!((length - 2.0f32.sqrt()).abs() < 1e-5);

    for t in [0.0, 0.2, 0.3, 0.5, 1.0] {
        let result = measure.sample(t * length).unwrap();
        assert!((result.position - point(1.0 - t, 1.0 - t)).length() < 1e-5);
        assert_eq!(result.tangent, vector(-1.0, -1.0).normalize());
    }
}

#[test]
fn measure_square() {
    let mut path = Path::builder();
    path.move_to(point(0.0, 0.0));
    path.line_to(point(1.0, 0.0));
    path.line_to(point(1.0, 1.0));
    path.line_to(point(0.0, 1.0));
    path.close();
    let path = path.build();

    let measure = PathMeasure::with_tolerance(&path, 0.01);
    assert_eq!(measure.length(), 4.0);
    for (offset, position, tangent) in [
        (0.5, point(0.5, 0.0), vector(1.0, 0.0)),
        (1.5, point(1.0, 0.5), vector(0.0, 1.0)),
        (2.5, point(0.5, 1.0), vector(-1.0, 0.0)),
        (3.5, point(0.0, 0.5), vector(0.0, -1.0)),
    ] {
        let result = measure.sample(offset).unwrap();
        assert!((result.position - position).length() < 1e-5);
        assert_eq!(result.tangent, tangent);
    }
}

#[test]
fn closing_segment_counts() {
    let path = Path::parse("M 0 0 L 10 0 Z").unwrap();
    let measure = PathMeasure::new(&path);

    assert_eq!(measure.length(), 20.0);
    assert_eq!(measure.sample(5.0).unwrap().position(), point(5.0, 0.0));

    let back = measure.sample(15.0).unwrap();
    assert_eq!(back.position(), point(5.0, 0.0));
    assert_eq!(back.tangent(), vector(-1.0, 0.0));
}

#[test]
fn sample_clamps_offsets() {
    let path = Path::parse("M 0 0 L 10 0 L 10 10").unwrap();
    let measure = PathMeasure::new(&path);

    assert_eq!(measure.sample(-5.0).unwrap().position(), point(0.0, 0.0));
    assert_eq!(measure.sample(100.0).unwrap().position(), point(10.0, 10.0));
    assert_eq!(measure.sample(f32::NAN).unwrap().position(), point(0.0, 0.0));
    assert_eq!(measure.sample(10.0).unwrap().position(), point(10.0, 0.0));
}

#[test]
fn empty_path() {
    let path = Path::new();
    let measure = PathMeasure::new(&path);

    assert_eq!(measure.length(), 0.0);
    assert_eq!(measure.num_contours(), 0);
    assert!(measure.sample(0.0).is_none());
    assert!(measure.closest_point(point(0.0, 0.0), f32::INFINITY).is_none());

    let mut output = Path::builder();
    measure.add_segment(0.0..10.0, &mut output);
    assert!(output.build().is_empty());
}

#[test]
fn zero_length_path() {
    let path = Path::parse("M 5 5 L 5 5 M 1 1").unwrap();
    let measure = PathMeasure::new(&path);

    assert_eq!(measure.length(), 0.0);
    assert_eq!(measure.num_contours(), 2);

    let sample = measure.sample(3.0).unwrap();
    assert_eq!(sample.position(), point(5.0, 5.0));
    assert_eq!(sample.tangent(), vector(0.0, 0.0));

    let closest = measure.closest_point(point(1.0, 4.0), f32::INFINITY).unwrap();
    assert_eq!(closest.position(), point(1.0, 1.0));
    assert_eq!(closest.distance(), 3.0);
    assert_eq!(closest.offset(), 0.0);
    assert_eq!(closest.tangent(), vector(1.0, 0.0));
}

#[test]
fn multiple_contours() {
    let path = Path::parse("M 0 0 L 10 0 M 50 50 M 0 10 L 10 10").unwrap();
    let measure = PathMeasure::new(&path);

    assert_eq!(measure.num_contours(), 3);
    assert_eq!(measure.length(), 20.0);

    // The point-only contour in the middle is skipped.
    assert_eq!(measure.sample(10.0).unwrap().position(), point(10.0, 0.0));
    assert_eq!(measure.sample(10.5).unwrap().position(), point(0.5, 10.0));
    assert_eq!(measure.sample(15.0).unwrap().position(), point(5.0, 10.0));
}

#[test]
fn closest_point_on_lines() {
    let path = Path::parse("M 0 0 L 10 0 L 10 10").unwrap();
    let measure = PathMeasure::with_tolerance(&path, 0.01);

    let result = measure.closest_point(point(4.0, 3.0), f32::INFINITY).unwrap();
    assert!(approx_eq(result.position(), point(4.0, 0.0)));
    assert!((result.distance() - 3.0).abs() < 1e-5);
    assert!((result.offset() - 4.0).abs() < 1e-5);
    assert_eq!(result.tangent(), vector(1.0, 0.0));

    let result = measure.closest_point(point(13.0, 6.0), f32::INFINITY).unwrap();
    assert!(approx_eq(result.position(), point(10.0, 6.0)));
    assert!((result.offset() - 16.0).abs() < 1e-5);
    assert_eq!(result.tangent(), vector(0.0, 1.0));

    // Too far.
    assert!(measure.closest_point(point(4.0, 3.0), 2.0).is_none());
    assert!(measure.closest_point(point(4.0, 3.0), -1.0).is_none());
}

#[test]
fn closest_point_on_curve() {
    let mut path = Path::builder();
    path.add_circle(point(0.0, 0.0), 10.0);
    let path = path.build();
    let measure = PathMeasure::with_tolerance(&path, 0.01);

    let result = measure.closest_point(point(0.0, 20.0), f32::INFINITY).unwrap();
    assert!((result.distance() - 10.0).abs() < 0.05);
    assert!((result.position() - point(0.0, 10.0)).length() < 0.5);

    // The offset leads back to the same position.
    let sample = measure.sample(result.offset()).unwrap();
    assert!((sample.position() - result.position()).length() < 1e-3);
}

#[test]
fn closest_point_is_the_global_minimum() {
    // The first contour is within the tolerance of the query but the second one is closer.
    let path = Path::parse("M 0 0.4 L 10 0.4 M 0 0 L 10 0").unwrap();
    let measure = PathMeasure::with_tolerance(&path, 0.5);

    let result = measure.closest_point(point(5.0, 0.0), f32::INFINITY).unwrap();
    assert_eq!(result.position(), point(5.0, 0.0));
    assert_eq!(result.distance(), 0.0);
    assert_eq!(result.offset(), 15.0);

    // Same with a later edge of a single contour.
    let path = Path::parse("M 0 1 L 10 1 L 10 0 L 0 0").unwrap();
    let measure = PathMeasure::with_tolerance(&path, 0.5);
    let result = measure.closest_point(point(5.0, 0.1), f32::INFINITY).unwrap();
    assert!(approx_eq(result.position(), point(5.0, 0.0)));
    assert!((result.offset() - 16.0).abs() < 1e-4);
    assert_eq!(result.tangent(), vector(-1.0, 0.0));
}

#[test]
fn closest_point_ties_pick_the_first_point() {
    let path = Path::parse("M 0 0 L 10 0 M 0 0 L 10 0").unwrap();
    let measure = PathMeasure::new(&path);

    let result = measure.closest_point(point(5.0, 3.0), f32::INFINITY).unwrap();
    assert_eq!(result.position(), point(5.0, 0.0));
    assert_eq!(result.offset(), 5.0);

    // A flat rectangle goes over the same points twice.
    let path = Path::parse("M 0 0 L 10 0 L 10 0 L 0 0 Z").unwrap();
    let measure = PathMeasure::new(&path);
    for offset in [1.25, 2.5, 5.0, 7.5] {
        let sample = measure.sample(offset).unwrap();
        let result = measure.closest_point(sample.position(), 0.5).unwrap();
        assert_eq!(result.offset(), offset);
        assert_eq!(result.tangent(), vector(1.0, 0.0));
    }

    // Within the maximum distance, inclusive.
    assert!(measure.closest_point(point(5.0, 3.0), 3.0).is_some());
}

#[test]
fn closest_point_of_a_sample() {
    let path = Path::parse("M 0 0 C 0 10 10 10 10 0 L 20 0 Z").unwrap();
    let measure = PathMeasure::with_tolerance(&path, 0.1);
    let tolerance = measure.tolerance();

    let mut offset = 0.0;
    while offset < measure.length() {
        let sample = measure.sample(offset).unwrap();
        let result = measure
            .closest_point(sample.position(), f32::INFINITY)
            .unwrap();
        assert!(result.distance() <= tolerance);
        assert!(result.offset() <= offset + tolerance);
        offset += 0.7;
    }
}

#[test]
fn segment_of_open_path() {
    let path = Path::parse("M 0 0 L 10 0 L 10 10").unwrap();
    let measure = PathMeasure::new(&path);

    let mut output = Path::builder();
    measure.add_segment(5.0..15.0, &mut output);
    let segment = output.build();

    assert_eq!(segment.to_string(), "M 5 0 L 10 0 L 10 5");
}

#[test]
fn segment_of_whole_closed_contour() {
    let path = Path::parse("M 0 0 L 10 0 L 10 10 Z").unwrap();
    let measure = PathMeasure::new(&path);

    let mut output = Path::builder();
    measure.add_segment(-1.0..100.0, &mut output);
    let segment = output.build();

    assert_eq!(segment.to_string(), "M 0 0 L 10 0 L 10 10 Z");
    assert!((PathMeasure::new(&segment).length() - measure.length()).abs() < 1e-4);
}

#[test]
fn segment_across_the_closing_edge() {
    let path = Path::parse("M 0 0 L 10 0 L 10 10 L 0 10 Z").unwrap();
    let measure = PathMeasure::new(&path);

    let mut output = Path::builder();
    measure.add_segment(25.0..40.0, &mut output);
    let segment = output.build();

    assert_eq!(segment.to_string(), "M 5 10 L 0 10 L 0 0");
    assert_eq!(segment.num_contours(), 1);
    assert!(!segment.contours().next().unwrap().is_closed());
}

#[test]
fn segment_spanning_contours() {
    let path = Path::parse("M 0 0 L 10 0 M 0 10 L 10 10").unwrap();
    let measure = PathMeasure::new(&path);

    let mut output = Path::builder();
    measure.add_segment(5.0..15.0, &mut output);
    let segment = output.build();

    assert_eq!(segment.to_string(), "M 5 0 L 10 0 M 0 10 L 5 10");
}

#[test]
fn empty_segments() {
    let path = Path::parse("M 0 0 L 10 0").unwrap();
    let measure = PathMeasure::new(&path);

    for range in [5.0..5.0, 7.0..3.0, 20.0..30.0, -10.0..0.0] {
        let mut output = Path::builder();
        measure.add_segment(range, &mut output);
        assert!(output.build().is_empty());
    }
}

#[test]
fn segment_of_a_curve() {
    let mut path = Path::builder();
    path.add_circle(point(0.0, 0.0), 10.0);
    let path = path.build();
    let measure = PathMeasure::with_tolerance(&path, 0.01);
    let length = measure.length();

    let mut output = Path::builder();
    measure.add_segment(length * 0.25..length * 0.75, &mut output);
    let half = output.build();

    let half_length = PathMeasure::with_tolerance(&half, 0.01).length();
    assert!((half_length - length * 0.5).abs() < 1e-3);

    let start = measure.sample(length * 0.25).unwrap().position();
    assert!(approx_eq(half.contours().next().unwrap().first(), start));
}

#[test]
fn tolerance_is_clamped() {
    let path = Path::parse("M 0 0 L 1 0").unwrap();
    assert_eq!(PathMeasure::with_tolerance(&path, 0.0).tolerance(), MIN_TOLERANCE);
    assert_eq!(PathMeasure::with_tolerance(&path, -3.0).tolerance(), MIN_TOLERANCE);
    assert_eq!(PathMeasure::new(&path).tolerance(), DEFAULT_TOLERANCE);
}

#[test]
fn polylines() {
    let path = Path::parse("M 0 0 L 10 0 Z M 5 5").unwrap();
    let measure = PathMeasure::new(&path);

    let polylines: Vec<Polyline> = measure.polylines().collect();
    assert_eq!(polylines.len(), 2);
    assert_eq!(polylines[0].points, &[point(0.0, 0.0), point(10.0, 0.0), point(0.0, 0.0)]);
    assert!(polylines[0].closed);
    assert_eq!(polylines[1].points, &[point(5.0, 5.0)]);
    assert!(!polylines[1].closed);
}

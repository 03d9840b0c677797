//! The default path data structure.

use crate::builder::{Builder, BuilderImpl};
use crate::events::PathEvent;
use crate::geom::{CubicBezierSegment, LineSegment};
use crate::math::*;
use crate::parser::{ParseError, PathParser, Source};

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

/// The commands stored by [Path](struct.Path.html), one per path event.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub(crate) enum Verb {
    Begin,
    LineTo,
    CubicTo,
    Close,
    End,
}

impl Verb {
    #[inline]
    fn num_points(self) -> usize {
        match self {
            Verb::Begin | Verb::LineTo => 1,
            Verb::CubicTo => 3,
            Verb::Close | Verb::End => 0,
        }
    }
}

/// A simple path data structure.
///
/// A path is a sequence of contours. Each contour starts at a point, continues with line
/// segments and cubic bézier curves and is optionally closed, in which case an implicit line
/// segment goes back from its last point to its first point.
///
/// Paths are immutable once built. They print to and parse from an SVG-like textual
/// representation, see the `Display` and `FromStr` implementations.
///
/// # Representation
///
/// Paths contain two buffers:
/// - a buffer of commands (Begin, Line, Cubic, Close or End),
/// - and a buffer of points (endpoints and control points).
///
/// The order of storage for points is determined by the sequence of commands. Begin and
/// line commands store one point, cubic commands store their two control points followed
/// by their endpoint, and Close and End commands store no point.
#[derive(Clone, Default, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Path {
    pub(crate) points: Box<[Point]>,
    pub(crate) verbs: Box<[Verb]>,
}

impl Path {
    /// Creates a [WithSvg](../builder/struct.WithSvg.html) builder to build a path.
    pub fn builder() -> Builder {
        BuilderImpl::new().with_svg()
    }

    /// Creates an empty path.
    pub fn new() -> Path {
        Path {
            points: Box::new([]),
            verbs: Box::new([]),
        }
    }

    /// Returns true if the path contains no contour.
    pub fn is_empty(&self) -> bool {
        self.verbs.is_empty()
    }

    /// Returns the number of contours in the path.
    pub fn num_contours(&self) -> usize {
        self.verbs.iter().filter(|v| **v == Verb::Begin).count()
    }

    /// Iterates over the events of the path.
    pub fn iter(&self) -> Iter {
        Iter::new(&self.points[..], &self.verbs[..])
    }

    /// Iterates over the contours of the path.
    pub fn contours(&self) -> Contours {
        Contours {
            points: &self.points[..],
            verbs: &self.verbs[..],
        }
    }

    /// Returns a conservative bounding rectangle that contains all of the points of the path,
    /// including control points.
    ///
    /// Returns `None` if the path is empty.
    pub fn fast_bounding_box(&self) -> Option<Box2D> {
        if self.points.is_empty() {
            return None;
        }

        Some(Box2D::from_points(self.points.iter()))
    }

    /// Parses a path from its textual representation.
    ///
    /// See the [parser](../parser/index.html) module.
    pub fn parse(src: &str) -> Result<Path, ParseError> {
        let mut builder = Path::builder();
        PathParser::new().parse(&mut Source::new(src.chars()), &mut builder)?;

        Ok(builder.build())
    }
}

impl FromStr for Path {
    type Err = ParseError;

    fn from_str(src: &str) -> Result<Path, ParseError> {
        Path::parse(src)
    }
}

/// Prints the path using a subset of the SVG path syntax.
///
/// Each contour is printed as `M x y`, followed by `L x y` for line segments,
/// `C x1 y1 x2 y2 x y` for cubic bézier curves and a final `Z` if the contour is closed.
/// Tokens are separated with a single space. Numbers use the shortest representation that
/// parses back to the same value.
///
/// Printing two paths and joining them with a space is the same as printing the path
/// that contains the contours of both.
impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut points = self.points.iter();
        let mut next = || points.next().copied().unwrap_or_else(|| point(0.0, 0.0));

        for (i, verb) in self.verbs.iter().enumerate() {
            match *verb {
                Verb::Begin => {
                    let at = next();
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "M {} {}", at.x, at.y)?;
                }
                Verb::LineTo => {
                    let to = next();
                    write!(f, " L {} {}", to.x, to.y)?;
                }
                Verb::CubicTo => {
                    let ctrl1 = next();
                    let ctrl2 = next();
                    let to = next();
                    write!(
                        f,
                        " C {} {} {} {} {} {}",
                        ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, to.x, to.y
                    )?;
                }
                Verb::Close => {
                    write!(f, " Z")?;
                }
                Verb::End => {}
            }
        }

        Ok(())
    }
}

impl fmt::Debug for Path {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "\"{}\"", self)
    }
}

impl<'l> IntoIterator for &'l Path {
    type Item = PathEvent;
    type IntoIter = Iter<'l>;

    fn into_iter(self) -> Iter<'l> {
        self.iter()
    }
}

/// An iterator for `Path` and `Contour`.
#[derive(Clone)]
pub struct Iter<'l> {
    points: std::slice::Iter<'l, Point>,
    verbs: std::slice::Iter<'l, Verb>,
    current: Point,
    first: Point,
}

impl<'l> Iter<'l> {
    fn new(points: &'l [Point], verbs: &'l [Verb]) -> Self {
        Iter {
            points: points.iter(),
            verbs: verbs.iter(),
            current: point(0.0, 0.0),
            first: point(0.0, 0.0),
        }
    }

    #[inline]
    fn next_point(&mut self) -> Point {
        self.points.next().copied().unwrap_or(self.current)
    }
}

impl<'l> Iterator for Iter<'l> {
    type Item = PathEvent;

    #[inline]
    fn next(&mut self) -> Option<PathEvent> {
        match self.verbs.next() {
            Some(&Verb::Begin) => {
                self.current = self.next_point();
                self.first = self.current;
                Some(PathEvent::Begin { at: self.current })
            }
            Some(&Verb::LineTo) => {
                let from = self.current;
                self.current = self.next_point();
                Some(PathEvent::Line {
                    from,
                    to: self.current,
                })
            }
            Some(&Verb::CubicTo) => {
                let from = self.current;
                let ctrl1 = self.next_point();
                let ctrl2 = self.next_point();
                self.current = self.next_point();
                Some(PathEvent::Cubic {
                    from,
                    ctrl1,
                    ctrl2,
                    to: self.current,
                })
            }
            Some(&Verb::Close) => {
                let last = self.current;
                self.current = self.first;
                Some(PathEvent::End {
                    last,
                    first: self.first,
                    close: true,
                })
            }
            Some(&Verb::End) => Some(PathEvent::End {
                last: self.current,
                first: self.first,
                close: false,
            }),
            None => None,
        }
    }
}

/// An edge of a contour.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum Segment {
    Line(LineSegment<f32>),
    Cubic(CubicBezierSegment<f32>),
}

impl Segment {
    pub fn from(&self) -> Point {
        match self {
            Segment::Line(line) => line.from,
            Segment::Cubic(curve) => curve.from,
        }
    }

    pub fn to(&self) -> Point {
        match self {
            Segment::Line(line) => line.to,
            Segment::Cubic(curve) => curve.to,
        }
    }

    /// Approximates the segment with a sequence of line segments.
    ///
    /// Line segments are passed through as is. The end of the t parameter range at the
    /// final segment is guaranteed to be equal to `1.0`.
    pub fn for_each_flattened_with_t<F>(&self, tolerance: f32, callback: &mut F)
    where
        F: FnMut(&LineSegment<f32>, Range<f32>),
    {
        match self {
            Segment::Line(line) => callback(line, 0.0..1.0),
            Segment::Cubic(curve) => curve.for_each_flattened_with_t(tolerance, callback),
        }
    }

    /// Approximates the segment with a sequence of line segments.
    pub fn for_each_flattened<F>(&self, tolerance: f32, callback: &mut F)
    where
        F: FnMut(&LineSegment<f32>),
    {
        self.for_each_flattened_with_t(tolerance, &mut |line, _| callback(line));
    }
}

/// An iterator over the contours of a `Path`.
#[derive(Clone)]
pub struct Contours<'l> {
    points: &'l [Point],
    verbs: &'l [Verb],
}

impl<'l> Iterator for Contours<'l> {
    type Item = Contour<'l>;

    fn next(&mut self) -> Option<Contour<'l>> {
        if self.verbs.is_empty() {
            return None;
        }

        let mut num_verbs = 0;
        let mut num_points = 0;
        let mut closed = false;
        for verb in self.verbs.iter() {
            num_verbs += 1;
            num_points += verb.num_points();
            match *verb {
                Verb::Close => {
                    closed = true;
                    break;
                }
                Verb::End => break,
                _ => {}
            }
        }

        let num_points = num_points.min(self.points.len());
        let (verbs, remaining_verbs) = self.verbs.split_at(num_verbs);
        let (points, remaining_points) = self.points.split_at(num_points);
        self.verbs = remaining_verbs;
        self.points = remaining_points;

        Some(Contour {
            points,
            verbs,
            closed,
        })
    }
}

/// A view on a single contour of a `Path`.
#[derive(Copy, Clone)]
pub struct Contour<'l> {
    points: &'l [Point],
    verbs: &'l [Verb],
    closed: bool,
}

impl<'l> Contour<'l> {
    /// The point the contour starts at.
    pub fn first(&self) -> Point {
        self.points.first().copied().unwrap_or_else(|| point(0.0, 0.0))
    }

    /// The last endpoint of the contour, not counting the implicit closing segment.
    pub fn last(&self) -> Point {
        self.points.last().copied().unwrap_or_else(|| point(0.0, 0.0))
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Returns true if the contour has no explicit segment.
    pub fn is_a_point(&self) -> bool {
        self.points.len() <= 1
    }

    /// Iterates over the events of the contour.
    pub fn iter(&self) -> Iter<'l> {
        Iter::new(self.points, self.verbs)
    }

    /// Iterates over the segments of the contour, including the closing segment if the
    /// contour is closed.
    pub fn segments(&self) -> Segments<'l> {
        Segments { events: self.iter() }
    }
}

impl<'l> fmt::Debug for Contour<'l> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Contour {{ first: {:?}, points: {}, closed: {} }}",
            self.first(),
            self.points.len(),
            self.closed
        )
    }
}

/// An iterator over the segments of a contour.
#[derive(Clone)]
pub struct Segments<'l> {
    events: Iter<'l>,
}

impl<'l> Iterator for Segments<'l> {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        loop {
            match self.events.next()? {
                PathEvent::Begin { .. } | PathEvent::End { close: false, .. } => {}
                PathEvent::Line { from, to } => {
                    return Some(Segment::Line(LineSegment { from, to }));
                }
                PathEvent::Cubic {
                    from,
                    ctrl1,
                    ctrl2,
                    to,
                } => {
                    return Some(Segment::Cubic(CubicBezierSegment {
                        from,
                        ctrl1,
                        ctrl2,
                        to,
                    }));
                }
                PathEvent::End {
                    last,
                    first,
                    close: true,
                } => {
                    return Some(Segment::Line(LineSegment {
                        from: last,
                        to: first,
                    }));
                }
            }
        }
    }
}

#[test]
fn empty_path() {
    let path = Path::builder().build();
    assert!(path.is_empty());
    assert_eq!(path.num_contours(), 0);
    assert_eq!(path.to_string(), "");
    assert_eq!(path.iter().next(), None);
    assert!(path.contours().next().is_none());
    assert_eq!(path.fast_bounding_box(), None);
    assert_eq!(path, Path::new());
}

#[test]
fn simple_path_events() {
    let mut builder = Path::builder();
    builder.move_to(point(0.0, 0.0));
    builder.line_to(point(1.0, 0.0));
    builder.cubic_bezier_to(point(2.0, 0.0), point(2.0, 1.0), point(1.0, 1.0));
    builder.close();
    builder.move_to(point(10.0, 0.0));
    let path = builder.build();

    let mut it = path.iter();
    assert_eq!(it.next(), Some(PathEvent::Begin { at: point(0.0, 0.0) }));
    assert_eq!(
        it.next(),
        Some(PathEvent::Line {
            from: point(0.0, 0.0),
            to: point(1.0, 0.0)
        })
    );
    assert_eq!(
        it.next(),
        Some(PathEvent::Cubic {
            from: point(1.0, 0.0),
            ctrl1: point(2.0, 0.0),
            ctrl2: point(2.0, 1.0),
            to: point(1.0, 1.0)
        })
    );
    assert_eq!(
        it.next(),
        Some(PathEvent::End {
            last: point(1.0, 1.0),
            first: point(0.0, 0.0),
            close: true
        })
    );
    assert_eq!(it.next(), Some(PathEvent::Begin { at: point(10.0, 0.0) }));
    assert_eq!(
        it.next(),
        Some(PathEvent::End {
            last: point(10.0, 0.0),
            first: point(10.0, 0.0),
            close: false
        })
    );
    assert_eq!(it.next(), None);
}

#[test]
fn contours_and_segments() {
    let mut builder = Path::builder();
    builder.move_to(point(0.0, 0.0));
    builder.line_to(point(1.0, 0.0));
    builder.line_to(point(1.0, 1.0));
    builder.close();
    builder.move_to(point(5.0, 5.0));
    builder.cubic_bezier_to(point(6.0, 5.0), point(7.0, 6.0), point(7.0, 7.0));
    builder.move_to(point(9.0, 9.0));
    let path = builder.build();

    let contours: Vec<Contour> = path.contours().collect();
    assert_eq!(contours.len(), 3);

    assert!(contours[0].is_closed());
    assert_eq!(contours[0].first(), point(0.0, 0.0));
    assert_eq!(contours[0].last(), point(1.0, 1.0));
    let segments: Vec<Segment> = contours[0].segments().collect();
    assert_eq!(segments.len(), 3);
    assert_eq!(
        segments[2],
        Segment::Line(LineSegment {
            from: point(1.0, 1.0),
            to: point(0.0, 0.0)
        })
    );

    assert!(!contours[1].is_closed());
    let segments: Vec<Segment> = contours[1].segments().collect();
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].from(), point(5.0, 5.0));
    assert_eq!(segments[0].to(), point(7.0, 7.0));

    assert!(contours[2].is_a_point());
    assert_eq!(contours[2].segments().count(), 0);
}

#[test]
fn print_concatenation() {
    let mut a = Path::builder();
    a.move_to(point(0.5, -1.25));
    a.cubic_bezier_to(point(1.0, 2.0), point(3.0, 4.0), point(5.0, 6.0));
    let a = a.build();

    let mut b = Path::builder();
    b.add_rectangle(&rect(1.0, 1.0, 2.0, 2.0));
    let b = b.build();

    let mut ab = Path::builder();
    ab.add_path(&a);
    ab.add_path(&b);
    let ab = ab.build();

    assert_eq!(format!("{} {}", a, b), ab.to_string());
    assert_eq!(
        ab.to_string(),
        "M 0.5 -1.25 C 1 2 3 4 5 6 M 1 1 L 3 1 L 3 3 L 1 3 Z"
    );
}

#[test]
fn bounding_box() {
    let mut builder = Path::builder();
    builder.move_to(point(1.0, 1.0));
    builder.cubic_bezier_to(point(-2.0, 5.0), point(3.0, 8.0), point(4.0, 0.0));
    let path = builder.build();

    let b = path.fast_bounding_box().unwrap();
    assert_eq!(b.min, point(-2.0, 0.0));
    assert_eq!(b.max, point(4.0, 8.0));
}

#[test]
fn shortest_float_representation() {
    let mut builder = Path::builder();
    builder.move_to(point(0.1, 1.0 / 3.0));
    builder.line_to(point(-0.0, 1e10));
    let path = builder.build();

    let printed = path.to_string();
    assert_eq!(printed, format!("M 0.1 {} L -0 10000000000", 1.0f32 / 3.0));

    let parsed: Path = printed.parse().unwrap();
    assert_eq!(parsed.to_string(), printed);
    assert_eq!(parsed, path);
}

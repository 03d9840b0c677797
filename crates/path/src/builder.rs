//! Path building utilities.
//!
//! ## `PathBuilder` or `WithSvg`
//!
//! Paths can be built via either of two abstractions:
//!
//! - [PathBuilder](trait.PathBuilder.html) is a simple and efficient interface which
//!   does not deal with any ambiguous cases: every contour is explicitly contained in a
//!   `begin`/`end` pair.
//! - [WithSvg](struct.WithSvg.html) is a higher-level interface that keeps track of a
//!   current point, removing the burden of dealing with special cases from the user.
//!   This is what [Path::builder](../struct.Path.html#method.builder) returns.
//!
//! `WithSvg` also implements `PathBuilder`, which makes it possible to hand it to code that
//! produces paths through the low level interface, such as segment extraction.
//!
//! ## Examples
//!
//! ```
//! use meander_path::{Path, math::{point, vector, rect}};
//!
//! let mut builder = Path::builder();
//!
//! builder.move_to(point(0.0, 0.0));
//! builder.line_to(point(1.0, 0.0));
//! builder.relative_cubic_bezier_to(vector(1.0, 0.0), vector(1.0, 1.0), vector(0.0, 1.0));
//! // No need to explicitly end a contour.
//!
//! builder.move_to(point(10.0, 0.0));
//! builder.line_to(point(12.0, 2.0));
//! builder.close();
//!
//! builder.add_rectangle(&rect(0.0, 0.0, 5.0, 5.0));
//! builder.add_circle(point(20.0, 20.0), 4.0);
//!
//! let path = builder.build();
//! assert_eq!(path.num_contours(), 4);
//! ```
//!

use crate::events::PathEvent;
use crate::math::*;
use crate::path::{Path, Verb};
use crate::private::{nan_check, DebugValidator};

/// The factor used to place the control points of the four cubic bézier curves approximating
/// a circle.
///
/// See <https://spencermortensen.com/articles/bezier-circle/>.
const CIRCLE_FACTOR: f32 = 0.55191505;

/// The base path building interface.
///
/// Unlike the SVG specification, this interface does not implicitly start contours:
/// every contour must be explicitly started with `begin` and terminated with `end`.
pub trait PathBuilder {
    /// Starts a new contour at a given position.
    ///
    /// There must be no contour in progress when this method is called.
    fn begin(&mut self, at: Point);

    /// Ends the current contour.
    ///
    /// A contour must be in progress when this method is called.
    /// After this method is called, there is no contour in progress until
    /// `begin` is called again.
    fn end(&mut self, close: bool);

    /// Closes the current contour.
    ///
    /// Shorthand for `builder.end(true)`.
    fn close(&mut self) {
        self.end(true)
    }

    /// Adds a line segment to the current contour.
    ///
    /// A contour must be in progress when this method is called.
    fn line_to(&mut self, to: Point);

    /// Adds a cubic bézier curve to the current contour.
    ///
    /// A contour must be in progress when this method is called.
    fn cubic_bezier_to(&mut self, ctrl1: Point, ctrl2: Point, to: Point);

    /// Hints at the builder that a certain number of points will be added.
    fn reserve(&mut self, _points: usize) {}

    /// Applies the provided path event.
    ///
    /// The requirements for each method apply to the corresponding event.
    fn path_event(&mut self, event: PathEvent) {
        match event {
            PathEvent::Begin { at } => {
                self.begin(at);
            }
            PathEvent::Line { to, .. } => {
                self.line_to(to);
            }
            PathEvent::Cubic {
                ctrl1, ctrl2, to, ..
            } => {
                self.cubic_bezier_to(ctrl1, ctrl2, to);
            }
            PathEvent::End { close, .. } => {
                self.end(close);
            }
        }
    }

    /// Applies a sequence of path events.
    fn extend<Evts>(&mut self, events: Evts)
    where
        Evts: IntoIterator<Item = PathEvent>,
        Self: Sized,
    {
        for evt in events.into_iter() {
            self.path_event(evt)
        }
    }

    /// Adds a closed contour made of the four sides of a rectangle.
    ///
    /// The contour starts at the rectangle's origin and goes through
    /// `(x + w, y)`, `(x + w, y + h)` and `(x, y + h)`. The size is used as is: empty and
    /// negative sizes are not normalized.
    ///
    /// There must be no contour in progress when this method is called.
    /// No contour is in progress after the method is called.
    fn add_rectangle(&mut self, rect: &Rect) {
        let Rect { origin, size } = *rect;
        self.begin(origin);
        self.line_to(point(origin.x + size.width, origin.y));
        self.line_to(point(origin.x + size.width, origin.y + size.height));
        self.line_to(point(origin.x, origin.y + size.height));
        self.end(true);
    }

    /// Adds a closed contour approximating a circle with four cubic bézier curves.
    ///
    /// The contour starts at `center + (-radius, 0)`. Negative radii are treated as their
    /// absolute value, a zero radius produces a contour that is reduced to a point.
    ///
    /// There must be no contour in progress when this method is called.
    /// No contour is in progress after the method is called.
    fn add_circle(&mut self, center: Point, radius: f32) {
        let radius = radius.abs();
        let d = radius * CIRCLE_FACTOR;

        self.begin(center + vector(-radius, 0.0));

        let ctrl_0 = center + vector(-radius, -d);
        let ctrl_1 = center + vector(-d, -radius);
        let mid = center + vector(0.0, -radius);
        self.cubic_bezier_to(ctrl_0, ctrl_1, mid);

        let ctrl_0 = center + vector(d, -radius);
        let ctrl_1 = center + vector(radius, -d);
        let mid = center + vector(radius, 0.0);
        self.cubic_bezier_to(ctrl_0, ctrl_1, mid);

        let ctrl_0 = center + vector(radius, d);
        let ctrl_1 = center + vector(d, radius);
        let mid = center + vector(0.0, radius);
        self.cubic_bezier_to(ctrl_0, ctrl_1, mid);

        let ctrl_0 = center + vector(-d, radius);
        let ctrl_1 = center + vector(-radius, d);
        let mid = center + vector(-radius, 0.0);
        self.cubic_bezier_to(ctrl_0, ctrl_1, mid);

        self.end(true);
    }
}

/// Builders that produce a path object.
pub trait Build {
    /// The type of object that is created by this builder.
    type PathType;

    /// Builds a path object, consuming the builder.
    fn build(self) -> Self::PathType;
}

/// The default path builder, with an SVG-like interface.
pub type Builder = WithSvg<BuilderImpl>;

/// The low level builder that accumulates the verbs and points of a `Path`.
#[derive(Clone, Debug, Default)]
pub struct BuilderImpl {
    pub(crate) points: Vec<Point>,
    pub(crate) verbs: Vec<Verb>,
    validator: DebugValidator,
}

impl BuilderImpl {
    pub fn new() -> Self {
        BuilderImpl {
            points: Vec::new(),
            verbs: Vec::new(),
            validator: DebugValidator::new(),
        }
    }

    /// Appends the contours of several paths at once.
    ///
    /// There must be no contour in progress when this method is called.
    pub fn extend_from_paths(&mut self, paths: &[&Path]) {
        let mut verbs_len = self.verbs.len();
        let mut points_len = self.points.len();
        for path in paths {
            verbs_len += path.verbs.len();
            points_len += path.points.len();
        }
        self.verbs.reserve(verbs_len - self.verbs.len());
        self.points.reserve(points_len - self.points.len());

        for path in paths {
            self.verbs.extend_from_slice(&path.verbs);
            self.points.extend_from_slice(&path.points);
        }
    }

    /// Returns an SVG-like builder that wraps this one.
    pub fn with_svg(self) -> WithSvg<Self> {
        WithSvg::new(self)
    }
}

impl PathBuilder for BuilderImpl {
    fn begin(&mut self, at: Point) {
        self.validator.begin();
        nan_check(at);

        self.verbs.push(Verb::Begin);
        self.points.push(at);
    }

    fn end(&mut self, close: bool) {
        self.validator.end();

        self.verbs.push(if close { Verb::Close } else { Verb::End });
    }

    fn line_to(&mut self, to: Point) {
        self.validator.edge();
        nan_check(to);

        self.verbs.push(Verb::LineTo);
        self.points.push(to);
    }

    fn cubic_bezier_to(&mut self, ctrl1: Point, ctrl2: Point, to: Point) {
        self.validator.edge();
        nan_check(ctrl1);
        nan_check(ctrl2);
        nan_check(to);

        self.verbs.push(Verb::CubicTo);
        self.points.push(ctrl1);
        self.points.push(ctrl2);
        self.points.push(to);
    }

    fn reserve(&mut self, points: usize) {
        self.points.reserve(points);
        self.verbs.reserve(points);
    }
}

impl Build for BuilderImpl {
    type PathType = Path;

    fn build(self) -> Path {
        self.validator.build();
        Path {
            points: self.points.into_boxed_slice(),
            verbs: self.verbs.into_boxed_slice(),
        }
    }
}

/// Implements an SVG-like building interface on top of a `PathBuilder`.
///
/// The builder keeps track of a current point, which starts at the origin:
///
/// - `line_to` and `cubic_bezier_to` implicitly start a contour at the current point when no
///   contour is in progress,
/// - `move_to` ends the contour in progress (if any) without closing it,
/// - `close` moves the current point back to the start of the contour, and does nothing when
///   no contour is in progress.
pub struct WithSvg<B: PathBuilder> {
    builder: B,

    first_position: Point,
    current_position: Point,
    in_contour: bool,
}

impl<B: PathBuilder> WithSvg<B> {
    pub fn new(builder: B) -> Self {
        WithSvg {
            builder,
            first_position: point(0.0, 0.0),
            current_position: point(0.0, 0.0),
            in_contour: false,
        }
    }

    /// Ends the contour in progress (if any) and builds the path.
    pub fn build(mut self) -> B::PathType
    where
        B: Build,
    {
        self.end_if_needed();
        self.builder.build()
    }

    /// Starts a new contour at `to`, ending the one in progress, if any.
    pub fn move_to(&mut self, to: Point) {
        self.end_if_needed();

        self.builder.begin(to);

        self.in_contour = true;
        self.first_position = to;
        self.current_position = to;
    }

    pub fn relative_move_to(&mut self, to: Vector) {
        let to = self.current_position + to;
        self.move_to(to);
    }

    pub fn line_to(&mut self, to: Point) {
        self.begin_if_needed();

        self.current_position = to;
        self.builder.line_to(to);
    }

    pub fn relative_line_to(&mut self, to: Vector) {
        let to = self.current_position + to;
        self.line_to(to);
    }

    pub fn cubic_bezier_to(&mut self, ctrl1: Point, ctrl2: Point, to: Point) {
        self.begin_if_needed();

        self.current_position = to;
        self.builder.cubic_bezier_to(ctrl1, ctrl2, to);
    }

    /// Adds a cubic bézier curve, all three points being relative to the current point.
    pub fn relative_cubic_bezier_to(&mut self, ctrl1: Vector, ctrl2: Vector, to: Vector) {
        let from = self.current_position;
        self.cubic_bezier_to(from + ctrl1, from + ctrl2, from + to);
    }

    /// Closes the contour in progress.
    ///
    /// The current point goes back to the start of the contour. Does nothing if no contour
    /// is in progress.
    pub fn close(&mut self) {
        if !self.in_contour {
            return;
        }

        self.current_position = self.first_position;
        self.in_contour = false;

        self.builder.end(true);
    }

    /// Adds a closed rectangle contour. See `PathBuilder::add_rectangle`.
    ///
    /// The current point becomes the rectangle's origin.
    pub fn add_rectangle(&mut self, rect: &Rect) {
        self.end_if_needed();

        self.builder.add_rectangle(rect);

        self.first_position = rect.origin;
        self.current_position = rect.origin;
    }

    /// Adds a closed circle contour. See `PathBuilder::add_circle`.
    ///
    /// The current point becomes the start of the circle's contour.
    pub fn add_circle(&mut self, center: Point, radius: f32) {
        self.end_if_needed();

        self.builder.add_circle(center, radius);

        let start = center + vector(-radius.abs(), 0.0);
        self.first_position = start;
        self.current_position = start;
    }

    /// Appends all of the contours of another path.
    ///
    /// The contour in progress (if any) is ended first. The current point becomes the end of
    /// the last appended contour, or its start if it is closed.
    pub fn add_path(&mut self, path: &Path) {
        self.end_if_needed();

        for event in path.iter() {
            if let PathEvent::End { last, first, close } = event {
                self.first_position = first;
                self.current_position = if close { first } else { last };
            }
            self.builder.path_event(event);
        }
    }

    pub fn current_position(&self) -> Point {
        self.current_position
    }

    /// Returns true if a contour is in progress.
    pub fn is_in_contour(&self) -> bool {
        self.in_contour
    }

    pub fn reserve(&mut self, points: usize) {
        self.builder.reserve(points);
    }

    fn begin_if_needed(&mut self) {
        if !self.in_contour {
            let at = self.current_position;
            self.move_to(at);
        }
    }

    fn end_if_needed(&mut self) {
        if self.in_contour {
            self.in_contour = false;
            self.builder.end(false);
        }
    }
}

impl<B: PathBuilder> PathBuilder for WithSvg<B> {
    fn begin(&mut self, at: Point) {
        self.move_to(at);
    }

    fn end(&mut self, close: bool) {
        if close {
            self.close();
        } else {
            self.end_if_needed();
        }
    }

    fn line_to(&mut self, to: Point) {
        WithSvg::line_to(self, to);
    }

    fn cubic_bezier_to(&mut self, ctrl1: Point, ctrl2: Point, to: Point) {
        WithSvg::cubic_bezier_to(self, ctrl1, ctrl2, to);
    }

    fn add_rectangle(&mut self, rect: &Rect) {
        WithSvg::add_rectangle(self, rect);
    }

    fn add_circle(&mut self, center: Point, radius: f32) {
        WithSvg::add_circle(self, center, radius);
    }

    fn reserve(&mut self, points: usize) {
        self.builder.reserve(points);
    }
}

#[test]
fn implicit_contour_start() {
    let mut builder = Path::builder();
    builder.line_to(point(1.0, 2.0));
    builder.line_to(point(3.0, 2.0));
    let path = builder.build();

    assert_eq!(path.to_string(), "M 0 0 L 1 2 L 3 2");
}

#[test]
fn move_to_ends_contour() {
    let mut builder = Path::builder();
    builder.move_to(point(1.0, 1.0));
    builder.move_to(point(1.0, 1.0));
    builder.line_to(point(2.0, 1.0));
    let path = builder.build();

    assert_eq!(path.to_string(), "M 1 1 M 1 1 L 2 1");
    assert_eq!(path.num_contours(), 2);
}

#[test]
fn close_is_idempotent() {
    let mut builder = Path::builder();
    builder.move_to(point(5.0, 5.0));
    builder.close();
    builder.close();
    builder.close();
    let path = builder.build();

    assert_eq!(path.to_string(), "M 5 5 Z");
}

#[test]
fn close_moves_current_point_to_contour_start() {
    let mut builder = Path::builder();
    builder.move_to(point(1.0, 1.0));
    builder.line_to(point(4.0, 1.0));
    builder.line_to(point(4.0, 5.0));
    builder.close();
    assert_eq!(builder.current_position(), point(1.0, 1.0));
    assert!(!builder.is_in_contour());

    builder.relative_line_to(vector(0.0, -1.0));
    let path = builder.build();

    assert_eq!(path.to_string(), "M 1 1 L 4 1 L 4 5 Z M 1 1 L 1 0");
}

#[test]
fn relative_commands() {
    let mut builder = Path::builder();
    builder.relative_move_to(vector(1.0, 1.0));
    builder.relative_line_to(vector(2.0, 0.0));
    builder.relative_cubic_bezier_to(vector(1.0, 0.0), vector(1.0, 1.0), vector(0.0, 1.0));
    builder.relative_move_to(vector(-3.0, 0.0));
    let path = builder.build();

    assert_eq!(path.to_string(), "M 1 1 L 3 1 C 4 1 4 2 3 2 M 0 2");
}

#[test]
fn rectangles() {
    let mut builder = Path::builder();
    builder.move_to(point(9.0, 9.0));
    builder.add_rectangle(&rect(1.0, 2.0, 3.0, 4.0));
    assert_eq!(builder.current_position(), point(1.0, 2.0));
    builder.add_rectangle(&rect(0.0, 0.0, -1.0, 0.0));
    let path = builder.build();

    assert_eq!(
        path.to_string(),
        "M 9 9 M 1 2 L 4 2 L 4 6 L 1 6 Z M 0 0 L -1 0 L -1 0 L 0 0 Z"
    );
}

#[test]
fn circles() {
    let mut builder = Path::builder();
    builder.add_circle(point(0.0, 0.0), -2.0);
    builder.add_circle(point(1.0, 1.0), 0.0);
    let path = builder.build();

    assert_eq!(path.num_contours(), 2);
    let contours: Vec<_> = path.contours().collect();
    assert!(contours[0].is_closed());
    assert_eq!(contours[0].first(), point(-2.0, 0.0));
    assert_eq!(contours[0].segments().count(), 5);
    assert!(contours[1].segments().all(|s| s.from() == point(1.0, 1.0) && s.to() == point(1.0, 1.0)));
}

#[test]
fn add_path_copies_contours() {
    let mut a = Path::builder();
    a.move_to(point(1.0, 2.0));
    a.line_to(point(3.0, 4.0));
    let a = a.build();

    let mut b = Path::builder();
    b.add_circle(point(0.0, 0.0), 1.0);
    b.move_to(point(7.0, 7.0));
    let b = b.build();

    let mut builder = Path::builder();
    builder.move_to(point(0.5, 0.5));
    builder.add_path(&a);
    assert_eq!(builder.current_position(), point(3.0, 4.0));
    assert!(!builder.is_in_contour());
    builder.add_path(&b);
    assert_eq!(builder.current_position(), point(7.0, 7.0));
    builder.line_to(point(8.0, 8.0));
    let path = builder.build();

    assert_eq!(
        path.to_string(),
        format!("M 0.5 0.5 {} {} M 7 7 L 8 8", a, b)
    );
}

#[test]
fn extend_from_paths() {
    let a = Path::parse("M 0 0 L 1 1 Z").unwrap();
    let b = Path::parse("M 2 2 C 3 3 4 4 5 5").unwrap();

    let mut builder = BuilderImpl::new();
    builder.extend_from_paths(&[&a, &b, &a]);
    let path = builder.build();

    assert_eq!(path.num_contours(), 3);
    assert_eq!(path.to_string(), format!("{} {} {}", a, b, a));
}

#[test]
fn extend_with_events() {
    let path = Path::parse("M 0 0 L 1 0 L 1 1 Z M 5 5 C 6 5 6 6 5 6 M 9 9").unwrap();

    let mut builder = BuilderImpl::new();
    builder.extend(path.iter());
    assert_eq!(builder.build().to_string(), path.to_string());

    let mut builder = Path::builder();
    builder.move_to(point(-1.0, -1.0));
    builder.extend(&path);
    assert_eq!(builder.build().to_string(), format!("M -1 -1 {}", path));
}

#[test]
fn low_level_interface() {
    let mut builder = BuilderImpl::new();
    builder.begin(point(0.0, 0.0));
    builder.line_to(point(1.0, 0.0));
    builder.end(false);
    builder.begin(point(2.0, 0.0));
    builder.cubic_bezier_to(point(3.0, 0.0), point(3.0, 1.0), point(2.0, 1.0));
    builder.close();
    let path = builder.build();

    assert_eq!(path.to_string(), "M 0 0 L 1 0 M 2 0 C 3 0 3 1 2 1 Z");
}

#[test]
fn svg_builder_as_path_builder() {
    fn emit(output: &mut dyn PathBuilder) {
        output.begin(point(0.0, 0.0));
        output.line_to(point(1.0, 0.0));
        output.begin(point(5.0, 0.0));
        output.end(true);
        output.end(true);
    }

    let mut builder = Path::builder();
    emit(&mut builder);
    let path = builder.build();

    assert_eq!(path.to_string(), "M 0 0 L 1 0 M 5 0 Z");
}

#[cfg(debug_assertions)]
#[test]
#[should_panic]
fn low_level_line_without_begin() {
    let mut builder = BuilderImpl::new();
    builder.line_to(point(1.0, 0.0));
}

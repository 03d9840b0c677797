//! Parsing paths from their textual representation.
//!
//! # Syntax
//!
//! The accepted syntax is the one produced by printing a [Path](../struct.Path.html)
//! (`M`, `L`, `C` and `Z` commands with absolute coordinates) extended to the SVG path
//! commands that can be expressed with lines and cubic bézier curves:
//!
//! - `M`/`m`: move-to. Extra coordinate pairs are implicit line-to commands.
//! - `L`/`l`, `H`/`h`, `V`/`v`: line-to, horizontal and vertical line-to.
//! - `C`/`c`, `S`/`s`: cubic bézier curve and smooth cubic bézier curve.
//! - `Q`/`q`, `T`/`t`: quadratic bézier curves, converted to equivalent cubic curves.
//! - `Z`/`z`: close.
//!
//! Lower case commands use coordinates relative to the current point. Numbers are separated
//! by whitespace and/or commas. A command that follows `Z` continues from the start of the
//! contour that was just closed.
//!
//! Elliptic arcs (`A`/`a`) are not supported.

use crate::builder::{PathBuilder, WithSvg};
use crate::math::{point, Point};

use thiserror::Error;

#[non_exhaustive]
#[derive(Error, Clone, Debug, PartialEq)]
pub enum ParseError {
    #[error("Line {line} Column {column}: Expected number, got {src:?}.")]
    Number { src: String, line: i32, column: i32 },
    #[error("Line {line} Column {column}: Invalid command {command:?}.")]
    Command {
        command: char,
        line: i32,
        column: i32,
    },
}

// A buffered iterator of characters keeping track of line and column.
pub struct Source<Iter> {
    src: Iter,
    current: char,
    line: i32,
    col: i32,
    finished: bool,
}

impl<Iter: Iterator<Item = char>> Source<Iter> {
    pub fn new<IntoIter>(src: IntoIter) -> Self
    where
        IntoIter: IntoIterator<IntoIter = Iter>,
    {
        Self::with_position(0, 0, src)
    }

    pub fn with_position<IntoIter>(line: i32, column: i32, src: IntoIter) -> Self
    where
        IntoIter: IntoIterator<IntoIter = Iter>,
    {
        let mut src = src.into_iter();

        let (current, finished) = match src.next() {
            Some(c) => (c, false),
            None => (' ', true),
        };

        let line = line + if current == '\n' { 1 } else { 0 };

        Source {
            current,
            finished,
            src,
            line,
            col: column,
        }
    }

    fn skip_whitespace(&mut self) {
        while !self.finished && (self.current.is_whitespace() || self.current == ',') {
            self.advance_one();
        }
    }

    fn advance_one(&mut self) {
        if self.finished {
            return;
        }
        match self.src.next() {
            Some('\n') => {
                self.current = '\n';
                self.line += 1;
                self.col = -1;
            }
            Some(c) => {
                self.current = c;
                self.col += 1;
            }
            None => {
                self.current = '~';
                self.finished = true;
            }
        }
    }

    fn push_digits(&mut self, buffer: &mut String) {
        while self.current.is_ascii_digit() {
            buffer.push(self.current);
            self.advance_one();
        }
    }

    fn push_sign(&mut self, buffer: &mut String) {
        if self.current == '-' || self.current == '+' {
            buffer.push(self.current);
            self.advance_one();
        }
    }
}

/// A context object for parsing paths.
///
/// Holds a few buffers that can be reused between parses.
#[derive(Debug, Default)]
pub struct PathParser {
    float_buffer: String,
    prev_cubic_ctrl: Option<Point>,
    prev_quadratic_ctrl: Option<Point>,
}

impl PathParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses the source and appends the resulting contours to the output builder.
    ///
    /// The contours that were successfully parsed before an error are kept in the builder.
    pub fn parse<Iter, B>(
        &mut self,
        src: &mut Source<Iter>,
        output: &mut WithSvg<B>,
    ) -> Result<(), ParseError>
    where
        Iter: Iterator<Item = char>,
        B: PathBuilder,
    {
        self.prev_cubic_ctrl = None;
        self.prev_quadratic_ctrl = None;

        let mut implicit_cmd = 'M';

        src.skip_whitespace();

        while !src.finished {
            let mut cmd = src.current;
            let cmd_line = src.line;
            let cmd_col = src.col;

            if cmd.is_ascii_alphabetic() {
                src.advance_one();
            } else {
                cmd = implicit_cmd;
            }

            let is_relative = cmd.is_ascii_lowercase();
            let current = output.current_position();

            match cmd {
                'm' | 'M' => {
                    let to = self.parse_point(is_relative, current, src)?;
                    output.move_to(to);
                }
                'l' | 'L' => {
                    let to = self.parse_point(is_relative, current, src)?;
                    output.line_to(to);
                }
                'h' | 'H' => {
                    let mut x = self.parse_number(src)?;
                    if is_relative {
                        x += current.x;
                    }
                    output.line_to(point(x, current.y));
                }
                'v' | 'V' => {
                    let mut y = self.parse_number(src)?;
                    if is_relative {
                        y += current.y;
                    }
                    output.line_to(point(current.x, y));
                }
                'c' | 'C' => {
                    let ctrl1 = self.parse_point(is_relative, current, src)?;
                    let ctrl2 = self.parse_point(is_relative, current, src)?;
                    let to = self.parse_point(is_relative, current, src)?;
                    self.prev_cubic_ctrl = Some(ctrl2);
                    output.cubic_bezier_to(ctrl1, ctrl2, to);
                }
                's' | 'S' => {
                    let ctrl1 = smooth_ctrl(current, self.prev_cubic_ctrl);
                    let ctrl2 = self.parse_point(is_relative, current, src)?;
                    let to = self.parse_point(is_relative, current, src)?;
                    self.prev_cubic_ctrl = Some(ctrl2);
                    output.cubic_bezier_to(ctrl1, ctrl2, to);
                }
                'q' | 'Q' => {
                    let ctrl = self.parse_point(is_relative, current, src)?;
                    let to = self.parse_point(is_relative, current, src)?;
                    self.prev_quadratic_ctrl = Some(ctrl);
                    quadratic_bezier_to(output, current, ctrl, to);
                }
                't' | 'T' => {
                    let ctrl = smooth_ctrl(current, self.prev_quadratic_ctrl);
                    let to = self.parse_point(is_relative, current, src)?;
                    self.prev_quadratic_ctrl = Some(ctrl);
                    quadratic_bezier_to(output, current, ctrl, to);
                }
                'z' | 'Z' => {
                    output.close();
                }
                _ => {
                    return Err(ParseError::Command {
                        command: cmd,
                        line: cmd_line,
                        column: cmd_col,
                    });
                }
            }

            match cmd {
                'c' | 'C' | 's' | 'S' => {
                    self.prev_quadratic_ctrl = None;
                }
                'q' | 'Q' | 't' | 'T' => {
                    self.prev_cubic_ctrl = None;
                }
                _ => {
                    self.prev_cubic_ctrl = None;
                    self.prev_quadratic_ctrl = None;
                }
            }

            implicit_cmd = match cmd {
                'm' => 'l',
                'M' => 'L',
                'z' => 'm',
                'Z' => 'M',
                c => c,
            };

            src.skip_whitespace();
        }

        Ok(())
    }

    fn parse_point(
        &mut self,
        is_relative: bool,
        current: Point,
        src: &mut Source<impl Iterator<Item = char>>,
    ) -> Result<Point, ParseError> {
        let mut x = self.parse_number(src)?;
        let mut y = self.parse_number(src)?;

        if is_relative {
            x += current.x;
            y += current.y;
        }

        Ok(point(x, y))
    }

    fn parse_number(
        &mut self,
        src: &mut Source<impl Iterator<Item = char>>,
    ) -> Result<f32, ParseError> {
        self.float_buffer.clear();

        src.skip_whitespace();

        let line = src.line;
        let column = src.col;

        if !src.finished {
            src.push_sign(&mut self.float_buffer);
            src.push_digits(&mut self.float_buffer);

            if src.current == '.' {
                self.float_buffer.push('.');
                src.advance_one();
                src.push_digits(&mut self.float_buffer);
            }

            if src.current == 'e' || src.current == 'E' {
                self.float_buffer.push(src.current);
                src.advance_one();
                src.push_sign(&mut self.float_buffer);
                src.push_digits(&mut self.float_buffer);
            }
        }

        match self.float_buffer.parse::<f32>() {
            Ok(val) => Ok(val),
            Err(_) => Err(ParseError::Number {
                src: std::mem::take(&mut self.float_buffer),
                line,
                column,
            }),
        }
    }
}

fn smooth_ctrl(current: Point, prev_ctrl: Option<Point>) -> Point {
    match prev_ctrl {
        Some(prev_ctrl) => current + (current - prev_ctrl),
        None => current,
    }
}

// Degree elevation: the cubic curve with these control points traces the same curve.
fn quadratic_bezier_to<B: PathBuilder>(output: &mut WithSvg<B>, from: Point, ctrl: Point, to: Point) {
    let ctrl1 = from + (ctrl - from) * (2.0 / 3.0);
    let ctrl2 = to + (ctrl - to) * (2.0 / 3.0);
    output.cubic_bezier_to(ctrl1, ctrl2, to);
}

#[cfg(test)]
use crate::path::Path;
#[cfg(test)]
use crate::PathEvent;

#[test]
fn empty() {
    assert!(Path::parse("").unwrap().is_empty());
    assert!(Path::parse(" \n ").unwrap().is_empty());
}

#[test]
fn simple_square() {
    let path = Path::parse("M 0 0 L 1 0 L 1 1 L 0 1 Z").unwrap();
    assert_eq!(path.to_string(), "M 0 0 L 1 0 L 1 1 L 0 1 Z");
}

#[test]
fn implicit_polyline() {
    let path = Path::parse("0 0 1 1, 2 2 3,3").unwrap();
    assert_eq!(path.to_string(), "M 0 0 L 1 1 L 2 2 L 3 3");

    let path = Path::parse("m 1 1 1 1 1 1").unwrap();
    assert_eq!(path.to_string(), "M 1 1 L 2 2 L 3 3");
}

#[test]
fn relative_and_axis_aligned_lines() {
    let path = Path::parse("M 1 1 h 2 v 3 H 0 V 0 l -1 -1").unwrap();
    assert_eq!(path.to_string(), "M 1 1 L 3 1 L 3 4 L 0 4 L 0 0 L -1 -1");
}

#[test]
fn relative_cubic() {
    let path = Path::parse("M 10 10 c 1 0 2 1 2 2 s 1 2 0 2").unwrap();
    assert_eq!(
        path.to_string(),
        "M 10 10 C 11 10 12 11 12 12 C 12 13 13 14 12 14"
    );
}

#[test]
fn quadratic_curves() {
    let path = Path::parse("M 0 0 Q 3 3 6 0 T 12 0").unwrap();
    let mut it = path.iter();
    assert_eq!(it.next(), Some(PathEvent::Begin { at: point(0.0, 0.0) }));
    match it.next() {
        Some(PathEvent::Cubic {
            from,
            ctrl1,
            ctrl2,
            to,
        }) => {
            assert_eq!(from, point(0.0, 0.0));
            assert!((ctrl1 - point(2.0, 2.0)).length() < 1e-5);
            assert!((ctrl2 - point(4.0, 2.0)).length() < 1e-5);
            assert_eq!(to, point(6.0, 0.0));
        }
        evt => panic!("unexpected event {:?}", evt),
    }
    match it.next() {
        Some(PathEvent::Cubic {
            ctrl1, ctrl2, to, ..
        }) => {
            // The reflected control point is (9, -3).
            assert!((ctrl1 - point(8.0, -2.0)).length() < 1e-5);
            assert!((ctrl2 - point(10.0, -2.0)).length() < 1e-5);
            assert_eq!(to, point(12.0, 0.0));
        }
        evt => panic!("unexpected event {:?}", evt),
    }
}

#[test]
fn commands_after_close() {
    let path = Path::parse("M 1 1 L 2 1 Z L 1 2 z l 5 5 Z 3 3").unwrap();
    assert_eq!(
        path.to_string(),
        "M 1 1 L 2 1 Z M 1 1 L 1 2 Z M 1 1 L 6 6 Z M 3 3"
    );
}

#[test]
fn compact_syntax() {
    let path = Path::parse("M0.6.5L1-1e1").unwrap();
    assert_eq!(path.to_string(), "M 0.6 0.5 L 1 -10");
}

#[test]
fn invalid_cmd() {
    let result = Path::parse("x 0 0 0").err().unwrap();
    assert_eq!(
        result,
        ParseError::Command {
            command: 'x',
            line: 0,
            column: 0
        }
    );

    let result = Path::parse("\n M 0 \n0 x 1 1 1").err().unwrap();
    assert_eq!(
        result,
        ParseError::Command {
            command: 'x',
            line: 2,
            column: 2
        }
    );

    // After a move, a number starts an implicit line whose y coordinate is missing here.
    let result = Path::parse("\n M 0 \n0 1 x 1 1 1").err().unwrap();
    assert!(matches!(
        result,
        ParseError::Number {
            line: 2,
            column: 4,
            ..
        }
    ));

    assert!(matches!(
        Path::parse("M 0 0 A 1 1 0 0 0 2 2"),
        Err(ParseError::Command { command: 'A', .. })
    ));
}

#[test]
fn number_scientific_notation() {
    let path = Path::parse("M 1e-2 -1E3 L 1.5e+2 2").unwrap();
    assert_eq!(path.to_string(), "M 0.01 -1000 L 150 2");
}

#[test]
fn bad_numbers() {
    let bad_number = |src: &str| match Path::parse(src) {
        Err(ParseError::Number { .. }) => true,
        r => {
            println!("{:?}", r);
            false
        }
    };

    assert!(bad_number("M 0 --1"));
    assert!(bad_number("M 0 1ee2"));
    assert!(bad_number("M 0 1e--1"));
    assert!(bad_number("M 0 *2"));
    assert!(bad_number("M 0 e"));
    assert!(bad_number("M 0 1e"));
    assert!(bad_number("M 0"));
    assert!(bad_number("M 0 0 L 1"));
}

#[test]
fn error_message() {
    let err = Path::parse("M 0 0 L 1 ?").err().unwrap();
    assert_eq!(
        err.to_string(),
        "Line 0 Column 10: Expected number, got \"\"."
    );
}

#[test]
fn print_parse_round_trip() {
    let mut builder = Path::builder();
    builder.move_to(point(0.1, 0.2));
    builder.cubic_bezier_to(point(1e-7, -3.5), point(123456.79, 0.3), point(-0.0, 7.0));
    builder.close();
    builder.add_circle(point(3.0, 4.0), 5.0);
    builder.move_to(point(1.0, 1.0));
    let path = builder.build();

    let printed = path.to_string();
    let parsed: Path = printed.parse().unwrap();
    assert_eq!(parsed, path);
    assert_eq!(parsed.to_string(), printed);
}

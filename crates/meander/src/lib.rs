#![deny(bare_trait_objects)]

//! 2D path geometry and arc-length measurement.
//!
//! # Crates
//!
//! This meta-crate (`meander`) reexports the following sub-crates for convenience:
//!
//! * **meander_path** - Tools to build, print, parse and iterate over paths.
//! * **meander_algorithms** - Cached path measurements: length, sampling, closest point
//!   queries and segment extraction.
//! * **meander_geom** - 2d utilities for line segments and cubic bézier curves, including
//!   curve flattening.
//!
//! Each `meander_<name>` crate is reexported as a `<name>` module in `meander`. For example:
//!
//! ```ignore
//! extern crate meander_algorithms;
//! use meander_algorithms::measure::PathMeasure;
//! ```
//!
//! Is equivalent to:
//!
//! ```ignore
//! extern crate meander;
//! use meander::measure::PathMeasure;
//! ```
//!
//! # Feature flags
//!
//! serialization using serde can be enabled on each crate using the
//! `serialization` feature flag (disabled by default).
//!
//! # Examples
//!
//! ## Building and measuring a path
//!
//! ```
//! use meander::math::{point, rect};
//! use meander::path::Path;
//! use meander::measure::PathMeasure;
//!
//! let mut builder = Path::builder();
//! builder.move_to(point(0.0, 0.0));
//! builder.line_to(point(10.0, 0.0));
//! builder.cubic_bezier_to(point(15.0, 0.0), point(15.0, 10.0), point(10.0, 10.0));
//! builder.close();
//! builder.add_rectangle(&rect(20.0, 0.0, 5.0, 5.0));
//! let path = builder.build();
//!
//! let measure = PathMeasure::with_tolerance(&path, 0.01);
//! println!("length: {}", measure.length());
//!
//! // A point halfway along the path.
//! let sample = measure.sample(measure.length() * 0.5).unwrap();
//! println!("position: {:?}, tangent: {:?}", sample.position(), sample.tangent());
//!
//! // The point of the path closest to (5, -5).
//! let closest = measure.closest_point(point(5.0, -5.0), f32::INFINITY).unwrap();
//! assert!((closest.distance() - 5.0).abs() < 0.01);
//! assert!((closest.offset() - 5.0).abs() < 0.01);
//!
//! // Extract the first 5 units of the path.
//! let mut builder = Path::builder();
//! measure.add_segment(0.0..5.0, &mut builder);
//! assert_eq!(builder.build().to_string(), "M 0 0 L 5 0");
//! ```
//!
//! ## Printing and parsing
//!
//! ```
//! use meander::path::Path;
//!
//! let path: Path = "M 0 0 H 10 l 0 10 z".parse().unwrap();
//! assert_eq!(path.to_string(), "M 0 0 L 10 0 L 10 10 Z");
//! assert_eq!(path.num_contours(), 1);
//! ```

pub extern crate meander_algorithms;

pub use meander_algorithms::geom;
pub use meander_algorithms::math;
pub use meander_algorithms::path;
pub use meander_algorithms::{length, measure};

#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![allow(clippy::match_like_matches_macro)]

//! Data structures and traits to work with paths.
//!
//! A [`Path`] is an immutable sequence of contours. Each contour starts with a point and is
//! made of line segments and cubic bézier curves, and is optionally closed. To build paths,
//! see the [builder](builder/index.html) module. Paths can be printed to and parsed from an
//! SVG-like textual representation.
//!
//! This crate is reexported in [meander](https://docs.rs/meander/).
//!
//! # Examples
//!
//! ```
//! # extern crate meander_path;
//! # fn main() {
//! use meander_path::Path;
//! use meander_path::math::point;
//!
//! // Create a builder object to build the path.
//! let mut builder = Path::builder();
//!
//! // Build a simple path.
//! builder.move_to(point(0.0, 0.0));
//! builder.line_to(point(1.0, 2.0));
//! builder.line_to(point(2.0, 0.0));
//! builder.cubic_bezier_to(point(2.0, 1.0), point(1.0, 1.5), point(1.0, 1.0));
//! builder.close();
//!
//! // Generate the actual path object.
//! let path = builder.build();
//!
//! assert_eq!(path.to_string(), "M 0 0 L 1 2 L 2 0 C 2 1 1 1.5 1 1 Z");
//!
//! for event in &path {
//!     println!("{:?}", event);
//! }
//! # }
//! ```
//!

pub use meander_geom as geom;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

pub mod builder;
mod events;
pub mod parser;
pub mod path;

#[doc(hidden)]
pub mod private;

pub use crate::events::*;
#[doc(inline)]
pub use crate::parser::ParseError;
#[doc(inline)]
pub use crate::path::{Contour, Path, Segment};

pub mod traits {
    //! `meander_path` traits reexported here for convenience.

    pub use crate::builder::Build;
    pub use crate::builder::PathBuilder;
}

pub mod math {
    //! f32 version of the meander_geom types used everywhere. Most other meander crates
    //! reexport them.

    use crate::geom::euclid;

    /// Alias for ```euclid::default::Point2D<f32>```.
    pub type Point = euclid::default::Point2D<f32>;

    /// Alias for ```euclid::default::Vector2D<f32>```.
    pub type Vector = euclid::default::Vector2D<f32>;

    /// Alias for ```euclid::default::Size2D<f32>```.
    pub type Size = euclid::default::Size2D<f32>;

    /// Alias for ```euclid::default::Rect<f32>```
    pub type Rect = euclid::default::Rect<f32>;

    /// Alias for ```euclid::default::Box2D<f32>```
    pub type Box2D = euclid::default::Box2D<f32>;

    /// Shorthand for `Rect::new(Point::new(x, y), Size::new(w, h))`.
    #[inline]
    pub fn rect(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect {
            origin: point(x, y),
            size: size(w, h),
        }
    }

    /// Shorthand for `Vector::new(x, y)`.
    #[inline]
    pub fn vector(x: f32, y: f32) -> Vector {
        Vector::new(x, y)
    }

    /// Shorthand for `Point::new(x, y)`.
    #[inline]
    pub fn point(x: f32, y: f32) -> Point {
        Point::new(x, y)
    }

    /// Shorthand for `Size::new(x, y)`.
    #[inline]
    pub fn size(w: f32, h: f32) -> Size {
        Size::new(w, h)
    }
}

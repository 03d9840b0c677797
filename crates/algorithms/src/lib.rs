#![deny(bare_trait_objects)]
#![allow(clippy::float_cmp)]
#![no_std]

//! 2d path measurement algorithms.
//!
//! This crate is reexported in [meander](https://docs.rs/meander/).

extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

pub extern crate meander_path as path;

pub mod length;
pub mod measure;

pub use crate::path::geom;
pub use crate::path::math;

//!
//! # Decomposed 2D affine transformations
//!
//! A `Transformation` describes where a layer sits in its parent as an offset, a rotation angle,
//! a skew angle and a pair of scale factors. These are the values a user edits; for drawing they
//! are converted to a 3x3 `Matrix`, which is what is used to map points, directions and bounding
//! boxes and to compose transformations together.
//!
//! Matrices use the row-vector convention: a point is transformed as `point * matrix`, the
//! translation lives in the bottom row and in the product `a * b` the transformation `a` is
//! applied first.
//!
//! The supporting `Vector`, `Angle` and `Rect` types are deliberately small: they provide only
//! what the transformation needs.
//!
#![warn(bare_trait_objects)]

#[macro_use]
extern crate serde_derive;
extern crate serde;

#[macro_use]
extern crate log;

pub mod consts;

mod angle;
mod vector;
mod matrix;
mod rect;
mod error;
mod transformation;

pub use self::angle::*;
pub use self::vector::*;
pub use self::matrix::*;
pub use self::rect::*;
pub use self::error::*;
pub use self::transformation::*;

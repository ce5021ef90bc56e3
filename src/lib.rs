//! Generic two dimensional geometry: vectors, points and axis aligned rectangles over any
//! primitive numeric type, plus a handful of scalar helpers.

/// Errors returned by the checked geometric operations.
pub mod error;
/// Module containing the 2D value types: Vectors, Points and Rectangles.
pub mod geometry;
/// Module containing scalar functions and the numeric trait every geometric type is built upon.
pub mod utility;

pub use self::error::{GeometryError, Result};
pub use self::geometry::{Point, Rect, Vector};
pub use self::utility::Scalar;

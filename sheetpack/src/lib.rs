//! Packing of (oriented bounding) rectangles onto a sheet using a binary space partition tree.
//!
//! The [`partition`] module holds the guillotine tree, [`packing`] drives a single packing trial over it.
//! Shapes are reduced to rectangles through [`geometry::obb`].

pub mod error;
pub mod geometry;
pub mod packing;
pub mod partition;
pub mod util;

#[doc(inline)]
pub use error::PackError;

/// Tolerance used to decide whether a rectangle fits a region, and whether it fits it exactly.
/// Applied as is up to unit coordinates, scaled by the largest coordinate beyond that (see [`Rect::tolerance`](geometry::primitives::Rect::tolerance)).
pub const TOL_ZERO: f64 = 1e-12;

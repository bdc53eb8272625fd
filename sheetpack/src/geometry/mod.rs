pub mod convex_hull;
pub mod geo_enums;
pub mod geo_traits;
pub mod obb;
pub mod primitives;
mod transformation;

#[doc(inline)]
pub use obb::Obb;
#[doc(inline)]
pub use transformation::Transformation;

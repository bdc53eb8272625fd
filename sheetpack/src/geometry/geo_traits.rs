use crate::geometry::Transformation;
use crate::geometry::primitives::Rect;

/// Trait for types that can be modified by a [`Transformation`].
pub trait Transformable: Clone {
    /// Applies a transformation to `self`.
    fn transform(&mut self, t: &Transformation) -> &mut Self;

    /// Applies a transformation to a clone.
    fn transform_clone(&self, t: &Transformation) -> Self {
        let mut clone = self.clone();
        clone.transform(t);
        clone
    }
}

/// Trait for shared properties of geometric primitives.
pub trait Shape {
    /// Area of the interior of the shape
    fn area(&self) -> f64;

    /// Axis-aligned bounding box of the shape
    fn bbox(&self) -> Rect;
}

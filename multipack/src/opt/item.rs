use sheetpack::PackError;
use sheetpack::geometry::Obb;
use sheetpack::geometry::primitives::{RectSize, SPolygon};

/// A shape to be packed, reduced to its oriented bounding box.
#[derive(Clone, Debug, PartialEq)]
pub struct PackItem {
    pub obb: Obb,
    /// Area of the original shape, at most the area of its bounding box
    pub area: f64,
}

impl PackItem {
    pub fn new(obb: Obb, area: f64) -> Self {
        Self { obb, area }
    }

    /// An axis-aligned rectangle anchored at the origin, needing no alignment.
    pub fn from_size(size: RectSize) -> Self {
        Self {
            obb: Obb::from_size(size),
            area: size.area(),
        }
    }

    pub fn from_polygon(shape: &SPolygon) -> Result<Self, PackError> {
        let obb = Obb::from_polygon(shape)
            .map_err(|e| PackError::InvalidInput(format!("{e:#}")))?;
        Ok(Self {
            obb,
            area: shape.area,
        })
    }

    pub fn size(&self) -> RectSize {
        self.obb.size
    }
}

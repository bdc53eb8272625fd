use anyhow::{Result, anyhow, ensure};
use itertools::Itertools;
use ordered_float::OrderedFloat;

use crate::geometry::Transformation;
use crate::geometry::convex_hull::convex_hull_from_points;
use crate::geometry::geo_traits::Transformable;
use crate::geometry::primitives::{Point, RectSize, SPolygon};

/// Oriented bounding box of a shape.
///
/// `transform` maps the shape from its own frame onto the axes,
/// such that the box occupies `[0, width] x [0, height]`.
#[derive(Clone, Debug, PartialEq)]
pub struct Obb {
    pub size: RectSize,
    pub transform: Transformation,
}

impl Obb {
    /// A shape that already is an axis-aligned rectangle anchored at the origin.
    pub fn from_size(size: RectSize) -> Self {
        Self {
            size,
            transform: Transformation::empty(),
        }
    }

    pub fn from_polygon(shape: &SPolygon) -> Result<Self> {
        min_area_obb(&shape.vertices)
    }
}

/// Computes the minimum-area enclosing rectangle of a set of points.
///
/// One side of the minimum-area rectangle is always collinear with an edge of the convex hull,
/// so every hull edge is tried as the x-axis. Ties keep the first edge encountered.
pub fn min_area_obb(points: &[Point]) -> Result<Obb> {
    let hull = convex_hull_from_points(points.to_vec());
    ensure!(
        hull.len() >= 3,
        "cannot compute a bounding box of a degenerate point set: {points:?}"
    );

    let (angle, bbox) = hull
        .iter()
        .circular_tuple_windows()
        .map(|(a, b)| {
            let angle = -f64::atan2(b.1 - a.1, b.0 - a.0);
            let rotation = Transformation::from_rotation(angle);
            let rotated = hull.iter().map(|p| p.transform_clone(&rotation)).collect_vec();
            (angle, SPolygon::generate_bounding_box(&rotated))
        })
        .min_by_key(|(_, bbox)| OrderedFloat(bbox.area()))
        .ok_or_else(|| anyhow!("convex hull has no edges"))?;

    let transform = Transformation::empty()
        .rotate(angle)
        .translate((-bbox.x_min, -bbox.y_min));

    Ok(Obb {
        size: bbox.size(),
        transform,
    })
}

use itertools::Itertools;

use anyhow::{Result, bail};

use crate::geometry::Transformation;
use crate::geometry::geo_traits::{Shape, Transformable};
use crate::geometry::primitives::Point;
use crate::geometry::primitives::Rect;

/// A Simple Polygon is a polygon that does not intersect itself and contains no holes.
/// [read more](https://en.wikipedia.org/wiki/Simple_polygon)
#[derive(Clone, Debug)]
pub struct SPolygon {
    /// Set of points that form the polygon, ordered counterclockwise
    pub vertices: Vec<Point>,
    /// Bounding box
    pub bbox: Rect,
    /// Area of its interior
    pub area: f64,
}

impl SPolygon {
    pub fn new(mut points: Vec<Point>) -> Result<Self> {
        if points.len() < 3 {
            bail!("simple polygon must have at least 3 points: {points:?}");
        }
        if points.iter().unique().count() != points.len() {
            bail!("simple polygon should not contain duplicate points: {points:?}");
        }
        if points.iter().any(|p| !p.0.is_finite() || !p.1.is_finite()) {
            bail!("simple polygon contains non-finite coordinates: {points:?}");
        }

        let area = match SPolygon::calculate_area(&points) {
            area if area == 0.0 => bail!("simple polygon has no area: {points:?}"),
            area if area < 0.0 => {
                //vertices should always be ordered counterclockwise (positive area)
                points.reverse();
                -area
            }
            area => area,
        };

        let bbox = SPolygon::generate_bounding_box(&points);

        Ok(SPolygon {
            vertices: points,
            bbox,
            area,
        })
    }

    pub fn vertex(&self, i: usize) -> Point {
        self.vertices[i]
    }

    pub fn n_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn generate_bounding_box(points: &[Point]) -> Rect {
        let (mut x_min, mut y_min) = (f64::MAX, f64::MAX);
        let (mut x_max, mut y_max) = (f64::MIN, f64::MIN);

        for point in points.iter() {
            x_min = x_min.min(point.0);
            y_min = y_min.min(point.1);
            x_max = x_max.max(point.0);
            y_max = y_max.max(point.1);
        }
        Rect {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    //https://en.wikipedia.org/wiki/Shoelace_formula
    //counterclockwise = positive area, clockwise = negative area
    pub fn calculate_area(points: &[Point]) -> f64 {
        let mut sigma: f64 = 0.0;
        for i in 0..points.len() {
            //next point
            let j = (i + 1) % points.len();

            let (x_i, y_i) = points[i].into();
            let (x_j, y_j) = points[j].into();

            sigma += (y_i + y_j) * (x_i - x_j)
        }

        0.5 * sigma
    }
}

impl Shape for SPolygon {
    fn area(&self) -> f64 {
        self.area
    }

    fn bbox(&self) -> Rect {
        self.bbox
    }
}

impl Transformable for SPolygon {
    fn transform(&mut self, t: &Transformation) -> &mut Self {
        let SPolygon {
            vertices,
            bbox,
            area,
        } = self;

        vertices.iter_mut().for_each(|v| {
            v.transform(t);
        });

        *bbox = SPolygon::generate_bounding_box(vertices);
        //rigid transformations preserve the area, scaling does not
        *area = SPolygon::calculate_area(vertices).abs();

        self
    }
}

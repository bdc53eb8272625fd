#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use float_cmp::approx_eq;
    use test_case::test_case;

    use sheetpack::geometry::geo_traits::{Shape, Transformable};
    use sheetpack::geometry::obb::min_area_obb;
    use sheetpack::geometry::primitives::{Point, RectSize, SPolygon};
    use sheetpack::geometry::{Obb, Transformation};

    fn rectangle_polygon(width: f64, height: f64) -> SPolygon {
        SPolygon::new(vec![
            Point(0.0, 0.0),
            Point(width, 0.0),
            Point(width, height),
            Point(0.0, height),
        ])
        .unwrap()
    }

    fn assert_within_obb(shape: &SPolygon, obb: &Obb) {
        let aligned = shape.transform_clone(&obb.transform);
        let bbox = aligned.bbox();
        assert!(approx_eq!(f64, bbox.x_min, 0.0, epsilon = 1e-9), "{bbox:?}");
        assert!(approx_eq!(f64, bbox.y_min, 0.0, epsilon = 1e-9), "{bbox:?}");
        assert!(approx_eq!(f64, bbox.x_max, obb.size.width, epsilon = 1e-9), "{bbox:?}");
        assert!(approx_eq!(f64, bbox.y_max, obb.size.height, epsilon = 1e-9), "{bbox:?}");
    }

    #[test]
    fn clockwise_polygon_is_reoriented() {
        let cw = SPolygon::new(vec![
            Point(0.0, 0.0),
            Point(0.0, 2.0),
            Point(3.0, 2.0),
            Point(3.0, 0.0),
        ])
        .unwrap();

        assert_eq!(cw.area(), 6.0);
        assert!(SPolygon::calculate_area(&cw.vertices) > 0.0);
    }

    #[test_case(vec![Point(0.0, 0.0), Point(1.0, 0.0)]; "too few points")]
    #[test_case(vec![Point(0.0, 0.0), Point(1.0, 0.0), Point(2.0, 0.0)]; "no area")]
    #[test_case(vec![Point(0.0, 0.0), Point(1.0, 0.0), Point(1.0, 0.0), Point(0.0, 1.0)]; "duplicate point")]
    fn invalid_polygon_is_rejected(points: Vec<Point>) {
        assert!(SPolygon::new(points).is_err());
    }

    #[test]
    fn obb_of_axis_aligned_rectangle() {
        let shape = rectangle_polygon(4.0, 2.0);
        let obb = Obb::from_polygon(&shape).unwrap();

        assert!(approx_eq!(f64, obb.size.area(), 8.0, epsilon = 1e-9));
        assert_within_obb(&shape, &obb);
    }

    #[test_case(PI / 6.0; "30 degrees")]
    #[test_case(PI / 4.0; "45 degrees")]
    #[test_case(-1.0; "minus one radian")]
    fn obb_of_rotated_rectangle(angle: f64) {
        let placement = Transformation::from_rotation(angle).translate((13.0, -7.0));
        let shape = rectangle_polygon(4.0, 2.0).transform_clone(&placement);
        let obb = Obb::from_polygon(&shape).unwrap();

        assert!(approx_eq!(f64, obb.size.area(), 8.0, epsilon = 1e-9));
        let (long, short) = match obb.size.width > obb.size.height {
            true => (obb.size.width, obb.size.height),
            false => (obb.size.height, obb.size.width),
        };
        assert!(approx_eq!(f64, long, 4.0, epsilon = 1e-9));
        assert!(approx_eq!(f64, short, 2.0, epsilon = 1e-9));
        assert_within_obb(&shape, &obb);
    }

    #[test]
    fn obb_of_triangle_contains_it() {
        let shape = SPolygon::new(vec![Point(0.0, 0.0), Point(5.0, 1.0), Point(2.0, 4.0)]).unwrap();
        let obb = Obb::from_polygon(&shape).unwrap();

        assert!(obb.size.area() >= shape.area());
        assert_within_obb(&shape, &obb);
    }

    #[test]
    fn obb_of_collinear_points_fails() {
        let points = [Point(0.0, 0.0), Point(1.0, 1.0), Point(2.0, 2.0)];
        assert!(min_area_obb(&points).is_err());
    }

    #[test]
    fn scale_is_applied_after_rotation() {
        let t = Transformation::from_rotation(PI / 2.0).scale(2.0).translate((1.0, 0.0));
        let p = Point(1.0, 0.0).transform_clone(&t);

        assert!(approx_eq!(f64, p.0, 1.0, epsilon = 1e-9));
        assert!(approx_eq!(f64, p.1, 2.0, epsilon = 1e-9));
    }

    #[test]
    fn translation_is_applied_after_existing_transformation() {
        let t = Transformation::empty().scale(2.0).translate((1.0, 1.0));
        assert_eq!(Point(1.0, 2.0).transform_clone(&t), Point(3.0, 5.0));
        assert_eq!(
            t.to_array(),
            [[2.0, 0.0, 1.0], [0.0, 2.0, 1.0], [0.0, 0.0, 1.0]]
        );
    }

    #[test]
    fn composed_transformations_apply_in_call_order() {
        let t = Transformation::empty()
            .rotate(PI / 2.0)
            .transform(&Transformation::empty().translate((1.0, 0.0)));
        let p = Point(1.0, 0.0).transform_clone(&t);

        assert!(approx_eq!(f64, p.0, 1.0, epsilon = 1e-9));
        assert!(approx_eq!(f64, p.1, 1.0, epsilon = 1e-9));
    }

    #[test]
    fn default_is_identity() {
        let p = Point(2.5, -4.0);
        assert_eq!(Transformation::default(), Transformation::empty());
        assert_eq!(p.transform_clone(&Transformation::default()), p);
    }

    #[test]
    fn inflate_then_deflate_is_identity() {
        let size = RectSize::new(3.75, 10.5);
        assert_eq!(size.inflate(0.25).deflate(0.25), size);
        assert_eq!(size.inflate(0.25), RectSize::new(4.25, 11.0));
    }
}

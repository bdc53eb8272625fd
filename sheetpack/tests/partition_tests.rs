#[cfg(test)]
mod tests {
    use rand::prelude::SmallRng;
    use rand::{Rng, SeedableRng};
    use test_case::test_case;

    use sheetpack::geometry::primitives::{Point, Rect, RectSize};
    use sheetpack::packing::size_descending_order;
    use sheetpack::partition::{NodeState, PartitionTree};
    use sheetpack::util::assertions;

    fn bbox(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Rect {
        Rect::try_new(x_min, y_min, x_max, y_max).unwrap()
    }

    fn children_bboxes(tree: &PartitionTree, key: sheetpack::partition::NodeKey) -> [Rect; 2] {
        let [near, far] = tree.node(key).children().expect("node should be split");
        [tree.node(near).bbox, tree.node(far).bbox]
    }

    #[test]
    fn exact_fit_occupies_root_without_split() {
        let mut tree = PartitionTree::new(RectSize::new(10.0, 10.0));

        assert_eq!(tree.insert(RectSize::new(10.0, 10.0)), Some(Point(0.0, 0.0)));
        assert_eq!(tree.node(tree.root()).state, NodeState::Occupied);
        assert_eq!(tree.n_nodes(), 1);

        //an occupied leaf never accepts a second rectangle
        assert_eq!(tree.insert(RectSize::new(1.0, 1.0)), None);
    }

    #[test]
    fn too_large_rectangle_leaves_tree_untouched() {
        let mut tree = PartitionTree::new(RectSize::new(4.0, 4.0));

        assert_eq!(tree.insert(RectSize::new(5.0, 5.0)), None);
        assert_eq!(tree.insert(RectSize::new(4.0, 4.1)), None);
        assert_eq!(tree.node(tree.root()).state, NodeState::Free);
        assert_eq!(tree.n_nodes(), 1);
    }

    #[test]
    fn stacks_along_the_axis_with_leftover() {
        let mut tree = PartitionTree::new(RectSize::new(10.0, 30.0));
        let square = RectSize::new(10.0, 10.0);

        assert_eq!(tree.insert(square), Some(Point(0.0, 0.0)));
        assert_eq!(tree.insert(square), Some(Point(0.0, 10.0)));
        assert_eq!(tree.insert(square), Some(Point(0.0, 20.0)));
        assert_eq!(tree.insert(square), None);
        assert_eq!(tree.free_leaves().count(), 0);
    }

    #[test]
    fn cuts_along_axis_with_largest_margin() {
        let mut tree = PartitionTree::new(RectSize::new(100.0, 10.0));
        assert_eq!(tree.insert(RectSize::new(10.0, 5.0)), Some(Point(0.0, 0.0)));

        //horizontal margin (90) dominates: first cut is vertical at x = 10
        let root = tree.root();
        assert_eq!(
            children_bboxes(&tree, root),
            [bbox(0.0, 0.0, 10.0, 10.0), bbox(10.0, 0.0, 100.0, 10.0)]
        );

        //the near child is cut a second time, perpendicular to the first cut
        let [near, far] = tree.node(root).children().unwrap();
        assert_eq!(
            children_bboxes(&tree, near),
            [bbox(0.0, 0.0, 10.0, 5.0), bbox(0.0, 5.0, 10.0, 10.0)]
        );
        assert_eq!(tree.node(far).state, NodeState::Free);
    }

    #[test]
    fn equal_margins_cut_horizontally() {
        let mut tree = PartitionTree::new(RectSize::new(20.0, 20.0));
        tree.insert(RectSize::new(10.0, 10.0));

        let root = tree.root();
        assert_eq!(
            children_bboxes(&tree, root),
            [bbox(0.0, 0.0, 20.0, 10.0), bbox(0.0, 10.0, 20.0, 20.0)]
        );
    }

    #[test]
    fn split_regions_are_filled_first() {
        let mut tree = PartitionTree::new(RectSize::new(100.0, 10.0));

        assert_eq!(tree.insert(RectSize::new(10.0, 5.0)), Some(Point(0.0, 0.0)));
        //fits in the leftover of the near child, which is searched before the far strip
        assert_eq!(tree.insert(RectSize::new(10.0, 5.0)), Some(Point(0.0, 5.0)));
        assert_eq!(tree.insert(RectSize::new(90.0, 10.0)), Some(Point(10.0, 0.0)));
        assert_eq!(tree.insert(RectSize::new(1.0, 1.0)), None);
    }

    #[test]
    fn rectangle_within_tolerance_is_an_exact_fit() {
        let mut tree = PartitionTree::new(RectSize::new(0.3, 0.3));
        //0.1 + 0.2 != 0.3 in floating point
        let size = RectSize::new(0.1 + 0.2, 0.3);

        assert_eq!(tree.insert(size), Some(Point(0.0, 0.0)));
        assert_eq!(tree.n_nodes(), 1);
    }

    #[test]
    fn cut_at_large_coordinate_is_not_repeated() {
        let mut tree = PartitionTree::new(RectSize::new(200000.0, 10.0));

        //100000.1 is rounded when measured back from the cut, leaving a phantom margin
        assert_eq!(tree.insert(RectSize::new(100000.1, 10.0)), Some(Point(0.0, 0.0)));
        assert_eq!(tree.n_nodes(), 3);
        assert_eq!(tree.insert(RectSize::new(0.3, 10.0)), Some(Point(100000.1, 0.0)));
        assert_eq!(tree.n_nodes(), 5);
        assert!(assertions::tree_is_consistent(&tree));
    }

    #[test]
    fn near_child_keeps_rectangle_despite_rounding() {
        let mut tree = PartitionTree::new(RectSize::new(300000.0, 20.0));
        assert_eq!(tree.insert(RectSize::new(100000.1, 20.0)), Some(Point(0.0, 0.0)));

        //cut at 100000.1 + 0.7, the near child may come out narrower than 0.7 after rounding
        let offset = tree.insert(RectSize::new(0.7, 10.0));
        assert_eq!(offset, Some(Point(100000.1, 0.0)));
        assert_eq!(tree.occupied_leaves().count(), 2);
        assert!(assertions::tree_is_consistent(&tree));
    }

    #[test_case(0, 1.0; "seed 0, derived sheet")]
    #[test_case(1, 1.0; "seed 1, derived sheet")]
    #[test_case(42, 1.0; "seed 42, derived sheet")]
    #[test_case(7, 0.25; "seed 7, quarter sheet")]
    #[test_case(13, 0.25; "seed 13, quarter sheet")]
    fn mm_scale_insertions_keep_tree_consistent(seed: u64, width_fraction: f64) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let rects = (0..300)
            .map(|_| RectSize::new(rng.random_range(10.0..=1000.0), rng.random_range(10.0..=1000.0)))
            .collect::<Vec<_>>();
        let sheet = RectSize::new(
            width_fraction * rects.iter().map(|r| r.width).sum::<f64>(),
            2.0 * rects.iter().map(|r| r.height).fold(0.0, f64::max),
        );

        let mut tree = PartitionTree::new(sheet);
        let mut offsets = vec![None; rects.len()];
        for i in size_descending_order(&rects) {
            offsets[i] = tree.insert(rects[i]);
        }

        assert!(offsets.iter().any(Option::is_some));
        assert!(assertions::tree_is_consistent(&tree));
        assert!(assertions::leaves_match_placements(&tree, &rects, &offsets));
        assert!(assertions::placements_are_disjoint(&rects, &offsets));
        assert!(assertions::placements_within_sheet(&rects, &offsets, sheet));

        //free leaves only shrink, so a rectangle that was turned away fits none of them
        for (r, _) in rects.iter().zip(&offsets).filter(|(_, o)| o.is_none()) {
            assert!(!tree.free_leaves().any(|leaf| leaf.bbox.size().fits(r)), "{r:?}");
        }
    }

    #[test_case(0; "seed 0")]
    #[test_case(1; "seed 1")]
    #[test_case(42; "seed 42")]
    fn random_insertions_keep_tree_consistent(seed: u64) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let sheet = RectSize::new(100.0, 60.0);
        let mut tree = PartitionTree::new(sheet);

        let rects = (0..200)
            .map(|_| RectSize::new(rng.random_range(1.0..=20.0), rng.random_range(1.0..=20.0)))
            .collect::<Vec<_>>();
        let offsets = rects.iter().map(|r| tree.insert(*r)).collect::<Vec<_>>();

        assert!(offsets.iter().any(Option::is_some));
        assert!(assertions::tree_is_consistent(&tree));
        assert!(assertions::leaves_match_placements(&tree, &rects, &offsets));
        assert!(assertions::placements_are_disjoint(&rects, &offsets));
        assert!(assertions::placements_within_sheet(&rects, &offsets, sheet));
    }
}

use float_cmp::approx_eq;
use itertools::Itertools;
use log::error;

use crate::geometry::primitives::{Point, Rect, RectSize};
use crate::partition::{NodeState, PartitionTree};

//Various checks to verify correctness of the state of the system
//Used in debug_assertion!() blocks and tests

const EPSILON: f64 = 1e-9;

/// Every split node is cut into two children which tile it exactly.
pub fn tree_is_consistent(tree: &PartitionTree) -> bool {
    for (key, node) in tree.nodes() {
        if let NodeState::Split { near, far } = node.state {
            let (near, far) = (tree.node(near).bbox, tree.node(far).bbox);
            let parent = node.bbox;

            if near.overlaps(&far) {
                error!("children of node {key:?} overlap: {near:?} and {far:?}");
                return false;
            }
            if !parent.contains(&near) || !parent.contains(&far) {
                error!("children of node {key:?} exceed their parent {parent:?}");
                return false;
            }
            let union = Rect::bounding_rect(near, far);
            let tiles_exactly = rects_almost_equal(&union, &parent)
                && approx_eq!(
                    f64,
                    near.area() + far.area(),
                    parent.area(),
                    epsilon = EPSILON * parent.area().max(1.0)
                );
            if !tiles_exactly {
                error!("children of node {key:?} do not tile their parent {parent:?}: {near:?} and {far:?}");
                return false;
            }
        }
    }
    true
}

/// Every occupied leaf corresponds to exactly one placed rectangle of the same size.
pub fn leaves_match_placements(
    tree: &PartitionTree,
    rects: &[RectSize],
    offsets: &[Option<Point>],
) -> bool {
    let placed = placed_rects(rects, offsets).collect_vec();
    let leaves = tree.occupied_leaves().map(|n| n.bbox).collect_vec();

    if placed.len() != leaves.len() {
        error!(
            "{} rectangles were placed, but the tree has {} occupied leaves",
            placed.len(),
            leaves.len()
        );
        return false;
    }
    placed.iter().all(|p| {
        let matched = leaves.iter().any(|l| rects_almost_equal(p, l));
        if !matched {
            error!("placed rectangle {p:?} has no matching leaf");
        }
        matched
    })
}

/// No two placed rectangles overlap, touching edges are allowed.
pub fn placements_are_disjoint(rects: &[RectSize], offsets: &[Option<Point>]) -> bool {
    placed_rects(rects, offsets)
        .tuple_combinations()
        .all(|(a, b)| match a.overlaps(&b) {
            true => {
                error!("placed rectangles overlap: {a:?} and {b:?}");
                false
            }
            false => true,
        })
}

/// All placed rectangles lie within `[0, 0] x sheet`.
pub fn placements_within_sheet(
    rects: &[RectSize],
    offsets: &[Option<Point>],
    sheet: RectSize,
) -> bool {
    let sheet = Rect::from_origin_size(Point(0.0, 0.0), sheet);
    placed_rects(rects, offsets).all(|r| match sheet.contains(&r) {
        true => true,
        false => {
            error!("placed rectangle {r:?} exceeds the sheet {sheet:?}");
            false
        }
    })
}

fn placed_rects<'a>(
    rects: &'a [RectSize],
    offsets: &'a [Option<Point>],
) -> impl Iterator<Item = Rect> + Clone + 'a {
    rects
        .iter()
        .zip(offsets)
        .filter_map(|(r, o)| o.map(|o| Rect::from_origin_size(o, *r)))
}

fn rects_almost_equal(a: &Rect, b: &Rect) -> bool {
    let epsilon = EPSILON * a.magnitude().max(b.magnitude()).max(1.0);
    approx_eq!(f64, a.x_min, b.x_min, epsilon = epsilon)
        && approx_eq!(f64, a.y_min, b.y_min, epsilon = epsilon)
        && approx_eq!(f64, a.x_max, b.x_max, epsilon = epsilon)
        && approx_eq!(f64, a.y_max, b.y_max, epsilon = epsilon)
}

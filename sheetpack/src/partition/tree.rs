use slotmap::{SlotMap, new_key_type};

use crate::geometry::geo_enums::Cut;
use crate::geometry::primitives::{Point, Rect, RectSize};
use crate::partition::{NodeState, PartitionNode};

new_key_type! {
    /// Unique key for each [`PartitionNode`] in a [`PartitionTree`]
    pub struct NodeKey;
}

/// Binary space partition of a sheet. Rectangles are inserted one by one,
/// every insertion carves out a region of exactly the rectangle's size with (at most two) guillotine cuts.
///
/// All nodes live in an arena owned by the tree, which is dropped as a whole once packing is done.
/// Based on <http://www.blackpawn.com/texts/lightmaps/>
#[derive(Clone, Debug)]
pub struct PartitionTree {
    nodes: SlotMap<NodeKey, PartitionNode>,
    root: NodeKey,
}

impl PartitionTree {
    /// Creates a tree with a single free node spanning `[0, 0] x sheet`.
    pub fn new(sheet: RectSize) -> Self {
        let mut nodes = SlotMap::with_key();
        let root = nodes.insert(PartitionNode::new(Rect::from_origin_size(
            Point(0.0, 0.0),
            sheet,
        )));
        Self { nodes, root }
    }

    /// Inserts a rectangle anywhere in the sheet.
    /// Returns the position of its bottom left corner, or `None` if no free region can hold it.
    pub fn insert(&mut self, size: RectSize) -> Option<Point> {
        self.insert_at(self.root, size)
    }

    /// Inserts a rectangle in the subtree rooted at `key`.
    pub fn insert_at(&mut self, key: NodeKey, size: RectSize) -> Option<Point> {
        let (bbox, state) = (self.nodes[key].bbox, self.nodes[key].state);

        match state {
            NodeState::Split { near, far } => {
                //already split regions are always filled before anything else
                self.insert_at(near, size)
                    .or_else(|| self.insert_at(far, size))
            }
            NodeState::Occupied => None,
            NodeState::Free => {
                let tol = bbox.tolerance();
                let (dx, dy) = bbox.size().margins(&size);
                if dx < -tol || dy < -tol {
                    //does not fit in this node
                    return None;
                }
                Some(self.carve(key, size, dx < tol, dy < tol))
            }
        }
    }

    /// Occupies the free leaf `key` with a rectangle of `size`, cutting off the leftover along every axis
    /// which does not fit exactly yet. An axis is never tested again once cut, so at most two cuts are made.
    fn carve(&mut self, key: NodeKey, size: RectSize, exact_x: bool, exact_y: bool) -> Point {
        let bbox = self.nodes[key].bbox;
        let cut = match (exact_x, exact_y) {
            (true, true) => {
                self.nodes[key].state = NodeState::Occupied;
                return bbox.origin();
            }
            (false, true) => Cut::Vertical,
            (true, false) => Cut::Horizontal,
            (false, false) => {
                //cut along the axis with the largest leftover, keeping the unused area in one piece
                let (dx, dy) = bbox.size().margins(&size);
                match dx > dy {
                    true => Cut::Vertical,
                    false => Cut::Horizontal,
                }
            }
        };
        let length = match cut {
            Cut::Vertical => size.width,
            Cut::Horizontal => size.height,
        };
        let [near_bbox, far_bbox] = bbox.split(cut, length);

        let shrinks = match cut {
            Cut::Vertical => near_bbox.x_max < bbox.x_max && far_bbox.x_min < far_bbox.x_max,
            Cut::Horizontal => near_bbox.y_max < bbox.y_max && far_bbox.y_min < far_bbox.y_max,
        };
        if !shrinks {
            //the leftover vanishes when rounded to the node's coordinates
            return match cut {
                Cut::Vertical => self.carve(key, size, true, exact_y),
                Cut::Horizontal => self.carve(key, size, exact_x, true),
            };
        }

        let near = self.nodes.insert(PartitionNode::new(near_bbox));
        let far = self.nodes.insert(PartitionNode::new(far_bbox));
        self.nodes[key].state = NodeState::Split { near, far };

        //the near child spans the rectangle exactly along the cut axis
        match cut {
            Cut::Vertical => self.carve(near, size, true, exact_y),
            Cut::Horizontal => self.carve(near, size, exact_x, true),
        }
    }

    pub fn root(&self) -> NodeKey {
        self.root
    }

    pub fn node(&self, key: NodeKey) -> &PartitionNode {
        &self.nodes[key]
    }

    pub fn nodes(&self) -> impl Iterator<Item = (NodeKey, &PartitionNode)> {
        self.nodes.iter()
    }

    pub fn n_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// All leaves holding a rectangle
    pub fn occupied_leaves(&self) -> impl Iterator<Item = &PartitionNode> {
        self.nodes
            .values()
            .filter(|n| matches!(n.state, NodeState::Occupied))
    }

    /// All leaves still available
    pub fn free_leaves(&self) -> impl Iterator<Item = &PartitionNode> {
        self.nodes
            .values()
            .filter(|n| matches!(n.state, NodeState::Free))
    }
}

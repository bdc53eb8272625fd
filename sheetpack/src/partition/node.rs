use crate::geometry::primitives::Rect;
use crate::partition::NodeKey;

/// Node of a [`PartitionTree`](crate::partition::PartitionTree), covering a rectangular region of the sheet.
#[derive(Clone, Debug)]
pub struct PartitionNode {
    /// The region of the sheet covered by this node
    pub bbox: Rect,
    pub state: NodeState,
}

/// Occupancy of a [`PartitionNode`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeState {
    /// Leaf which has not received a rectangle
    Free,
    /// Leaf holding exactly one rectangle, which spans the entire node
    Occupied,
    /// Node cut in two, no longer available as a whole.
    /// `near` touches the node's origin corner, `far` holds the remaining strip.
    Split { near: NodeKey, far: NodeKey },
}

impl PartitionNode {
    pub fn new(bbox: Rect) -> Self {
        Self {
            bbox,
            state: NodeState::Free,
        }
    }

    pub fn children(&self) -> Option<[NodeKey; 2]> {
        match self.state {
            NodeState::Split { near, far } => Some([near, far]),
            NodeState::Free | NodeState::Occupied => None,
        }
    }
}

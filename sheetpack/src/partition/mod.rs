//! Binary space partition of a sheet into guillotine-cut regions.

mod node;
mod tree;

#[doc(inline)]
pub use node::{NodeState, PartitionNode};
#[doc(inline)]
pub use tree::{NodeKey, PartitionTree};

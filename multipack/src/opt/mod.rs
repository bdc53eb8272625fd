mod item;
mod multipacker;
pub mod order;
mod solution;

#[doc(inline)]
pub use item::PackItem;
#[doc(inline)]
pub use multipacker::{MultiPacker, default_sheet_size};
#[doc(inline)]
pub use solution::{PackSolution, TrialImprovement};

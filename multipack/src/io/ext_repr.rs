use serde::{Deserialize, Serialize};

use sheetpack::geometry::primitives::RectSize;

/// A set of shapes to be packed onto a sheet
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtInstance {
    /// The name of the instance
    pub name: String,
    /// Set of items to be packed
    pub items: Vec<ExtItem>,
    /// Size of the sheet. Falls back to the configured sheet (or a derived one) if not specified
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sheet: Option<RectSize>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtItem {
    /// Unique identifier of the item
    pub id: u64,
    /// Number of copies of this item to pack
    #[serde(default = "default_quantity")]
    pub quantity: usize,
    /// Shape of the item
    pub shape: ExtShape,
}

fn default_quantity() -> usize {
    1
}

/// Various ways to represent a shape
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(tag = "type", content = "data")]
#[serde(rename_all = "snake_case")]
pub enum ExtShape {
    /// Axis-aligned rectangle with its bottom left corner at the origin
    Rectangle { width: f64, height: f64 },
    /// Polygon with a single outer boundary, no holes and no self-intersections
    SimplePolygon(Vec<(f64, f64)>),
}

/// Best packing found for an [`ExtInstance`]
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtSolution {
    /// The items placed on the sheet and where they were placed
    pub placed_items: Vec<ExtPlacedItem>,
    /// The copies which could not be placed
    pub unplaced_items: Vec<ExtItemCopy>,
    /// Size of the sheet used for packing
    pub sheet: RectSize,
    /// Smallest box anchored at the origin containing all placed items, including their buffer
    pub consumed: RectSize,
    /// Area of the placed bounding boxes (including buffer) divided by the consumed area
    pub rect_density: f64,
    /// Area of the placed shapes divided by the consumed area
    pub poly_density: f64,
    /// Number of packing trials performed
    pub n_trials: usize,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExtItemCopy {
    /// The id of the item in the instance
    pub item_id: u64,
    /// Which copy of the item, starting from 0
    pub copy: usize,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtPlacedItem {
    #[serde(flatten)]
    pub item: ExtItemCopy,
    /// Row-major affine matrix mapping the item's shape onto the sheet
    pub transformation: [[f64; 3]; 3],
}

/// Direction of a guillotine cut through a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cut {
    /// Cut line parallel to the y-axis, producing a left and a right part
    Vertical,
    /// Cut line parallel to the x-axis, producing a bottom and a top part
    Horizontal,
}

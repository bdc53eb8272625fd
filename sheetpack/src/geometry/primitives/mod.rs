mod point;
mod rect;
mod rect_size;
mod simple_polygon;

#[doc(inline)]
pub use point::Point;
#[doc(inline)]
pub use rect::Rect;
#[doc(inline)]
pub use rect_size::RectSize;
#[doc(inline)]
pub use simple_polygon::SPolygon;

//! Geometry primitives: points, axis-aligned rectangles, segments

mod point;
mod rect;
mod segment;

pub use point::Point;
pub use rect::{Outcode, Rect};
pub use segment::Segment;

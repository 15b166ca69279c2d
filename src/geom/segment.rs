use geo::{Intersects, Line};
use serde::{Deserialize, Serialize};

use super::{Point, Rect};

/// Directed line segment between two points (one boom)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f64 {
        self.start.distance(&self.end)
    }

    fn as_line(&self) -> Line<f64> {
        Line::new(self.start, self.end)
    }

    /// Whether the segment intersects the rectangle
    ///
    /// Fast path: every point of the segment lies within half a length of
    /// the midpoint, so a rectangle further than one full length from the
    /// midpoint cannot be reached (conservative prune). A midpoint inside
    /// or on the rectangle is an immediate hit. Otherwise the midpoint's
    /// outcode selects the facing edge, or the two edges meeting at the
    /// facing corner, and the exact segment intersection test against those
    /// edges decides.
    pub fn intersects_rect(&self, rect: &Rect) -> bool {
        let mid = self.start.midpoint(&self.end);
        let dist = rect.distance(&mid);

        if dist > self.length() {
            return false;
        }
        if dist <= 0.0 {
            return true;
        }

        let oc = match rect.outcode(&mid) {
            Some(oc) => oc,
            // Inside: unreachable after the dist <= 0 check
            None => return true,
        };
        let line = self.as_line();

        if oc.dx == 0.0 {
            // Facing a horizontal edge
            let edge = Line::new(
                Point::new(rect.x, oc.anchor.y),
                Point::new(rect.right(), oc.anchor.y),
            );
            line.intersects(&edge)
        } else if oc.dy == 0.0 {
            // Facing a vertical edge
            let edge = Line::new(
                Point::new(oc.anchor.x, rect.y),
                Point::new(oc.anchor.x, rect.top()),
            );
            line.intersects(&edge)
        } else {
            // Past a corner: test both edges meeting at the anchor corner
            let far_x = if oc.anchor.x == rect.x {
                rect.right()
            } else {
                rect.x
            };
            let far_y = if oc.anchor.y == rect.y {
                rect.top()
            } else {
                rect.y
            };
            let horizontal = Line::new(oc.anchor, Point::new(far_x, oc.anchor.y));
            let vertical = Line::new(oc.anchor, Point::new(oc.anchor.x, far_y));
            line.intersects(&horizontal) || line.intersects(&vertical)
        }
    }
}

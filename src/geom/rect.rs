use serde::{Deserialize, Serialize};

use super::Point;

/// Axis-aligned rectangle: bottom-left corner plus positive extent
///
/// Used both for obstacles and for the workspace bounds. Containment is
/// strict: a point exactly on the boundary is outside.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

/// Nearest boundary point of a rectangle to a query point, expressed as an
/// anchor on the boundary plus the offset vector from anchor to query.
///
/// Exactly one of `dx`/`dy` is zero when the query sits in the vertical or
/// horizontal band of the rectangle; both are non-zero past a corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outcode {
    pub anchor: Point,
    pub dx: f64,
    pub dy: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    pub fn top(&self) -> f64 {
        self.y + self.h
    }

    /// True iff the point lies strictly inside (boundary excluded)
    pub fn contains(&self, p: &Point) -> bool {
        p.x > self.x && p.x < self.right() && p.y > self.y && p.y < self.top()
    }

    /// Grow by `delta` in each direction (shrink when negative)
    ///
    /// Applied symmetrically: each side moves by `delta / 2`. Workspace
    /// bounds use a positive delta ("lenient bounds"), obstacles a negative
    /// one ("lenient obstacle").
    pub fn grow(&self, delta: f64) -> Self {
        Self {
            x: self.x - delta / 2.0,
            y: self.y - delta / 2.0,
            w: self.w + delta,
            h: self.h + delta,
        }
    }

    /// Minimum distance from the point to the rectangle (0 when inside)
    ///
    /// Three regions: the vertical band above/below uses the perpendicular
    /// distance to the near horizontal edge, the horizontal band left/right
    /// uses the near vertical edge, and the corner quadrants use the
    /// distance to the nearest corner.
    pub fn distance(&self, p: &Point) -> f64 {
        if self.contains(p) {
            return 0.0;
        }

        if p.x > self.x && p.x < self.right() {
            (p.y - self.y).abs().min((p.y - self.top()).abs())
        } else if p.y > self.y && p.y < self.top() {
            (p.x - self.x).abs().min((p.x - self.right()).abs())
        } else {
            let cx = self.nearest_corner_x(p);
            let cy = self.nearest_corner_y(p);
            let dx = p.x - cx;
            let dy = p.y - cy;
            (dx * dx + dy * dy).sqrt()
        }
    }

    /// Nearest boundary point to `p`, or `None` when `p` is inside
    ///
    /// Same region analysis as [`Rect::distance`], but returning the anchor
    /// and offset instead of a scalar, so the caller can reconstruct exactly
    /// which edge (or corner edge pair) faces the query point.
    pub fn outcode(&self, p: &Point) -> Option<Outcode> {
        if self.contains(p) {
            return None;
        }

        if p.x > self.x && p.x < self.right() {
            let side_y = if (p.y - self.y).abs() < (p.y - self.top()).abs() {
                self.y
            } else {
                self.top()
            };
            Some(Outcode {
                anchor: Point::new(p.x, side_y),
                dx: 0.0,
                dy: p.y - side_y,
            })
        } else if p.y > self.y && p.y < self.top() {
            let side_x = if (p.x - self.x).abs() < (p.x - self.right()).abs() {
                self.x
            } else {
                self.right()
            };
            Some(Outcode {
                anchor: Point::new(side_x, p.y),
                dx: p.x - side_x,
                dy: 0.0,
            })
        } else {
            let cx = self.nearest_corner_x(p);
            let cy = self.nearest_corner_y(p);
            Some(Outcode {
                anchor: Point::new(cx, cy),
                dx: p.x - cx,
                dy: p.y - cy,
            })
        }
    }

    fn nearest_corner_x(&self, p: &Point) -> f64 {
        if (p.x - self.x).abs() < (p.x - self.right()).abs() {
            self.x
        } else {
            self.right()
        }
    }

    fn nearest_corner_y(&self, p: &Point) -> f64 {
        if (p.y - self.y).abs() < (p.y - self.top()).abs() {
            self.y
        } else {
            self.top()
        }
    }
}

use serde::{Deserialize, Serialize};

use crate::geom::{Point, Segment};

/// One time-slice snapshot: ordered positions of all vessels
///
/// Order is significant: it defines both the boom chain and the polygon
/// winding used by the convexity and area checks. The type does no validity
/// checking of its own; see [`crate::verify`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    positions: Vec<Point>,
}

impl Configuration {
    pub fn new(positions: Vec<Point>) -> Self {
        Self { positions }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn point(&self, i: usize) -> Point {
        self.positions[i]
    }

    pub fn points(&self) -> &[Point] {
        &self.positions
    }

    /// Boom segments between consecutive vessels
    pub fn booms(&self) -> impl Iterator<Item = Segment> + '_ {
        self.positions
            .windows(2)
            .map(|pair| Segment::new(pair[0], pair[1]))
    }

    /// Maximum over matching indices of point-to-point distance
    ///
    /// `None` is the length-mismatch sentinel: comparing configurations of
    /// different sizes is undefined and callers treat it as maximally
    /// invalid.
    pub fn max_distance(&self, other: &Self) -> Option<f64> {
        if self.len() != other.len() {
            return None;
        }
        self.positions
            .iter()
            .zip(&other.positions)
            .map(|(a, b)| a.distance(b))
            .fold(Some(0.0), |acc, d| acc.map(|m: f64| m.max(d)))
    }

    /// Sum over matching indices of point-to-point distance
    ///
    /// Same length-mismatch sentinel as [`Configuration::max_distance`].
    pub fn total_distance(&self, other: &Self) -> Option<f64> {
        if self.len() != other.len() {
            return None;
        }
        Some(
            self.positions
                .iter()
                .zip(&other.positions)
                .map(|(a, b)| a.distance(b))
                .sum(),
        )
    }

    /// Twice the signed area of the closed polygon (shoelace formula)
    ///
    /// The first point is implicitly repeated after the last. The absolute
    /// value halved is the enclosed area; the sign carries the winding.
    pub fn signed_area(&self) -> f64 {
        let n = self.positions.len();
        if n < 3 {
            return 0.0;
        }
        let mut total = 0.0;
        for i in 0..n {
            let prev = self.positions[(i + n - 1) % n];
            let next = self.positions[(i + 1) % n];
            total += self.positions[i].x * (next.y - prev.y);
        }
        total
    }

    /// Parse the space-separated `x y x y ...` text form
    pub fn parse(text: &str) -> Option<Self> {
        let values: Vec<f64> = text
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<_, _>>()
            .ok()?;
        if values.is_empty() || values.len() % 2 != 0 {
            return None;
        }
        Some(Self::new(
            values
                .chunks(2)
                .map(|c| Point::new(c[0], c[1]))
                .collect(),
        ))
    }

    /// Render back to the space-separated text form
    pub fn render(&self) -> String {
        self.positions
            .iter()
            .map(|p| format!("{} {}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

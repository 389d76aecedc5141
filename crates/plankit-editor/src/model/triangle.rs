//! Isosceles triangle: apex at the top-center of its box, base at the
//! bottom edge.

use plankit_core::Point;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    /// Top-left corner of the bounding box.
    pub origin: Point,
    pub width: f64,
    pub height: f64,
}

impl Triangle {
    pub fn new(origin: Point, width: f64, height: f64) -> Self {
        Self {
            origin,
            width,
            height,
        }
    }

    /// Builds the triangle spanned by two drag corners, normalized the same
    /// way as a dragged rectangle.
    pub fn from_drag(anchor: Point, pointer: Point) -> Self {
        Self::new(
            Point::new(anchor.x.min(pointer.x), anchor.y.min(pointer.y)),
            (pointer.x - anchor.x).abs(),
            (pointer.y - anchor.y).abs(),
        )
    }

    /// Vertices as (apex, bottom-left, bottom-right).
    pub fn vertices(&self) -> [Point; 3] {
        [
            Point::new(self.origin.x + self.width / 2.0, self.origin.y),
            Point::new(self.origin.x, self.origin.y + self.height),
            Point::new(self.origin.x + self.width, self.origin.y + self.height),
        ]
    }

    pub fn bounding_box(&self) -> (f64, f64, f64, f64) {
        (
            self.origin.x,
            self.origin.y,
            self.origin.x + self.width,
            self.origin.y + self.height,
        )
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.origin = self.origin.translated(dx, dy);
    }

    pub fn scale(&mut self, sx: f64, sy: f64, center: Point) {
        self.origin = self.origin.scaled(sx, sy, center);
        self.width *= sx.abs();
        self.height *= sy.abs();
    }

    pub fn contains_point(&self, point: &Point, tolerance: f64) -> bool {
        let [a, b, c] = self.vertices();
        // Sign of the cross product for each edge; inside when all agree.
        let sign = |p1: Point, p2: Point, p: &Point| {
            (p.x - p2.x) * (p1.y - p2.y) - (p1.x - p2.x) * (p.y - p2.y)
        };
        let d1 = sign(a, b, point);
        let d2 = sign(b, c, point);
        let d3 = sign(c, a, point);
        let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
        let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
        if !(has_neg && has_pos) {
            return true;
        }
        // Near-miss within tolerance of the bounding box.
        tolerance > 0.0 && {
            let (x1, y1, x2, y2) = self.bounding_box();
            point.x >= x1 - tolerance
                && point.x <= x2 + tolerance
                && point.y >= y1 - tolerance
                && point.y <= y2 + tolerance
        }
    }
}

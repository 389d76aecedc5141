//! Straight line segment between two scene points.

use plankit_core::Point;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub p1: Point,
    pub p2: Point,
}

impl Line {
    pub fn new(p1: Point, p2: Point) -> Self {
        Self { p1, p2 }
    }

    pub fn bounding_box(&self) -> (f64, f64, f64, f64) {
        (
            self.p1.x.min(self.p2.x),
            self.p1.y.min(self.p2.y),
            self.p1.x.max(self.p2.x),
            self.p1.y.max(self.p2.y),
        )
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.p1 = self.p1.translated(dx, dy);
        self.p2 = self.p2.translated(dx, dy);
    }

    pub fn scale(&mut self, sx: f64, sy: f64, center: Point) {
        self.p1 = self.p1.scaled(sx, sy, center);
        self.p2 = self.p2.scaled(sx, sy, center);
    }

    /// True when `point` lies within `tolerance` of the segment.
    pub fn contains_point(&self, point: &Point, tolerance: f64) -> bool {
        self.distance_to_point(point) <= tolerance
    }

    /// Shortest distance from `point` to the segment.
    pub fn distance_to_point(&self, point: &Point) -> f64 {
        let dx = self.p2.x - self.p1.x;
        let dy = self.p2.y - self.p1.y;
        let len_sq = dx * dx + dy * dy;
        if len_sq < 1e-12 {
            return self.p1.distance_to(point);
        }
        let t = ((point.x - self.p1.x) * dx + (point.y - self.p1.y) * dy) / len_sq;
        let t = t.clamp(0.0, 1.0);
        let closest = Point::new(self.p1.x + t * dx, self.p1.y + t * dy);
        closest.distance_to(point)
    }
}

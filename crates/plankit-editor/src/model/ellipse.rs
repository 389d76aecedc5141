//! Axis-aligned ellipse.

use plankit_core::Point;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ellipse {
    pub center: Point,
    pub rx: f64,
    pub ry: f64,
}

impl Ellipse {
    pub fn new(center: Point, rx: f64, ry: f64) -> Self {
        Self { center, rx, ry }
    }

    pub fn bounding_box(&self) -> (f64, f64, f64, f64) {
        (
            self.center.x - self.rx,
            self.center.y - self.ry,
            self.center.x + self.rx,
            self.center.y + self.ry,
        )
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.center = self.center.translated(dx, dy);
    }

    pub fn scale(&mut self, sx: f64, sy: f64, center: Point) {
        self.center = self.center.scaled(sx, sy, center);
        self.rx *= sx.abs();
        self.ry *= sy.abs();
    }

    pub fn contains_point(&self, point: &Point, tolerance: f64) -> bool {
        let rx = self.rx + tolerance;
        let ry = self.ry + tolerance;
        if rx <= 0.0 || ry <= 0.0 {
            return false;
        }
        let nx = (point.x - self.center.x) / rx;
        let ny = (point.y - self.center.y) / ry;
        nx * nx + ny * ny <= 1.0
    }
}

//! Circle centered on a scene point.

use plankit_core::Point;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    pub fn bounding_box(&self) -> (f64, f64, f64, f64) {
        (
            self.center.x - self.radius,
            self.center.y - self.radius,
            self.center.x + self.radius,
            self.center.y + self.radius,
        )
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.center = self.center.translated(dx, dy);
    }

    /// Uniform scale only; anisotropic scaling is handled at the
    /// `ShapeGeometry` level by converting to an ellipse.
    pub fn scale(&mut self, sx: f64, _sy: f64, center: Point) {
        self.center = self.center.scaled(sx, sx, center);
        self.radius *= sx.abs();
    }

    pub fn contains_point(&self, point: &Point, tolerance: f64) -> bool {
        self.center.distance_to(point) <= self.radius + tolerance
    }
}

//! Freeform path geometry: move/line/arc/close commands in scene space.
//!
//! Arcs use SVG endpoint parameterization (radii, large-arc and sweep
//! flags, end point). Bounding boxes convert arcs to center
//! parameterization so the swept extremes are exact, not chord-based.

use plankit_core::Point;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "lowercase")]
pub enum PathCommand {
    MoveTo {
        to: Point,
    },
    LineTo {
        to: Point,
    },
    Arc {
        rx: f64,
        ry: f64,
        /// X-axis rotation in degrees. Always 0 for catalog and freehand
        /// arcs; kept for document compatibility.
        rotation: f64,
        large_arc: bool,
        sweep: bool,
        to: Point,
    },
    Close,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathShape {
    pub commands: Vec<PathCommand>,
}

impl PathShape {
    pub fn new(commands: Vec<PathCommand>) -> Self {
        Self { commands }
    }

    /// Open polyline through the given points.
    pub fn polyline(points: &[Point]) -> Self {
        let mut commands = Vec::with_capacity(points.len());
        for (i, p) in points.iter().enumerate() {
            if i == 0 {
                commands.push(PathCommand::MoveTo { to: *p });
            } else {
                commands.push(PathCommand::LineTo { to: *p });
            }
        }
        Self { commands }
    }

    /// The freehand semicircle gesture: an arc of radius
    /// `|pointer - anchor|` from the anchor to the pointer, closed back to
    /// the anchor along the chord.
    pub fn semicircle(anchor: Point, pointer: Point) -> Self {
        let radius = anchor.distance_to(&pointer);
        Self {
            commands: vec![
                PathCommand::MoveTo { to: anchor },
                PathCommand::Arc {
                    rx: radius,
                    ry: radius,
                    rotation: 0.0,
                    large_arc: false,
                    sweep: true,
                    to: pointer,
                },
                PathCommand::LineTo { to: anchor },
                PathCommand::Close,
            ],
        }
    }

    pub fn bounding_box(&self) -> (f64, f64, f64, f64) {
        let mut min_x = f64::INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut max_y = f64::NEG_INFINITY;
        let mut include = |p: Point| {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        };

        let mut current = Point::ZERO;
        for cmd in &self.commands {
            match cmd {
                PathCommand::MoveTo { to } | PathCommand::LineTo { to } => {
                    include(*to);
                    current = *to;
                }
                PathCommand::Arc {
                    rx,
                    ry,
                    large_arc,
                    sweep,
                    to,
                    ..
                } => {
                    include(current);
                    include(*to);
                    if let Some((cx, cy, rx, ry, theta1, delta)) =
                        arc_center_parameters(current, *to, *rx, *ry, *large_arc, *sweep)
                    {
                        // Axis-extreme angles that lie on the swept range.
                        for k in 0..4 {
                            let angle = k as f64 * std::f64::consts::FRAC_PI_2;
                            if angle_on_arc(angle, theta1, delta) {
                                include(Point::new(
                                    cx + rx * angle.cos(),
                                    cy + ry * angle.sin(),
                                ));
                            }
                        }
                    }
                    current = *to;
                }
                PathCommand::Close => {}
            }
        }

        if min_x > max_x {
            return (0.0, 0.0, 0.0, 0.0);
        }
        (min_x, min_y, max_x, max_y)
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        for cmd in &mut self.commands {
            match cmd {
                PathCommand::MoveTo { to }
                | PathCommand::LineTo { to }
                | PathCommand::Arc { to, .. } => *to = to.translated(dx, dy),
                PathCommand::Close => {}
            }
        }
    }

    pub fn scale(&mut self, sx: f64, sy: f64, center: Point) {
        for cmd in &mut self.commands {
            match cmd {
                PathCommand::MoveTo { to } | PathCommand::LineTo { to } => {
                    *to = to.scaled(sx, sy, center);
                }
                PathCommand::Arc { rx, ry, to, .. } => {
                    *to = to.scaled(sx, sy, center);
                    *rx *= sx.abs();
                    *ry *= sy.abs();
                }
                PathCommand::Close => {}
            }
        }
    }

    /// Paths hit-test against their bounding box.
    pub fn contains_point(&self, point: &Point, tolerance: f64) -> bool {
        let (x1, y1, x2, y2) = self.bounding_box();
        point.x >= x1 - tolerance
            && point.x <= x2 + tolerance
            && point.y >= y1 - tolerance
            && point.y <= y2 + tolerance
    }
}

/// SVG endpoint-to-center conversion (x-axis rotation fixed at 0).
/// Returns `(cx, cy, rx, ry, theta1, delta_theta)`, or `None` for a
/// degenerate arc (coincident endpoints or zero radius).
fn arc_center_parameters(
    from: Point,
    to: Point,
    rx: f64,
    ry: f64,
    large_arc: bool,
    sweep: bool,
) -> Option<(f64, f64, f64, f64, f64, f64)> {
    let mut rx = rx.abs();
    let mut ry = ry.abs();
    if rx < 1e-12 || ry < 1e-12 {
        return None;
    }

    let x1p = (from.x - to.x) / 2.0;
    let y1p = (from.y - to.y) / 2.0;
    if x1p.abs() < 1e-12 && y1p.abs() < 1e-12 {
        return None;
    }

    // Scale radii up if they cannot reach both endpoints.
    let lambda = (x1p * x1p) / (rx * rx) + (y1p * y1p) / (ry * ry);
    if lambda > 1.0 {
        let s = lambda.sqrt();
        rx *= s;
        ry *= s;
    }

    let num = (rx * rx) * (ry * ry) - (rx * rx) * (y1p * y1p) - (ry * ry) * (x1p * x1p);
    let den = (rx * rx) * (y1p * y1p) + (ry * ry) * (x1p * x1p);
    let mut coefficient = (num.max(0.0) / den).sqrt();
    if large_arc == sweep {
        coefficient = -coefficient;
    }

    let cxp = coefficient * rx * y1p / ry;
    let cyp = -coefficient * ry * x1p / rx;
    let cx = cxp + (from.x + to.x) / 2.0;
    let cy = cyp + (from.y + to.y) / 2.0;

    let angle_of = |x: f64, y: f64| ((y - cyp) / ry).atan2((x - cxp) / rx);
    let theta1 = angle_of(x1p, y1p);
    let theta2 = angle_of(-x1p, -y1p);
    let mut delta = theta2 - theta1;
    if sweep && delta < 0.0 {
        delta += 2.0 * std::f64::consts::PI;
    } else if !sweep && delta > 0.0 {
        delta -= 2.0 * std::f64::consts::PI;
    }

    Some((cx, cy, rx, ry, theta1, delta))
}

/// True when `angle` (normalized) lies on the arc starting at `theta1`
/// sweeping `delta` radians.
fn angle_on_arc(angle: f64, theta1: f64, delta: f64) -> bool {
    let tau = 2.0 * std::f64::consts::PI;
    let norm = |a: f64| a.rem_euclid(tau);
    let offset = if delta >= 0.0 {
        norm(angle - theta1)
    } else {
        norm(theta1 - angle)
    };
    offset <= delta.abs()
}

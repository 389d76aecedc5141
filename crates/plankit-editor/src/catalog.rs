//! Static catalog of floor-plan shape templates.
//!
//! Templates are immutable at runtime: instantiating one deep-copies its
//! geometry into a fresh [`ShapeInstance`] or [`Group`] with newly
//! generated ids. Composite templates keep their child geometry verbatim
//! in group-local coordinates; nothing is recomputed at instantiation.

use std::sync::OnceLock;

use plankit_core::{CatalogError, Point, Style};
use tracing::debug;

use crate::model::{Circle, Ellipse, Line, PathCommand, PathShape, Rect, ShapeGeometry};
use crate::scene::{Group, SceneEntry, ShapeInstance};

/// One primitive inside a template: geometry (template-local coordinates)
/// plus the style it is stamped with.
#[derive(Debug, Clone)]
pub struct TemplatePart {
    pub geometry: ShapeGeometry,
    pub style: Style,
}

/// Whether a template expands to a single shape or a composite group.
#[derive(Debug, Clone)]
pub enum TemplateSpec {
    Single(TemplatePart),
    Composite(Vec<TemplatePart>),
}

/// A named, immutable shape template.
#[derive(Debug, Clone)]
pub struct CatalogTemplate {
    pub id: &'static str,
    pub spec: TemplateSpec,
}

/// The read-only template registry. Content is fixed at startup; the
/// shape panel lists templates in registry order.
#[derive(Debug)]
pub struct Catalog {
    templates: Vec<CatalogTemplate>,
}

impl Catalog {
    /// The built-in floor-plan library (walls, openings, furniture) plus
    /// the toolbar quick-add composites.
    pub fn builtin() -> &'static Catalog {
        static CATALOG: OnceLock<Catalog> = OnceLock::new();
        CATALOG.get_or_init(|| Catalog {
            templates: builtin_templates(),
        })
    }

    pub fn get(&self, id: &str) -> Option<&CatalogTemplate> {
        self.templates.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogTemplate> {
        self.templates.iter()
    }

    /// Case-insensitive substring filter over template ids, in registry
    /// order (the shape panel's search box).
    pub fn search(&self, term: &str) -> Vec<&CatalogTemplate> {
        let needle = term.to_lowercase();
        self.templates
            .iter()
            .filter(|t| t.id.to_lowercase().contains(&needle))
            .collect()
    }

    /// Instantiates a template at `placement`.
    ///
    /// Single templates become a [`ShapeInstance`] centered on
    /// `placement`; composites become a [`Group`] whose origin is
    /// `placement` and whose children copy the template parts verbatim.
    pub fn instantiate(
        &self,
        template_id: &str,
        placement: Point,
    ) -> Result<SceneEntry, CatalogError> {
        let template = self
            .get(template_id)
            .ok_or_else(|| CatalogError::UnknownTemplate(template_id.to_string()))?;

        debug!(template = template_id, "instantiating catalog template");

        let entry = match &template.spec {
            TemplateSpec::Single(part) => {
                let mut geometry = part.geometry.clone();
                geometry.center_at(placement);
                SceneEntry::Shape(ShapeInstance::new(geometry, part.style.clone()))
            }
            TemplateSpec::Composite(parts) => {
                let children = parts
                    .iter()
                    .map(|p| ShapeInstance::new(p.geometry.clone(), p.style.clone()))
                    .collect();
                SceneEntry::Group(Group::new(placement, children))
            }
        };
        Ok(entry)
    }
}

fn part(geometry: ShapeGeometry, style: Style) -> TemplatePart {
    TemplatePart { geometry, style }
}

fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> ShapeGeometry {
    ShapeGeometry::Line(Line::new(Point::new(x1, y1), Point::new(x2, y2)))
}

fn rect(x: f64, y: f64, w: f64, h: f64) -> ShapeGeometry {
    ShapeGeometry::Rect(Rect::new(Point::new(x, y), w, h))
}

fn circle(cx: f64, cy: f64, r: f64) -> ShapeGeometry {
    ShapeGeometry::Circle(Circle::new(Point::new(cx, cy), r))
}

fn ellipse(cx: f64, cy: f64, rx: f64, ry: f64) -> ShapeGeometry {
    ShapeGeometry::Ellipse(Ellipse::new(Point::new(cx, cy), rx, ry))
}

fn move_to(x: f64, y: f64) -> PathCommand {
    PathCommand::MoveTo {
        to: Point::new(x, y),
    }
}

fn line_to(x: f64, y: f64) -> PathCommand {
    PathCommand::LineTo {
        to: Point::new(x, y),
    }
}

fn arc_to(rx: f64, ry: f64, x: f64, y: f64) -> PathCommand {
    PathCommand::Arc {
        rx,
        ry,
        rotation: 0.0,
        large_arc: false,
        sweep: true,
        to: Point::new(x, y),
    }
}

fn single(id: &'static str, geometry: ShapeGeometry, style: Style) -> CatalogTemplate {
    CatalogTemplate {
        id,
        spec: TemplateSpec::Single(part(geometry, style)),
    }
}

fn composite(id: &'static str, parts: Vec<TemplatePart>) -> CatalogTemplate {
    CatalogTemplate {
        id,
        spec: TemplateSpec::Composite(parts),
    }
}

/// Styles shared across the library.
fn wall_style() -> Style {
    Style::outline("#000", 5.0)
}

fn thin_outline() -> Style {
    Style::outline("#000", 2.0)
}

fn furniture(fill: &str) -> Style {
    Style::filled("#000", 2.0, fill)
}

fn chair_style() -> Style {
    Style::filled("#000", 1.0, "#A9A9A9")
}

fn builtin_templates() -> Vec<CatalogTemplate> {
    let mut t = Vec::with_capacity(45);

    // Walls and corners.
    t.push(single("wall-h", line(0.0, 0.0, 50.0, 0.0), wall_style()));
    t.push(single("wall-v", line(0.0, 0.0, 0.0, 50.0), wall_style()));
    t.push(single(
        "corner-tl",
        ShapeGeometry::Path(PathShape::new(vec![
            move_to(0.0, 50.0),
            line_to(0.0, 0.0),
            line_to(50.0, 0.0),
        ])),
        wall_style(),
    ));
    t.push(single(
        "corner-tr",
        ShapeGeometry::Path(PathShape::new(vec![
            move_to(0.0, 0.0),
            line_to(50.0, 0.0),
            line_to(50.0, 50.0),
        ])),
        wall_style(),
    ));
    t.push(single(
        "corner-br",
        ShapeGeometry::Path(PathShape::new(vec![
            move_to(50.0, 0.0),
            line_to(50.0, 50.0),
            line_to(0.0, 50.0),
        ])),
        wall_style(),
    ));
    t.push(single(
        "corner-bl",
        ShapeGeometry::Path(PathShape::new(vec![
            move_to(50.0, 50.0),
            line_to(0.0, 50.0),
            line_to(0.0, 0.0),
        ])),
        wall_style(),
    ));
    t.push(single("room", rect(0.0, 0.0, 50.0, 50.0), wall_style()));
    t.push(single(
        "wall-h-short",
        line(0.0, 0.0, 30.0, 0.0),
        wall_style(),
    ));
    t.push(single(
        "wall-v-short",
        line(0.0, 0.0, 0.0, 30.0),
        wall_style(),
    ));
    t.push(single(
        "wall-h-dashed",
        line(0.0, 0.0, 50.0, 0.0),
        Style::outline("#000", 3.0).with_dash(vec![5.0, 5.0]),
    ));

    // Openings.
    t.push(single(
        "door-arc",
        ShapeGeometry::Path(PathShape::new(vec![
            move_to(0.0, 0.0),
            arc_to(50.0, 50.0, 50.0, 0.0),
        ])),
        thin_outline(),
    ));
    t.push(single(
        "window",
        rect(0.0, 0.0, 50.0, 5.0),
        furniture("#87CEEB"),
    ));
    t.push(composite(
        "window-double",
        vec![
            part(rect(-25.0, -10.0, 50.0, 5.0), furniture("#87CEEB")),
            part(rect(-25.0, 5.0, 50.0, 5.0), furniture("#87CEEB")),
        ],
    ));

    // Tables and storage.
    t.push(single(
        "table-rect",
        rect(0.0, 0.0, 50.0, 30.0),
        furniture("#D2691E"),
    ));
    t.push(single(
        "shelf",
        rect(0.0, 0.0, 50.0, 15.0),
        furniture("#FFD700"),
    ));
    t.push(single(
        "quarter-circle-tl",
        ShapeGeometry::Path(PathShape::new(vec![
            move_to(0.0, 0.0),
            line_to(50.0, 0.0),
            arc_to(50.0, 50.0, 0.0, 50.0),
            PathCommand::Close,
        ])),
        thin_outline(),
    ));
    t.push(single(
        "quarter-circle-tr",
        ShapeGeometry::Path(PathShape::new(vec![
            move_to(0.0, 0.0),
            line_to(50.0, 0.0),
            line_to(50.0, 50.0),
            arc_to(50.0, 50.0, 0.0, 0.0),
            PathCommand::Close,
        ])),
        thin_outline(),
    ));
    t.push(single(
        "glasses",
        ShapeGeometry::Path(PathShape::new(vec![
            move_to(0.0, 25.0),
            arc_to(25.0, 15.0, 50.0, 25.0),
            arc_to(25.0, 15.0, 0.0, 25.0),
            PathCommand::Close,
        ])),
        thin_outline(),
    ));
    t.push(single(
        "desk",
        rect(0.0, 0.0, 60.0, 30.0),
        furniture("#A0522D"),
    ));
    t.push(single(
        "cabinet",
        rect(0.0, 0.0, 30.0, 50.0),
        furniture("#8B4513"),
    ));

    // Plain primitives and seating.
    t.push(single("circle", circle(0.0, 0.0, 25.0), thin_outline()));
    t.push(composite(
        "computer",
        vec![
            part(rect(-20.0, -17.5, 40.0, 30.0), furniture("#708090")),
            part(rect(-10.0, 12.5, 20.0, 5.0), furniture("#708090")),
        ],
    ));
    t.push(single("chair", circle(0.0, 0.0, 15.0), furniture("#A9A9A9")));
    t.push(single(
        "square-table",
        rect(0.0, 0.0, 40.0, 40.0),
        furniture("#D2B48C"),
    ));
    t.push(single(
        "rectangle",
        rect(0.0, 0.0, 50.0, 30.0),
        thin_outline(),
    ));

    // Bathroom and kitchen.
    t.push(single(
        "toilet",
        ellipse(0.0, 0.0, 15.0, 25.0),
        furniture("#F5F5F5"),
    ));
    t.push(single("sink", circle(0.0, 0.0, 15.0), furniture("#F5F5F5")));
    t.push(single(
        "bathtub",
        ShapeGeometry::Rect(Rect::rounded(Point::new(0.0, 0.0), 50.0, 25.0, 10.0, 10.0)),
        furniture("#F5F5F5"),
    ));
    t.push(single(
        "shower",
        rect(0.0, 0.0, 30.0, 30.0),
        furniture("#F5F5F5"),
    ));
    t.push(single(
        "fridge",
        rect(0.0, 0.0, 25.0, 40.0),
        furniture("#B0C4DE"),
    ));

    // More tables.
    t.push(single(
        "square-small",
        rect(0.0, 0.0, 20.0, 20.0),
        thin_outline(),
    ));
    t.push(single(
        "table-round",
        circle(0.0, 0.0, 20.0),
        furniture("#D2B48C"),
    ));
    t.push(single(
        "table-oval",
        ellipse(0.0, 0.0, 25.0, 15.0),
        furniture("#D2B48C"),
    ));
    t.push(single(
        "table-rect-small",
        rect(0.0, 0.0, 40.0, 20.0),
        furniture("#D2B48C"),
    ));
    t.push(single(
        "table-rect-large",
        rect(0.0, 0.0, 50.0, 25.0),
        furniture("#D2B48C"),
    ));
    t.push(single(
        "ellipse",
        ellipse(0.0, 0.0, 25.0, 15.0),
        thin_outline(),
    ));

    // Seated table arrangements: table centered on the group origin with
    // chairs placed around it.
    t.push(composite(
        "table-round-4",
        vec![
            part(circle(0.0, 0.0, 20.0), furniture("#D2B48C")),
            part(circle(0.0, -25.0, 5.0), chair_style()),
            part(circle(0.0, 25.0, 5.0), chair_style()),
            part(circle(-25.0, 0.0, 5.0), chair_style()),
            part(circle(25.0, 0.0, 5.0), chair_style()),
        ],
    ));
    t.push(composite(
        "table-rect-4",
        vec![
            part(rect(-20.0, -20.0, 40.0, 40.0), furniture("#D2B48C")),
            part(circle(-25.0, -25.0, 5.0), chair_style()),
            part(circle(25.0, -25.0, 5.0), chair_style()),
            part(circle(-25.0, 25.0, 5.0), chair_style()),
            part(circle(25.0, 25.0, 5.0), chair_style()),
        ],
    ));
    t.push(composite(
        "table-oval-4",
        vec![
            part(ellipse(0.0, 0.0, 25.0, 15.0), furniture("#D2B48C")),
            part(circle(0.0, -20.0, 5.0), chair_style()),
            part(circle(0.0, 20.0, 5.0), chair_style()),
            part(circle(-30.0, 0.0, 5.0), chair_style()),
            part(circle(30.0, 0.0, 5.0), chair_style()),
        ],
    ));
    t.push(composite(
        "table-rect-6",
        vec![
            part(rect(-25.0, -15.0, 50.0, 30.0), furniture("#D2B48C")),
            part(circle(-20.0, -15.0, 4.0), chair_style()),
            part(circle(0.0, -15.0, 4.0), chair_style()),
            part(circle(20.0, -15.0, 4.0), chair_style()),
            part(circle(-20.0, 15.0, 4.0), chair_style()),
            part(circle(0.0, 15.0, 4.0), chair_style()),
            part(circle(20.0, 15.0, 4.0), chair_style()),
        ],
    ));

    // Toolbar quick-add furniture, kept in template-local coordinates.
    t.push(single(
        "wall",
        rect(0.0, 0.0, 200.0, 20.0),
        Style::filled("#000", 2.0, "#666"),
    ));
    t.push(composite(
        "door",
        vec![
            part(
                rect(0.0, 0.0, 80.0, 10.0),
                Style::filled("#8B4513", 1.0, "#8B4513"),
            ),
            part(
                ShapeGeometry::Path(PathShape::new(vec![
                    move_to(0.0, 0.0),
                    arc_to(80.0, 80.0, 80.0, 0.0),
                ])),
                Style::outline("#8B4513", 2.0),
            ),
        ],
    ));
    t.push(composite(
        "window-wide",
        vec![
            part(rect(0.0, 0.0, 60.0, 5.0), furniture("#87CEEB")),
            part(rect(0.0, 15.0, 60.0, 5.0), furniture("#87CEEB")),
        ],
    ));
    t.push(composite(
        "table",
        vec![
            part(rect(0.0, 0.0, 120.0, 60.0), thin_outline()),
            part(
                rect(10.0, 10.0, 100.0, 40.0),
                Style::filled("#000", 1.0, "#D2691E"),
            ),
        ],
    ));
    t.push(composite(
        "display",
        vec![
            part(rect(0.0, 0.0, 100.0, 40.0), furniture("#FFD700")),
            part(line(0.0, 0.0, 100.0, 0.0), Style::outline("#000", 1.0)),
            part(line(0.0, 10.0, 100.0, 10.0), Style::outline("#000", 1.0)),
            part(line(0.0, 20.0, 100.0, 20.0), Style::outline("#000", 1.0)),
        ],
    ));

    t
}

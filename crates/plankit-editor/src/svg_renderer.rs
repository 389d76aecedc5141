//! SVG rendering of the scene.
//!
//! Produces a standalone SVG document string: shapes in z-order, groups
//! as translated `<g>` elements, styles mapped to stroke/fill/dash
//! attributes. This backs the exported 2D artifact; it is a structural
//! rendering, not a print-fidelity one.

use plankit_core::Style;

use crate::model::{PathCommand, PathShape, ShapeGeometry, TextShape};
use crate::scene::{Scene, SceneEntry, ShapeInstance};

/// Renders the scene to a complete SVG document.
pub fn render_scene(scene: &Scene, width: f64, height: f64) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" \
         viewBox=\"0 0 {width} {height}\">\n"
    ));
    for entry in scene.iter() {
        match entry {
            SceneEntry::Shape(shape) => render_shape(&mut out, shape, 1),
            SceneEntry::Group(group) => {
                out.push_str(&format!(
                    "  <g transform=\"translate({} {})\">\n",
                    fmt_num(group.origin.x),
                    fmt_num(group.origin.y)
                ));
                for child in &group.children {
                    render_shape(&mut out, child, 2);
                }
                out.push_str("  </g>\n");
            }
        }
    }
    out.push_str("</svg>\n");
    out
}

fn render_shape(out: &mut String, shape: &ShapeInstance, depth: usize) {
    let indent = "  ".repeat(depth);
    let style = style_attrs(&shape.style);
    match &shape.geometry {
        ShapeGeometry::Line(line) => {
            out.push_str(&format!(
                "{indent}<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\"{style}/>\n",
                fmt_num(line.p1.x),
                fmt_num(line.p1.y),
                fmt_num(line.p2.x),
                fmt_num(line.p2.y)
            ));
        }
        ShapeGeometry::Rect(rect) => {
            let corners = rect
                .corner_radius
                .map(|r| format!(" rx=\"{}\" ry=\"{}\"", fmt_num(r.rx), fmt_num(r.ry)))
                .unwrap_or_default();
            out.push_str(&format!(
                "{indent}<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"{corners}{style}/>\n",
                fmt_num(rect.origin.x),
                fmt_num(rect.origin.y),
                fmt_num(rect.width),
                fmt_num(rect.height)
            ));
        }
        ShapeGeometry::Circle(circle) => {
            out.push_str(&format!(
                "{indent}<circle cx=\"{}\" cy=\"{}\" r=\"{}\"{style}/>\n",
                fmt_num(circle.center.x),
                fmt_num(circle.center.y),
                fmt_num(circle.radius)
            ));
        }
        ShapeGeometry::Ellipse(ellipse) => {
            out.push_str(&format!(
                "{indent}<ellipse cx=\"{}\" cy=\"{}\" rx=\"{}\" ry=\"{}\"{style}/>\n",
                fmt_num(ellipse.center.x),
                fmt_num(ellipse.center.y),
                fmt_num(ellipse.rx),
                fmt_num(ellipse.ry)
            ));
        }
        ShapeGeometry::Triangle(triangle) => {
            let points = triangle
                .vertices()
                .iter()
                .map(|p| format!("{},{}", fmt_num(p.x), fmt_num(p.y)))
                .collect::<Vec<_>>()
                .join(" ");
            out.push_str(&format!("{indent}<polygon points=\"{points}\"{style}/>\n"));
        }
        ShapeGeometry::Path(path) => {
            out.push_str(&format!(
                "{indent}<path d=\"{}\"{style}/>\n",
                path_data(path)
            ));
        }
        ShapeGeometry::Text(text) => render_text(out, text, &indent),
    }
}

/// SVG path data string for a [`PathShape`].
pub fn path_data(path: &PathShape) -> String {
    let mut d = String::new();
    for cmd in &path.commands {
        if !d.is_empty() {
            d.push(' ');
        }
        match cmd {
            PathCommand::MoveTo { to } => {
                d.push_str(&format!("M {} {}", fmt_num(to.x), fmt_num(to.y)));
            }
            PathCommand::LineTo { to } => {
                d.push_str(&format!("L {} {}", fmt_num(to.x), fmt_num(to.y)));
            }
            PathCommand::Arc {
                rx,
                ry,
                rotation,
                large_arc,
                sweep,
                to,
            } => {
                d.push_str(&format!(
                    "A {} {} {} {} {} {} {}",
                    fmt_num(*rx),
                    fmt_num(*ry),
                    fmt_num(*rotation),
                    u8::from(*large_arc),
                    u8::from(*sweep),
                    fmt_num(to.x),
                    fmt_num(to.y)
                ));
            }
            PathCommand::Close => d.push('Z'),
        }
    }
    d
}

fn render_text(out: &mut String, text: &TextShape, indent: &str) {
    let style = &text.style;
    let mut attrs = format!(
        " font-size=\"{}\" fill=\"{}\"",
        fmt_num(style.font_size),
        style.fill.as_str()
    );
    if style.weight == plankit_core::FontWeight::Bold {
        attrs.push_str(" font-weight=\"bold\"");
    }
    if style.style == plankit_core::FontStyle::Italic {
        attrs.push_str(" font-style=\"italic\"");
    }
    if style.underline {
        attrs.push_str(" text-decoration=\"underline\"");
    }
    // Baseline sits one font-size below the block's top-left origin.
    out.push_str(&format!(
        "{indent}<text x=\"{}\" y=\"{}\"{attrs}>{}</text>\n",
        fmt_num(text.origin.x),
        fmt_num(text.origin.y + style.font_size),
        escape_xml(&text.content)
    ));
}

fn style_attrs(style: &Style) -> String {
    let mut attrs = format!(
        " stroke=\"{}\" stroke-width=\"{}\"",
        style.stroke.as_str(),
        fmt_num(style.stroke_width)
    );
    if style.fill.is_transparent() {
        attrs.push_str(" fill=\"none\"");
    } else {
        attrs.push_str(&format!(" fill=\"{}\"", style.fill.as_str()));
    }
    if let Some(dash) = &style.dash {
        let pattern = dash
            .iter()
            .map(|v| fmt_num(*v))
            .collect::<Vec<_>>()
            .join(",");
        attrs.push_str(&format!(" stroke-dasharray=\"{pattern}\""));
    }
    attrs
}

/// Trims trailing zeros so whole numbers render without decimals.
fn fmt_num(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

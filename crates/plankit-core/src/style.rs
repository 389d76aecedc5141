//! Stroke, fill, and text styling for scene shapes.
//!
//! Colors are kept as CSS-style strings (`"#000"`, `"transparent"`) so the
//! serialized document stays directly usable by a web front end.

use serde::{Deserialize, Serialize};

/// A CSS color string. `Color::TRANSPARENT` is the "no fill" sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub String);

impl Color {
    pub const TRANSPARENT_KEYWORD: &'static str = "transparent";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The transparent sentinel color.
    pub fn transparent() -> Self {
        Self(Self::TRANSPARENT_KEYWORD.to_string())
    }

    pub fn is_transparent(&self) -> bool {
        self.0 == Self::TRANSPARENT_KEYWORD
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Color {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Stroke/fill style applied to a shape instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Style {
    pub stroke: Color,
    pub stroke_width: f64,
    pub fill: Color,
    /// Dash pattern in scene units; `None` draws a solid stroke.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dash: Option<Vec<f64>>,
}

impl Style {
    /// Solid stroke with transparent fill, the freehand-tool default.
    pub fn outline(stroke: impl Into<String>, stroke_width: f64) -> Self {
        Self {
            stroke: Color::new(stroke),
            stroke_width,
            fill: Color::transparent(),
            dash: None,
        }
    }

    /// Stroke plus an opaque fill.
    pub fn filled(stroke: impl Into<String>, stroke_width: f64, fill: impl Into<String>) -> Self {
        Self {
            stroke: Color::new(stroke),
            stroke_width,
            fill: Color::new(fill),
            dash: None,
        }
    }

    /// Returns this style with the given dash pattern.
    pub fn with_dash(mut self, dash: Vec<f64>) -> Self {
        self.dash = Some(dash);
        self
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::outline("#000", 2.0)
    }
}

/// Font weight for text shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

/// Font slant for text shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

/// Full text styling, mirrored into the style panel when a text shape is
/// selected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub fill: Color,
    /// Background behind the text run; transparent means none.
    pub background: Color,
    pub font_size: f64,
    pub weight: FontWeight,
    pub style: FontStyle,
    pub underline: bool,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            fill: Color::new("#000000"),
            background: Color::transparent(),
            font_size: 20.0,
            weight: FontWeight::Normal,
            style: FontStyle::Normal,
            underline: false,
        }
    }
}

/// Predefined colors offered by the text style panel.
pub const TEXT_PALETTE: [&str; 13] = [
    "#000000", "#FFFFFF", "#FF0000", "#00FF00", "#0000FF", "#FFFF00", "#FF00FF", "#00FFFF",
    "#FFA500", "#800080", "#008000", "#800000", "#808080",
];

//! # Plankit Core
//!
//! Core value types shared across the plankit workspace:
//! - Geometry primitives (points, sizes)
//! - Stroke/fill/text style types
//! - Error taxonomy for catalog and scene operations
//! - Shared numeric constants (zoom bounds, grid spacing policy)

pub mod constants;
pub mod error;
pub mod geometry;
pub mod style;

pub use error::{CatalogError, Error, Result, SceneError};
pub use geometry::{Point, Size};
pub use style::{Color, FontStyle, FontWeight, Style, TextStyle};

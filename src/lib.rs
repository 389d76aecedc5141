//! # Plankit
//!
//! A floor-plan and planogram editor core for retail spaces: compose
//! furniture, walls, doors, and annotations from a shape catalog, draw
//! freehand primitives, and export the composed scene.
//!
//! ## Architecture
//!
//! Plankit is organized as a workspace with multiple crates:
//!
//! 1. **plankit-core** - Geometry and style value types, errors, constants
//! 2. **plankit-editor** - Scene model, catalog, drawing state machine,
//!    viewport/grid, serialization, asset upload
//! 3. **plankit** - This binary: a thin CLI for inspecting, converting,
//!    and uploading plan files

pub use plankit_core::{
    CatalogError, Color, Error, FontStyle, FontWeight, Point, Result, SceneError, Size, Style,
    TextStyle,
};

pub use plankit_editor::{
    AssetUploader, Catalog, DrawEffect, DrawState, EditorState, GridOverlay, GridSettings,
    PlanDocument, PointerEvent, Scene, SceneEntry, ShapeGeometry, ShapeInstance, Tool, UploadError,
    Viewport,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with console output and `RUST_LOG`
/// environment variable support.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

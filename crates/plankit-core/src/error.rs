//! Error handling for plankit.
//!
//! Per-concern error enums using `thiserror`, plus an umbrella `Error`
//! for callers that want a single result type. All editor errors are
//! local and recoverable; none of them end the editing session.

use thiserror::Error;
use uuid::Uuid;

/// Catalog error type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Instantiation was requested for a template id that is not registered.
    /// The scene is left unchanged.
    #[error("unknown template id: {0}")]
    UnknownTemplate(String),
}

/// Scene error type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    /// An operation referenced an entry that is not in the scene.
    #[error("no scene entry with id {0}")]
    MissingEntry(Uuid),

    /// A shape referenced an owner group that does not exist.
    #[error("shape {shape} references missing group {group}")]
    DanglingGroup {
        /// The shape carrying the stale reference.
        shape: Uuid,
        /// The group id that could not be resolved.
        group: Uuid,
    },
}

/// Umbrella error for plankit operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Scene(#[from] SceneError),
}

/// Result alias using the umbrella [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

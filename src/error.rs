//! Errors for the checked entry points of the scene model.
//!
//! The core operations (insert, remove, undo, redo, intersection) are total
//! and never return these. They surface only where a caller opts into
//! validation, e.g. [`crate::viewport::Viewport::try_new`].

/// Error returned by checked scene and viewport constructors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SceneError {
    /// Viewport zoom must be strictly positive and finite.
    #[error("invalid viewport scale: {0} (must be finite and > 0)")]
    InvalidScale(f64),
}

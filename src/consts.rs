//! Shared numeric constants for the scene crate.

// ── Viewport ────────────────────────────────────────────────────

/// Zoom factor of a fresh viewport.
pub const DEFAULT_SCALE: f64 = 1.0;

// ── Drawing surface ─────────────────────────────────────────────

/// Default drawing-surface width in local units, used for the view box.
pub const DEFAULT_WIDTH: f64 = 1280.0;

/// Default drawing-surface height in local units, used for the view box.
pub const DEFAULT_HEIGHT: f64 = 720.0;

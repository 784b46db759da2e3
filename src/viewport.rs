//! Pannable/zoomable viewport and local (screen) to scene coordinate mapping.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SceneError;
use crate::vector::{Size, Vector};

/// The visible window into scene space.
///
/// `x` / `y` are the scene coordinates of the local origin.
/// `scale` is a zoom factor (1.0 = no zoom). It must be `> 0`; the unchecked
/// constructor and the mapping functions do not verify this.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { x: 0.0, y: 0.0, scale: 1.0 }
    }
}

impl Viewport {
    /// Build a viewport without validating `scale`.
    #[must_use]
    pub const fn new(x: f64, y: f64, scale: f64) -> Self {
        Self { x, y, scale }
    }

    /// Build a viewport, rejecting a non-finite or non-positive `scale`.
    pub fn try_new(x: f64, y: f64, scale: f64) -> Result<Self, SceneError> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(SceneError::InvalidScale(scale));
        }
        Ok(Self { x, y, scale })
    }

    /// Scene coordinates of the local origin.
    #[must_use]
    pub fn origin(&self) -> Vector {
        Vector::new(self.x, self.y)
    }

    /// Map a local (screen) point into scene space: `local / scale + origin`.
    #[must_use]
    pub fn to_scene(&self, local: Vector) -> Vector {
        local.scale(1.0 / self.scale) + self.origin()
    }

    /// Map a scene point back into local (screen) space.
    #[must_use]
    pub fn to_local(&self, scene: Vector) -> Vector {
        (scene - self.origin()).scale(self.scale)
    }

    /// Convert a local distance (pixels) to a scene distance.
    #[must_use]
    pub fn local_dist_to_scene(&self, local_dist: f64) -> f64 {
        local_dist / self.scale
    }

    /// The scene-space rectangle visible through a drawing surface of `size`.
    #[must_use]
    pub fn visible_region(&self, size: Size) -> ViewBox {
        ViewBox {
            x: self.x,
            y: self.y,
            width: size.width / self.scale,
            height: size.height / self.scale,
        }
    }
}

/// Visible scene rectangle, as consumed by renderers.
///
/// `Display` yields the SVG `viewBox` attribute form `"x y width height"`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl fmt::Display for ViewBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.x, self.y, self.width, self.height)
    }
}

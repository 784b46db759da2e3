//! Scene configuration parsed from environment variables.

use crate::consts::{DEFAULT_HEIGHT, DEFAULT_SCALE, DEFAULT_WIDTH};
use crate::scene::Scene;
use crate::vector::Size;
use crate::viewport::Viewport;

pub const ENV_VIEWPORT_X: &str = "SCENE_VIEWPORT_X";
pub const ENV_VIEWPORT_Y: &str = "SCENE_VIEWPORT_Y";
pub const ENV_VIEWPORT_SCALE: &str = "SCENE_VIEWPORT_SCALE";
pub const ENV_WIDTH: &str = "SCENE_WIDTH";
pub const ENV_HEIGHT: &str = "SCENE_HEIGHT";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var}: expected a number, got '{value}'")]
    Parse { var: &'static str, value: String },
    #[error("SCENE_VIEWPORT_SCALE: must be finite and > 0, got {0}")]
    InvalidScale(f64),
}

/// Initial view of a scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneConfig {
    pub viewport: Viewport,
    pub size: Size,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::new(0.0, 0.0, DEFAULT_SCALE),
            size: Size::new(DEFAULT_WIDTH, DEFAULT_HEIGHT),
        }
    }
}

impl SceneConfig {
    /// Build typed scene config from environment variables.
    ///
    /// All optional:
    /// - `SCENE_VIEWPORT_X` / `SCENE_VIEWPORT_Y`: viewport origin, default 0
    /// - `SCENE_VIEWPORT_SCALE`: zoom, default 1, must be `> 0`
    /// - `SCENE_WIDTH` / `SCENE_HEIGHT`: drawing-surface size, default 1280x720
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var_os(key).map(|v| v.to_string_lossy().into_owned()))
    }

    /// Same as [`Self::from_env`] with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let x = parse_f64(&lookup, ENV_VIEWPORT_X, defaults.viewport.x)?;
        let y = parse_f64(&lookup, ENV_VIEWPORT_Y, defaults.viewport.y)?;
        let scale = parse_f64(&lookup, ENV_VIEWPORT_SCALE, defaults.viewport.scale)?;
        if !scale.is_finite() || scale <= 0.0 {
            return Err(ConfigError::InvalidScale(scale));
        }
        let width = parse_f64(&lookup, ENV_WIDTH, defaults.size.width)?;
        let height = parse_f64(&lookup, ENV_HEIGHT, defaults.size.height)?;

        Ok(Self { viewport: Viewport::new(x, y, scale), size: Size::new(width, height) })
    }

    /// Empty scene using this view.
    #[must_use]
    pub fn build_scene(&self) -> Scene {
        Scene::with_view(self.viewport, self.size)
    }
}

fn parse_f64(lookup: &impl Fn(&str) -> Option<String>, var: &'static str, default: f64) -> Result<f64, ConfigError> {
    let Some(raw) = lookup(var) else {
        return Ok(default);
    };
    match raw.trim().parse::<f64>() {
        Ok(value) => Ok(value),
        Err(_) => Err(ConfigError::Parse { var, value: raw }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

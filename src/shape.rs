//! Shape model: geometry variants, identity, and position transforms.
//!
//! A [`PreShape`] is what callers author (usually in viewport-local
//! coordinates). Inserting it into a [`crate::scene::Scene`] assigns a
//! [`ShapeId`] from the scene's [`IdAllocator`], maps its position points
//! into scene space, and yields a [`Shape`].
//!
//! Only position fields (`center`, `start`/`end`, `top_left`) are ever
//! transformed. Radii and sizes stay as authored.

#[cfg(test)]
#[path = "shape_test.rs"]
mod shape_test;

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use crate::vector::{Size, Vector};
use crate::viewport::Viewport;

// =============================================================================
// IDENTITY
// =============================================================================

/// Unique identifier for a shape, assigned once on insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShapeId(pub u64);

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Monotonic shape id source.
///
/// Each allocator starts at 0 and never resets. Clones share the same
/// counter, so handing one allocator to several scenes keeps ids unique
/// across all of them; separate allocators give isolated sequences.
#[derive(Debug, Clone, Default)]
pub struct IdAllocator {
    next: Arc<AtomicU64>,
}

impl IdAllocator {
    /// Create an allocator whose first id is 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an allocator whose first id is `first`.
    #[must_use]
    pub fn starting_at(first: u64) -> Self {
        Self { next: Arc::new(AtomicU64::new(first)) }
    }

    /// Take the next id.
    pub fn next_id(&self) -> ShapeId {
        ShapeId(self.next.fetch_add(1, Ordering::Relaxed))
    }

    /// The id the next call to [`Self::next_id`] will return.
    #[must_use]
    pub fn peek(&self) -> ShapeId {
        ShapeId(self.next.load(Ordering::Relaxed))
    }

    /// Ensure `id` is never handed out again: later ids are all greater.
    /// Never moves the counter backwards.
    pub fn reserve_through(&self, id: ShapeId) {
        self.next.fetch_max(id.0.saturating_add(1), Ordering::Relaxed);
    }
}

// =============================================================================
// GEOMETRY
// =============================================================================

/// Discriminant of a [`Geometry`], without its data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Circle,
    Line,
    Rect,
}

impl ShapeKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Line => "line",
            Self::Rect => "rect",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Circle by center and radius. A zero radius is a point probe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Vector,
    pub radius: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
}

/// Straight segment between two endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub start: Vector,
    pub end: Vector,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<String>,
}

/// Axis-aligned rectangle. `top_left` is the minimum corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rect {
    pub top_left: Vector,
    pub size: Size,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
}

impl Rect {
    /// Bottom-right (maximum) corner.
    #[must_use]
    pub fn bottom_right(&self) -> Vector {
        Vector::new(self.top_left.x + self.size.width, self.top_left.y + self.size.height)
    }

    /// Inclusive point containment on all four sides.
    #[must_use]
    pub fn contains(&self, p: Vector) -> bool {
        let br = self.bottom_right();
        p.x >= self.top_left.x && p.x <= br.x && p.y >= self.top_left.y && p.y <= br.y
    }

    /// Border segments in order: top, right, bottom, left.
    #[must_use]
    pub fn borders(&self) -> [(Vector, Vector); 4] {
        let tl = self.top_left;
        let br = self.bottom_right();
        let tr = Vector::new(br.x, tl.y);
        let bl = Vector::new(tl.x, br.y);
        [(tl, tr), (tr, br), (br, bl), (bl, tl)]
    }
}

/// Geometry of a shape: one of the closed set of drawable primitives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Geometry {
    Circle(Circle),
    Line(Line),
    Rect(Rect),
}

impl Geometry {
    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Circle(_) => ShapeKind::Circle,
            Self::Line(_) => ShapeKind::Line,
            Self::Rect(_) => ShapeKind::Rect,
        }
    }

    /// Stroke color, if set.
    #[must_use]
    pub fn stroke(&self) -> Option<&str> {
        match self {
            Self::Circle(c) => c.stroke.as_deref(),
            Self::Line(l) => l.stroke.as_deref(),
            Self::Rect(r) => r.stroke.as_deref(),
        }
    }

    /// Fill color, if set. Lines never have one.
    #[must_use]
    pub fn fill(&self) -> Option<&str> {
        match self {
            Self::Circle(c) => c.fill.as_deref(),
            Self::Line(_) => None,
            Self::Rect(r) => r.fill.as_deref(),
        }
    }

    /// Apply `f` to every position field, leaving extents untouched.
    #[must_use]
    pub fn map_points(self, mut f: impl FnMut(Vector) -> Vector) -> Self {
        match self {
            Self::Circle(c) => Self::Circle(Circle { center: f(c.center), ..c }),
            Self::Line(l) => {
                let start = f(l.start);
                let end = f(l.end);
                Self::Line(Line { start, end, ..l })
            }
            Self::Rect(r) => Self::Rect(Rect { top_left: f(r.top_left), ..r }),
        }
    }

    /// Shift the position field(s) by `delta`.
    #[must_use]
    pub fn translate(self, delta: Vector) -> Self {
        self.map_points(|p| p + delta)
    }

    /// Map viewport-local position(s) into scene space.
    #[must_use]
    pub fn place_in_viewport(self, viewport: &Viewport) -> Self {
        self.map_points(|p| viewport.to_scene(p))
    }
}

// =============================================================================
// SHAPES
// =============================================================================

fn default_visible() -> bool {
    true
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_true(v: &bool) -> bool {
    *v
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_false(v: &bool) -> bool {
    !*v
}

/// A shape before insertion: geometry plus display flags, no id yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreShape {
    #[serde(flatten)]
    pub geometry: Geometry,
    /// Whether renderers should draw it.
    #[serde(default = "default_visible", skip_serializing_if = "is_true")]
    pub visible: bool,
    /// Marks helper shapes (probes, selection marquees) that queries may skip.
    /// Advisory only; nothing in this crate filters on it.
    #[serde(default, skip_serializing_if = "is_false")]
    pub system: bool,
}

impl From<Geometry> for PreShape {
    fn from(geometry: Geometry) -> Self {
        Self { geometry, visible: true, system: false }
    }
}

impl PreShape {
    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        self.geometry.kind()
    }

    /// Set the stroke color.
    #[must_use]
    pub fn with_stroke(mut self, color: impl Into<String>) -> Self {
        let color = Some(color.into());
        match &mut self.geometry {
            Geometry::Circle(c) => c.stroke = color,
            Geometry::Line(l) => l.stroke = color,
            Geometry::Rect(r) => r.stroke = color,
        }
        self
    }

    /// Set the fill color. Ignored for lines.
    #[must_use]
    pub fn with_fill(mut self, color: impl Into<String>) -> Self {
        match &mut self.geometry {
            Geometry::Circle(c) => c.fill = Some(color.into()),
            Geometry::Line(_) => {}
            Geometry::Rect(r) => r.fill = Some(color.into()),
        }
        self
    }

    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    #[must_use]
    pub fn system(mut self) -> Self {
        self.system = true;
        self
    }

    #[must_use]
    pub fn translate(self, delta: Vector) -> Self {
        Self { geometry: self.geometry.translate(delta), ..self }
    }

    #[must_use]
    pub fn place_in_viewport(self, viewport: &Viewport) -> Self {
        Self { geometry: self.geometry.place_in_viewport(viewport), ..self }
    }

    /// Attach an id, finalizing the shape.
    #[must_use]
    pub fn with_id(self, id: ShapeId) -> Shape {
        Shape { id, geometry: self.geometry, visible: self.visible, system: self.system }
    }
}

/// A shape that lives in a scene.
///
/// `id` is fixed at insertion; only the geometry's position may change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub id: ShapeId,
    #[serde(flatten)]
    pub geometry: Geometry,
    #[serde(default = "default_visible", skip_serializing_if = "is_true")]
    pub visible: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub system: bool,
}

impl Shape {
    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        self.geometry.kind()
    }

    /// Same shape, same id, position shifted by `delta`.
    #[must_use]
    pub fn translate(self, delta: Vector) -> Self {
        Self { geometry: self.geometry.translate(delta), ..self }
    }

    /// Geometric overlap with another shape.
    #[must_use]
    pub fn intersects(&self, other: &Shape) -> bool {
        crate::intersect::intersects(&self.geometry, &other.geometry)
    }
}

// =============================================================================
// CONSTRUCTORS
// =============================================================================

/// Circle with the given center and radius.
#[must_use]
pub fn circle(center: Vector, radius: f64) -> PreShape {
    Geometry::Circle(Circle { center, radius, stroke: None, fill: None }).into()
}

/// Zero-radius circle, used as a hit-test probe.
#[must_use]
pub fn point(pos: Vector) -> PreShape {
    circle(pos, 0.0)
}

/// Segment from `start` to `end`.
#[must_use]
pub fn line(start: Vector, end: Vector) -> PreShape {
    Geometry::Line(Line { start, end, stroke: None }).into()
}

/// Rectangle from its minimum corner and size.
#[must_use]
pub fn rect(top_left: Vector, size: Size) -> PreShape {
    Geometry::Rect(Rect { top_left, size, stroke: None, fill: None }).into()
}

/// Rectangle spanning two arbitrary opposite corners, normalized so that
/// `top_left` is the minimum corner and extents are non-negative.
#[must_use]
pub fn rect_from_corners(a: Vector, b: Vector) -> PreShape {
    rect(
        Vector::new(a.x.min(b.x), a.y.min(b.y)),
        Size::new((a.x - b.x).abs(), (a.y - b.y).abs()),
    )
}

//! Scene aggregate: the shape list, viewport, and history kept coherent.
//!
//! DESIGN
//! ======
//! `Scene` owns its shapes (in insertion order) and its [`History`]. Every
//! mutating entry point that should be undoable goes through
//! [`Scene::insert_with_history`] or [`Scene::remove_with_history`]; the
//! plain [`Scene::insert`] / [`ShapeHandle::dispose`] pair and
//! [`Scene::replace_shapes`] bypass the log.
//!
//! Undo of an insertion finds the live shape by id rather than relying on
//! the copy stored in the action. Undo of a removal re-appends the removed
//! shapes at the end in their captured order; their previous positions
//! among the surviving shapes are not restored. Redo of an insertion
//! overwrites a live shape with the same id in place (one that came back
//! through [`Scene::replace_shapes`]) instead of appending a duplicate.
//! [`Scene::replace_shapes`] advances the id allocator past every id it
//! installs, so no two live shapes ever share an id.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use tracing::{debug, trace};

use crate::error::SceneError;
use crate::history::{Action, History};
use crate::intersect::intersects;
use crate::shape::{IdAllocator, PreShape, Shape, ShapeId, point};
use crate::vector::{Size, Vector};
use crate::viewport::{ViewBox, Viewport};

/// A freshly inserted shape, returned so the caller can undo the insertion
/// without going through history.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeHandle {
    pub shape: Shape,
}

impl ShapeHandle {
    #[must_use]
    pub fn id(&self) -> ShapeId {
        self.shape.id
    }

    /// Remove the inserted shape from `scene` by id. Records no history.
    pub fn dispose(self, scene: &mut Scene) -> Option<Shape> {
        remove_first(&mut scene.shapes, self.shape.id)
    }
}

/// Whiteboard scene state.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    shapes: Vec<Shape>,
    viewport: Viewport,
    size: Size,
    history: History,
    ids: IdAllocator,
}

impl Scene {
    /// Empty scene with an identity viewport and its own id sequence.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty scene drawing ids from `ids`. Share one allocator between
    /// scenes to keep ids unique across them.
    #[must_use]
    pub fn with_ids(ids: IdAllocator) -> Self {
        Self { ids, ..Self::default() }
    }

    /// Empty scene with the given viewport and drawing-surface size.
    #[must_use]
    pub fn with_view(viewport: Viewport, size: Size) -> Self {
        Self { viewport, size, ..Self::default() }
    }

    // --- Accessors ---

    /// Live shapes in insertion order.
    #[must_use]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Look up a live shape by id.
    #[must_use]
    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    #[must_use]
    pub fn ids(&self) -> &IdAllocator {
        &self.ids
    }

    // --- View ---

    /// Replace the viewport. `scale` is not checked.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Replace the viewport, rejecting a non-positive or non-finite scale.
    pub fn set_viewport_checked(&mut self, x: f64, y: f64, scale: f64) -> Result<(), SceneError> {
        self.viewport = Viewport::try_new(x, y, scale)?;
        Ok(())
    }

    /// Update the drawing-surface size used by [`Self::view_box`].
    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    /// Scene rectangle currently visible through the viewport.
    #[must_use]
    pub fn view_box(&self) -> ViewBox {
        self.viewport.visible_region(self.size)
    }

    // --- Mutation without history ---

    /// Assign an id, map `pre` from viewport-local into scene coordinates,
    /// and append it. Records no history.
    pub fn insert(&mut self, pre: PreShape) -> ShapeHandle {
        let id = self.ids.next_id();
        let shape = pre.place_in_viewport(&self.viewport).with_id(id);
        debug!(%id, kind = %shape.kind(), "shape inserted");
        self.shapes.push(shape.clone());
        ShapeHandle { shape }
    }

    /// Shift a live shape's position by `delta` in scene units. Records no
    /// history; actions keep the position captured when they were recorded.
    pub fn translate(&mut self, id: ShapeId, delta: Vector) -> bool {
        let Some(shape) = self.shapes.iter_mut().find(|s| s.id == id) else {
            return false;
        };
        shape.geometry = shape.geometry.clone().translate(delta);
        true
    }

    /// Replace the whole shape list, e.g. when hydrating from a snapshot.
    /// History is left as is. The id allocator is advanced past every
    /// installed id so later insertions cannot collide with them.
    pub fn replace_shapes(&mut self, shapes: Vec<Shape>) {
        if let Some(max) = shapes.iter().map(|s| s.id).max() {
            self.ids.reserve_through(max);
        }
        debug!(count = shapes.len(), "shapes replaced");
        self.shapes = shapes;
    }

    // --- Mutation with history ---

    /// [`Self::insert`] and record an `add_shape` action.
    pub fn insert_with_history(&mut self, pre: PreShape) -> ShapeHandle {
        let handle = self.insert(pre);
        self.history.record(Action::AddShape { shape: handle.shape.clone() });
        handle
    }

    /// Remove every shape matching `pred` and return them in their former
    /// order. Records one `remove_shapes` action when anything was removed;
    /// a removal that matches nothing leaves history untouched.
    pub fn remove_with_history(&mut self, pred: impl FnMut(&Shape) -> bool) -> Vec<Shape> {
        let removed = remove_where(&mut self.shapes, pred);
        if !removed.is_empty() {
            debug!(count = removed.len(), "shapes removed");
            self.history.record(Action::RemoveShapes { shapes: removed.clone() });
        }
        removed
    }

    /// Revert the most recent applied action. Returns `false` when there is
    /// nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(action) = self.history.step_back() else {
            trace!("undo: nothing to undo");
            return false;
        };
        debug!(action = action.name(), "undo");
        match action {
            Action::AddShape { shape } => {
                let id = shape.id;
                remove_first(&mut self.shapes, id);
            }
            Action::RemoveShapes { shapes } => {
                self.shapes.extend(shapes.iter().cloned());
            }
        }
        true
    }

    /// Re-apply the next undone action. Returns `false` when there is
    /// nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(action) = self.history.step_forward() else {
            trace!("redo: nothing to redo");
            return false;
        };
        debug!(action = action.name(), "redo");
        match action {
            Action::AddShape { shape } => match self.shapes.iter_mut().find(|s| s.id == shape.id) {
                Some(live) => *live = shape.clone(),
                None => self.shapes.push(shape.clone()),
            },
            Action::RemoveShapes { shapes } => {
                let ids: Vec<ShapeId> = shapes.iter().map(|s| s.id).collect();
                remove_where(&mut self.shapes, |s| ids.contains(&s.id));
            }
        }
        true
    }

    // --- Queries ---

    /// Every live shape intersecting `probe`, in insertion order.
    ///
    /// `system` shapes are included; callers filter them if needed.
    #[must_use]
    pub fn hit_test(&self, probe: &PreShape) -> Vec<&Shape> {
        self.shapes
            .iter()
            .filter(|s| intersects(&s.geometry, &probe.geometry))
            .collect()
    }

    /// Shapes under a viewport-local point, probed with a zero-radius circle.
    #[must_use]
    pub fn shapes_at(&self, local: Vector) -> Vec<&Shape> {
        self.hit_test(&point(self.viewport.to_scene(local)))
    }

    /// The most recently inserted live shape intersecting `probe`.
    #[must_use]
    pub fn topmost_hit(&self, probe: &PreShape) -> Option<&Shape> {
        self.shapes
            .iter()
            .rev()
            .find(|s| intersects(&s.geometry, &probe.geometry))
    }
}

/// Remove the first shape with `id`, if any.
fn remove_first(shapes: &mut Vec<Shape>, id: ShapeId) -> Option<Shape> {
    let index = shapes.iter().position(|s| s.id == id)?;
    Some(shapes.remove(index))
}

/// Split off every shape matching `pred`, keeping the survivors in order.
fn remove_where(shapes: &mut Vec<Shape>, pred: impl FnMut(&Shape) -> bool) -> Vec<Shape> {
    let (removed, kept): (Vec<Shape>, Vec<Shape>) = std::mem::take(shapes).into_iter().partition(pred);
    *shapes = kept;
    removed
}

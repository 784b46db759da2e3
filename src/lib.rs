//! In-memory scene model for an interactive whiteboard.
//!
//! This crate owns the shapes on the board, the geometric hit-testing used to
//! find them, and the undo/redo log of edits, all relative to a pannable and
//! zoomable viewport. Rendering and input handling live with the host; they
//! read [`scene::Scene`] and call its mutation methods.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`scene`] | Scene aggregate: shapes, viewport, history, and coherent mutations |
//! | [`shape`] | Shape variants, ids, constructors, and position transforms |
//! | [`intersect`] | Pairwise intersection over every shape-kind combination |
//! | [`history`] | Action log and undo/redo cursor |
//! | [`viewport`] | Viewport and local/scene coordinate conversions |
//! | [`vector`] | 2D vector arithmetic |
//! | [`config`] | Initial view parsed from environment variables |
//! | [`error`] | Errors for the checked entry points |
//! | [`consts`] | Shared numeric defaults |

pub mod config;
pub mod consts;
pub mod error;
pub mod history;
pub mod intersect;
pub mod scene;
pub mod shape;
pub mod vector;
pub mod viewport;

pub use error::SceneError;
pub use history::{Action, History};
pub use intersect::intersects;
pub use scene::{Scene, ShapeHandle};
pub use shape::{Geometry, IdAllocator, PreShape, Shape, ShapeId, ShapeKind};
pub use vector::{Size, Vector};
pub use viewport::{ViewBox, Viewport};

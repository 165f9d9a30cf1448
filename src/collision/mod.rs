//! Collision detection: deciding which drop target a drag is currently over.
//!
//! The input layer measures geometry every frame and hands it over as a
//! [`DragGeometry`]. [`algorithms`] holds the generic ranking passes and
//! [`strategy`] combines them into the multi-container policy used by
//! [`Board::detect_collision`](crate::Board::detect_collision).

pub mod algorithms;
pub mod strategy;

use crate::domain::Id;
use kurbo::{Point, Rect};

pub use algorithms::{closest_center, first_collision, pointer_within, rect_intersection};
pub use strategy::detect;

/// A registered drop target and its measured rectangle
#[derive(Debug, Clone, PartialEq)]
pub struct Droppable {
    pub id: Id,
    pub rect: Rect,
}

impl Droppable {
    pub fn new(id: impl Into<Id>, rect: Rect) -> Self {
        Self {
            id: id.into(),
            rect,
        }
    }
}

/// Geometry for one frame of an active drag
#[derive(Debug, Clone, Default)]
pub struct DragGeometry {
    /// The dragged element's rectangle, translated by the live drag offset.
    pub collision_rect: Rect,
    /// Pointer coordinates; `None` for keyboard drags.
    pub pointer: Option<Point>,
    /// Every registered droppable, in registration order.
    pub droppables: Vec<Droppable>,
}

impl DragGeometry {
    pub fn new(collision_rect: Rect, pointer: Option<Point>, droppables: Vec<Droppable>) -> Self {
        Self {
            collision_rect,
            pointer,
            droppables,
        }
    }
}

/// A ranked candidate; `value` is a distance or a ratio depending on the algorithm
#[derive(Debug, Clone, PartialEq)]
pub struct Collision {
    pub id: Id,
    pub value: f64,
}

impl Collision {
    pub fn new(id: Id, value: f64) -> Self {
        Self { id, value }
    }
}

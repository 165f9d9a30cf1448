//! Render models for the board, container, sortable wrapper, and item.
//!
//! These carry everything a renderer needs (labels, handle attributes, CSS
//! transform and transition strings) without tying the crate to one.

pub mod container;
pub mod item;
pub mod sortable;

pub use container::ContainerView;
pub use item::ItemView;
pub use sortable::{HandleAttributes, SortableItemView, Transform, Transition};

use crate::domain::{Board, Id};
use std::collections::HashMap;

impl Board {
    /// Render models for every container, in board order
    pub fn views(&self, transforms: &HashMap<Id, Transform>) -> Vec<ContainerView> {
        let active_id = self.active_id();
        self.containers()
            .iter()
            .map(|container| ContainerView::build(container, active_id, transforms))
            .collect()
    }

    /// Floating preview for the item being dragged
    pub fn overlay_view(&self) -> Option<ItemView> {
        self.active_id()
            .and_then(|id| self.item(id))
            .map(ItemView::overlay)
    }
}

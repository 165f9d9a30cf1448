use crate::domain::{Container, Id};
use crate::view::sortable::{SortableItemView, Transform};
use serde::Serialize;
use std::collections::HashMap;

/// Render model for one container
///
/// A container is always a droppable, including when it holds no items, so
/// empty columns stay reachable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContainerView {
    pub id: Id,
    pub droppable: bool,
    pub items: Vec<SortableItemView>,
}

impl ContainerView {
    pub const CLASS_NAME: &'static str = "droppable-container";
    pub const WRAPPER_CLASS_NAME: &'static str = "droppable-container__sortable-wrapper";

    pub fn build(
        container: &Container,
        active_id: Option<&Id>,
        transforms: &HashMap<Id, Transform>,
    ) -> Self {
        let items = container
            .items
            .iter()
            .map(|item| SortableItemView::build(item, active_id, transforms.get(&item.id).copied()))
            .collect();

        Self {
            id: container.id.clone(),
            droppable: true,
            items,
        }
    }

    /// Class for the outer container element
    pub fn class_name(&self) -> &'static str {
        Self::CLASS_NAME
    }

    /// Class for the element registered as the droppable
    pub fn wrapper_class_name(&self) -> &'static str {
        Self::WRAPPER_CLASS_NAME
    }

    pub fn keys(&self) -> Vec<&Id> {
        self.items.iter().map(|item| item.key()).collect()
    }
}

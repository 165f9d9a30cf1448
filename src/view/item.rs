use crate::domain::{Id, Item};
use serde::Serialize;

/// Render model for one item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemView {
    pub id: Id,
    /// Visible label; `None` for placeholders, which still occupy their slot.
    pub label: Option<String>,
    pub is_dragging: bool,
    /// Floating drag preview, not registered as a drop target.
    pub is_overlay: bool,
}

impl ItemView {
    pub fn new(item: &Item, is_dragging: bool) -> Self {
        Self {
            id: item.id.clone(),
            label: (!item.is_placeholder()).then(|| item.id.to_string()),
            is_dragging,
            is_overlay: false,
        }
    }

    pub fn overlay(item: &Item) -> Self {
        Self {
            is_overlay: true,
            ..Self::new(item, false)
        }
    }

    pub fn class_names(&self) -> Vec<&'static str> {
        let mut classes = vec!["sortable-item"];
        if self.is_overlay {
            classes.push("sortable-item--is-overlay");
        }
        if self.is_dragging {
            classes.push("sortable-item--is-dragging");
        }
        classes
    }

    pub fn class_name(&self) -> String {
        self.class_names().join(" ")
    }
}

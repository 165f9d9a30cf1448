use crate::domain::{Id, Item};
use crate::view::item::ItemView;
use serde::Serialize;

/// Live visual offset applied to an item while a drag is in progress
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Transform {
    pub x: f64,
    pub y: f64,
    pub scale_x: f64,
    pub scale_y: f64,
}

impl Transform {
    pub fn translate(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            scale_x: 1.0,
            scale_y: 1.0,
        }
    }

    /// Full transform including scale, for rendering with a drag overlay
    pub fn to_css(&self) -> String {
        format!(
            "{} scaleX({}) scaleY({})",
            self.to_css_translate(),
            self.scale_x,
            self.scale_y
        )
    }

    /// Translation only, for rendering the dragged item in place without an overlay
    pub fn to_css_translate(&self) -> String {
        format!("translate3d({}px, {}px, 0)", self.x.round(), self.y.round())
    }
}

/// Animation used when an item settles into its new slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transition {
    pub duration_ms: u32,
    pub easing: String,
}

impl Default for Transition {
    fn default() -> Self {
        Self {
            duration_ms: 200,
            easing: "ease".to_string(),
        }
    }
}

impl Transition {
    pub fn to_css(&self) -> String {
        format!("transform {}ms {}", self.duration_ms, self.easing)
    }
}

/// Attributes spread onto the drag handle
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HandleAttributes {
    pub role: &'static str,
    /// `None` removes the handle from the tab order.
    pub tab_index: Option<i32>,
    pub aria_disabled: bool,
    pub aria_pressed: Option<bool>,
    pub aria_role_description: &'static str,
}

/// Binds one item to the drag system
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SortableItemView {
    pub id: Id,
    /// Placeholders cannot start a drag.
    pub disabled: bool,
    pub is_dragging: bool,
    pub transform: Option<Transform>,
    pub transition: Option<String>,
    pub attributes: HandleAttributes,
    pub item: ItemView,
}

impl SortableItemView {
    pub fn build(item: &Item, active_id: Option<&Id>, transform: Option<Transform>) -> Self {
        let disabled = !item.is_draggable();
        let is_dragging = active_id == Some(&item.id);

        Self {
            id: item.id.clone(),
            disabled,
            is_dragging,
            transform,
            // The dragged item follows the pointer directly.
            transition: (!is_dragging).then(|| Transition::default().to_css()),
            attributes: HandleAttributes {
                role: "button",
                tab_index: (!disabled).then_some(0),
                aria_disabled: disabled,
                aria_pressed: active_id.is_some().then_some(is_dragging),
                aria_role_description: "sortable",
            },
            item: ItemView::new(item, is_dragging),
        }
    }

    /// Render key; items are keyed by their own id so reorders keep identity
    pub fn key(&self) -> &Id {
        &self.id
    }

    pub fn style_transform(&self) -> Option<String> {
        self.transform.map(|t| t.to_css())
    }
}

//! Drag lifecycle: start, over, end, cancel, and the per-frame hooks.
//!
//! A session moves `Idle -> Dragging -> {Committed | CommittedNoop | Reverted} -> Idle`.
//! Drag-over is authoritative for which container the item lives in; drag-end
//! only decides the final index inside that container.

use crate::collision::{self, DragGeometry};
use crate::domain::{Board, DragSession, Id};
use crate::error::{BoardError, Result};
use kurbo::Rect;
use tracing::{debug, warn};

/// The current drop target and its measured rectangle
#[derive(Debug, Clone, PartialEq)]
pub struct Over {
    pub id: Id,
    pub rect: Rect,
}

impl Over {
    pub fn new(id: impl Into<Id>, rect: Rect) -> Self {
        Self {
            id: id.into(),
            rect,
        }
    }
}

/// Drag-over payload delivered by the input layer
#[derive(Debug, Clone, PartialEq)]
pub struct DragOverEvent {
    pub active: Id,
    /// Active element's rectangle translated by the live drag offset.
    pub active_rect: Option<Rect>,
    pub over: Option<Over>,
}

/// How a drag session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    /// Drop resolved to a target; any reorder has been applied.
    Committed,
    /// Drop had no resolvable target; the board keeps whatever drag-over left.
    CommittedNoop,
    /// Cancelled; the board was restored from the drag-start snapshot.
    Reverted,
    /// Nothing to end or cancel.
    Idle,
}

impl Board {
    /// Begins a drag session, snapshotting every container for cancellation
    pub fn on_drag_start(&mut self, active_id: impl Into<Id>) -> Result<()> {
        let active_id = active_id.into();

        if let Some(session) = &self.session {
            warn!(active = %active_id, current = %session.active_id, "drag start while a session is active");
            return Err(BoardError::SessionActive(session.active_id.to_string()));
        }

        if !self.is_container(&active_id) {
            let item = self
                .item(&active_id)
                .ok_or_else(|| BoardError::ItemNotFound(active_id.to_string()))?;
            if !item.is_draggable() {
                warn!(active = %active_id, "placeholder items cannot be dragged");
                return Err(BoardError::NotDraggable(active_id.to_string()));
            }
        }

        let session = DragSession::start(active_id, self.snapshot());
        debug!(session = %session.id, active = %session.active_id, "drag started");
        self.session = Some(session);
        Ok(())
    }

    /// Live preview: moves the active item into the container it is hovering over
    ///
    /// Only the session's own active item moves; events outside a session are ignored.
    /// Same-container hovering leaves the board untouched; that reorder waits
    /// for drag-end.
    pub fn on_drag_over(&mut self, event: &DragOverEvent) {
        let Some(over) = &event.over else {
            return;
        };
        match &self.session {
            Some(session) if session.active_id == event.active => {}
            _ => return,
        }
        if self.is_container(&event.active) {
            return;
        }

        let (Some(active_container), Some(over_container)) = (
            self.resolve_container(&event.active),
            self.resolve_container(&over.id),
        ) else {
            return;
        };
        if active_container == over_container {
            return;
        }

        let target = self.container_at(over_container);
        let index = match target.position(&over.id) {
            Some(over_index) => {
                let is_below_over_item = event
                    .active_rect
                    .map(|rect| rect.y0 > over.rect.y1)
                    .unwrap_or(false);
                over_index + usize::from(is_below_over_item)
            }
            None => target.items.len() + 1,
        };

        if !self.transfer(&event.active, active_container, over_container, index) {
            return;
        }

        if let Some(session) = self.session.as_mut() {
            session.just_moved_across_containers = true;
        }
        self.frame_clear_pending = true;

        debug!(
            active = %event.active,
            over = %over.id,
            to = %self.container_at(over_container).id,
            index,
            "moved across containers"
        );
    }

    /// Commits the drop, reordering within the shared container when indices differ
    ///
    /// Without an active session nothing changes and the outcome is `Idle`.
    pub fn on_drag_end(&mut self, active_id: &Id, over_id: Option<&Id>) -> DragOutcome {
        let Some(session) = self.session.take() else {
            return DragOutcome::Idle;
        };
        let session_id = session.id;

        let (Some(over_id), Some(active_container)) = (over_id, self.resolve_container(active_id))
        else {
            debug!(session = %session_id, active = %active_id, "drag ended without a target");
            return DragOutcome::CommittedNoop;
        };
        let Some(over_container) = self.resolve_container(over_id) else {
            debug!(session = %session_id, active = %active_id, over = %over_id, "drop target not on board");
            return DragOutcome::CommittedNoop;
        };

        if active_container == over_container {
            let container = self.container_at(over_container);
            if let (Some(from), Some(to)) = (container.position(active_id), container.position(over_id)) {
                if from != to {
                    self.reorder(over_container, from, to);
                }
            }
        }

        debug!(
            session = %session_id,
            active = %active_id,
            over = %over_id,
            elapsed_ms = session.elapsed().num_milliseconds(),
            "drag committed"
        );
        DragOutcome::Committed
    }

    /// Restores the board exactly as it was at drag-start
    ///
    /// Safe to call at any time; without an active session it does nothing.
    pub fn on_drag_cancel(&mut self) -> DragOutcome {
        let Some(session) = self.session.take() else {
            return DragOutcome::Idle;
        };

        debug!(session = %session.id, active = %session.active_id, "drag cancelled");
        self.restore(session.into_snapshot());
        self.frame_clear_pending = true;
        DragOutcome::Reverted
    }

    /// Runs the collision strategy for one frame of the active drag
    pub fn detect_collision(&mut self, geometry: &DragGeometry) -> Option<Id> {
        let mut session = self.session.take()?;
        let target = collision::detect(self, &mut session, geometry);
        self.session = Some(session);
        target
    }

    /// Animation frame callback; clears the cross-container flag once the layout has settled
    pub fn on_animation_frame(&mut self) {
        if !self.frame_clear_pending {
            return;
        }
        self.frame_clear_pending = false;
        if let Some(session) = self.session.as_mut() {
            session.just_moved_across_containers = false;
        }
    }
}

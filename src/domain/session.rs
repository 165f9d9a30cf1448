use crate::domain::board::Container;
use crate::domain::item::Id;
use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

/// Transient state that lives from drag-start until drag-end or cancel
///
/// Everything here is scoped to one session. A new drag starts from a fresh
/// `DragSession`, so neither the matched-target cache nor the cross-container
/// flag can leak between drags.
#[derive(Debug, Clone)]
pub struct DragSession {
    pub id: Uuid,
    pub active_id: Id,
    pub started_at: DateTime<Utc>,
    /// Deep copy of every container taken at drag-start, restored on cancel.
    pub(crate) snapshot: Vec<Container>,
    /// Last target returned by the collision strategy.
    pub last_matched_target: Option<Id>,
    /// Set by a cross-container move; cleared one animation frame later.
    pub just_moved_across_containers: bool,
}

impl DragSession {
    pub(crate) fn start(active_id: Id, snapshot: Vec<Container>) -> Self {
        Self {
            id: Uuid::new_v4(),
            active_id,
            started_at: Utc::now(),
            snapshot,
            last_matched_target: None,
            just_moved_across_containers: false,
        }
    }

    pub fn elapsed(&self) -> Duration {
        Utc::now() - self.started_at
    }

    pub(crate) fn into_snapshot(self) -> Vec<Container> {
        self.snapshot
    }
}

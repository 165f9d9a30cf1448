//! Multi-container collision strategy.
//!
//! - Container drags only consider other containers, nearest center wins.
//! - Item drags first look for droppables under the pointer, then for
//!   droppables overlapping the dragged rectangle.
//! - A matched container with items is narrowed to its nearest item.
//! - With no match, the strategy falls back to the session's cached target,
//!   or to the dragged item itself right after a cross-container move, when
//!   the layout measured this frame is still stale.

use crate::collision::algorithms::{closest_center, first_collision, pointer_within, rect_intersection};
use crate::collision::DragGeometry;
use crate::domain::{Board, DragSession, Id};
use tracing::trace;

/// Returns the drop target for this frame, updating the session's target cache
pub fn detect(board: &Board, session: &mut DragSession, geometry: &DragGeometry) -> Option<Id> {
    if board.is_container(&session.active_id) {
        let containers = geometry
            .droppables
            .iter()
            .filter(|d| board.is_container(&d.id));
        let target = first_collision(&closest_center(geometry.collision_rect, containers)).cloned();
        trace!(active = %session.active_id, target = ?target, "container collision");
        return target;
    }

    let mut intersections = pointer_within(geometry.pointer, &geometry.droppables);
    if intersections.is_empty() {
        intersections = rect_intersection(geometry.collision_rect, &geometry.droppables);
    }

    if let Some(over_id) = first_collision(&intersections).cloned() {
        let target = narrow_to_item(board, geometry, over_id);
        trace!(active = %session.active_id, target = %target, "matched droppable");
        session.last_matched_target = Some(target.clone());
        return Some(target);
    }

    if session.just_moved_across_containers {
        session.last_matched_target = Some(session.active_id.clone());
    }

    trace!(
        active = %session.active_id,
        cached = ?session.last_matched_target,
        "no droppable matched, using cached target"
    );
    session.last_matched_target.clone()
}

/// Replaces a non-empty container match with its nearest item
///
/// If none of the container's items are registered as droppables this
/// frame, the container itself stays the target.
fn narrow_to_item(board: &Board, geometry: &DragGeometry, over_id: Id) -> Id {
    let Some(container) = board.items(&over_id) else {
        return over_id;
    };
    if container.is_empty() {
        return over_id;
    }

    let candidates = geometry
        .droppables
        .iter()
        .filter(|d| d.id != over_id && container.iter().any(|item| item.id == d.id));

    first_collision(&closest_center(geometry.collision_rect, candidates))
        .cloned()
        .unwrap_or(over_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::Droppable;
    use crate::domain::{BoardConfig, ContainerConfig, Item};
    use crate::sensors::SensorConfig;
    use kurbo::{Point, Rect};

    /// Two side-by-side columns, 100 wide, items 40 tall stacked from y = 0.
    fn board() -> Board {
        Board::new(BoardConfig {
            name: "test".to_string(),
            containers: vec![
                ContainerConfig::new("left", vec![Item::new(1), Item::new(2)]),
                ContainerConfig::new("right", vec![Item::new(3), Item::new(4)]),
                ContainerConfig::new("empty", vec![]),
            ],
            sensors: SensorConfig::default(),
        })
        .unwrap()
    }

    fn droppables() -> Vec<Droppable> {
        vec![
            Droppable::new("left", Rect::new(0.0, 0.0, 100.0, 200.0)),
            Droppable::new(1, Rect::new(0.0, 0.0, 100.0, 40.0)),
            Droppable::new(2, Rect::new(0.0, 40.0, 100.0, 80.0)),
            Droppable::new("right", Rect::new(200.0, 0.0, 300.0, 200.0)),
            Droppable::new(3, Rect::new(200.0, 0.0, 300.0, 40.0)),
            Droppable::new(4, Rect::new(200.0, 40.0, 300.0, 80.0)),
            Droppable::new("empty", Rect::new(400.0, 0.0, 500.0, 200.0)),
        ]
    }

    fn session(active: impl Into<Id>) -> DragSession {
        DragSession::start(active.into(), Vec::new())
    }

    #[test]
    fn test_pointer_over_container_narrows_to_nearest_item() {
        let board = board();
        let mut session = session(1);
        // Pointer in the right column's empty lower area, dragged rect near item 4.
        let geometry = DragGeometry::new(
            Rect::new(200.0, 50.0, 300.0, 90.0),
            Some(Point::new(250.0, 150.0)),
            droppables(),
        );

        assert_eq!(detect(&board, &mut session, &geometry), Some(Id::from(4)));
        assert_eq!(session.last_matched_target, Some(Id::from(4)));
    }

    #[test]
    fn test_pointer_over_item_prefers_item() {
        let board = board();
        let mut session = session(1);
        let geometry = DragGeometry::new(
            Rect::new(200.0, 0.0, 300.0, 40.0),
            Some(Point::new(250.0, 10.0)),
            droppables(),
        );

        // Item 3 has the smaller mean corner distance than the column around it.
        assert_eq!(detect(&board, &mut session, &geometry), Some(Id::from(3)));
    }

    #[test]
    fn test_empty_container_is_a_target() {
        let board = board();
        let mut session = session(1);
        let geometry = DragGeometry::new(
            Rect::new(400.0, 0.0, 500.0, 40.0),
            Some(Point::new(450.0, 100.0)),
            droppables(),
        );

        assert_eq!(detect(&board, &mut session, &geometry), Some(Id::from("empty")));
    }

    #[test]
    fn test_falls_back_to_rect_intersection_without_pointer() {
        let board = board();
        let mut session = session(1);
        let geometry = DragGeometry::new(Rect::new(0.0, 45.0, 100.0, 85.0), None, droppables());

        let target = detect(&board, &mut session, &geometry);
        assert_eq!(target, Some(Id::from(2)));
    }

    #[test]
    fn test_no_match_returns_cached_target() {
        let board = board();
        let mut session = session(1);
        session.last_matched_target = Some(Id::from(3));
        let geometry = DragGeometry::new(
            Rect::new(1000.0, 1000.0, 1100.0, 1040.0),
            Some(Point::new(1050.0, 1020.0)),
            droppables(),
        );

        assert_eq!(detect(&board, &mut session, &geometry), Some(Id::from(3)));
    }

    #[test]
    fn test_no_match_after_move_returns_active() {
        let board = board();
        let mut session = session(1);
        session.last_matched_target = Some(Id::from(3));
        session.just_moved_across_containers = true;
        let geometry = DragGeometry::new(
            Rect::new(1000.0, 1000.0, 1100.0, 1040.0),
            Some(Point::new(1050.0, 1020.0)),
            droppables(),
        );

        assert_eq!(detect(&board, &mut session, &geometry), Some(Id::from(1)));
        assert_eq!(session.last_matched_target, Some(Id::from(1)));
    }

    #[test]
    fn test_no_match_and_no_cache_is_none() {
        let board = board();
        let mut session = session(1);
        let geometry = DragGeometry::new(Rect::new(1000.0, 1000.0, 1100.0, 1040.0), None, droppables());

        assert_eq!(detect(&board, &mut session, &geometry), None);
    }

    #[test]
    fn test_container_drag_only_matches_containers() {
        let board = board();
        let mut session = session("left");
        let geometry = DragGeometry::new(
            Rect::new(190.0, 0.0, 290.0, 200.0),
            Some(Point::new(210.0, 20.0)),
            droppables(),
        );

        assert_eq!(detect(&board, &mut session, &geometry), Some(Id::from("right")));
    }

    #[test]
    fn test_detection_is_deterministic() {
        let board = board();
        let geometry = DragGeometry::new(
            Rect::new(200.0, 50.0, 300.0, 90.0),
            Some(Point::new(250.0, 150.0)),
            droppables(),
        );

        let mut first = session(1);
        let mut second = session(1);
        let a = detect(&board, &mut first, &geometry);
        let b = detect(&board, &mut second, &geometry);
        assert_eq!(a, b);
        assert_eq!(detect(&board, &mut first, &geometry), a);
    }
}

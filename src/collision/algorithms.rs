//! Building-block collision algorithms.
//!
//! Each algorithm ranks droppables against the dragged element and returns
//! the survivors in ranked order. Sorting is stable, so equal scores keep
//! droppable registration order and results are deterministic.

use crate::collision::{Collision, Droppable};
use crate::domain::Id;
use kurbo::{Point, Rect};
use std::cmp::Ordering;

/// Ranks every droppable by the distance between its center and the center of `collision_rect`
///
/// Nearest first.
pub fn closest_center<'a, I>(collision_rect: Rect, droppables: I) -> Vec<Collision>
where
    I: IntoIterator<Item = &'a Droppable>,
{
    let center = collision_rect.center();
    let mut collisions: Vec<Collision> = droppables
        .into_iter()
        .map(|d| Collision::new(d.id.clone(), center.distance(d.rect.center())))
        .collect();

    collisions.sort_by(ascending);
    collisions
}

/// Droppables whose rectangle contains the pointer, edges included
///
/// Ranked by the mean distance from the pointer to the droppable's four
/// corners, nearest first. Without pointer coordinates (keyboard drags)
/// nothing matches.
pub fn pointer_within<'a, I>(pointer: Option<Point>, droppables: I) -> Vec<Collision>
where
    I: IntoIterator<Item = &'a Droppable>,
{
    let Some(pointer) = pointer else {
        return Vec::new();
    };

    let mut collisions: Vec<Collision> = droppables
        .into_iter()
        .filter(|d| contains_inclusive(d.rect, pointer))
        .map(|d| Collision::new(d.id.clone(), mean_corner_distance(d.rect, pointer)))
        .collect();

    collisions.sort_by(ascending);
    collisions
}

/// Droppables overlapping `collision_rect`, ranked by intersection ratio, largest first
///
/// The ratio is intersection area over union area.
pub fn rect_intersection<'a, I>(collision_rect: Rect, droppables: I) -> Vec<Collision>
where
    I: IntoIterator<Item = &'a Droppable>,
{
    let mut collisions: Vec<Collision> = droppables
        .into_iter()
        .filter_map(|d| {
            let ratio = intersection_ratio(d.rect, collision_rect);
            (ratio > 0.0).then(|| Collision::new(d.id.clone(), ratio))
        })
        .collect();

    collisions.sort_by(descending);
    collisions
}

pub fn first_collision(collisions: &[Collision]) -> Option<&Id> {
    collisions.first().map(|c| &c.id)
}

fn contains_inclusive(rect: Rect, point: Point) -> bool {
    point.x >= rect.x0 && point.x <= rect.x1 && point.y >= rect.y0 && point.y <= rect.y1
}

fn mean_corner_distance(rect: Rect, point: Point) -> f64 {
    let corners = [
        Point::new(rect.x0, rect.y0),
        Point::new(rect.x1, rect.y0),
        Point::new(rect.x0, rect.y1),
        Point::new(rect.x1, rect.y1),
    ];
    corners.iter().map(|c| c.distance(point)).sum::<f64>() / 4.0
}

fn intersection_ratio(target: Rect, dragged: Rect) -> f64 {
    let intersection = target.intersect(dragged).area();
    if intersection <= 0.0 {
        return 0.0;
    }

    let union = target.area() + dragged.area() - intersection;
    if union <= 0.0 {
        0.0
    } else {
        intersection / union
    }
}

fn ascending(a: &Collision, b: &Collision) -> Ordering {
    a.value.total_cmp(&b.value)
}

fn descending(a: &Collision, b: &Collision) -> Ordering {
    b.value.total_cmp(&a.value)
}

//! # Sortboard Core
//!
//! Drag-and-drop core for multi-container sortable boards.
//!
//! A [`Board`] owns a fixed set of ordered containers. The input layer feeds
//! it drag lifecycle events and per-frame geometry; the board decides which
//! container and index the dragged item would land in, previews
//! cross-container moves live, commits the final order on drop, and restores
//! the drag-start snapshot on cancel. Rendering is left to the caller, which
//! receives plain view models.

pub mod collision;
pub mod domain;
pub mod drag;
pub mod error;
pub mod seed;
pub mod sensors;
pub mod view;

// Re-export commonly used types
pub use collision::{DragGeometry, Droppable};
pub use domain::{
    board::{Board, BoardConfig, Container, ContainerConfig},
    item::{Id, Item, ItemData},
    session::DragSession,
};
pub use drag::{DragOutcome, DragOverEvent, Over};
pub use error::{BoardError, Result};
pub use seed::SeedSource;
pub use sensors::SensorConfig;
